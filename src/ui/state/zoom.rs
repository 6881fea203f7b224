// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! The zoom level is stored as a factor of the fitted scale. The absolute
//! scale is derived from the current [`ViewportFit`], so resizing the window
//! keeps the user's relative zoom while the fit itself follows the viewport.

use crate::domain::fit::{ImageLayout, ViewportFit};
use crate::domain::zoom::{ZoomFactor, ZoomStep};

/// Manages zoom level and step for the detail viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomState {
    pub factor: ZoomFactor,
    pub step: ZoomStep,
}

impl ZoomState {
    #[must_use]
    pub fn with_step(step_percent: f32) -> Self {
        Self {
            factor: ZoomFactor::default(),
            step: ZoomStep::new(step_percent),
        }
    }

    /// Returns to the fitted scale.
    pub fn reset(&mut self) {
        self.factor = ZoomFactor::default();
    }

    pub fn zoom_in(&mut self) {
        self.factor = self.factor.zoom_in(self.step);
    }

    pub fn zoom_out(&mut self) {
        self.factor = self.factor.zoom_out(self.step);
    }

    /// Applies mouse-wheel zoom, one step per line. Positive lines zoom in.
    pub fn apply_wheel(&mut self, lines: f32) {
        if lines == 0.0 || !lines.is_finite() {
            return;
        }
        let multiplier = self.step.multiplier().powf(lines);
        self.factor = ZoomFactor::new(self.factor.value() * multiplier);
    }

    /// Absolute scale for `fit`, always within its bounds.
    #[must_use]
    pub fn scale(&self, fit: &ViewportFit) -> f32 {
        fit.clamp_scale(fit.scale * self.factor.value())
    }

    /// Displayed rectangle for `fit` at the current zoom.
    #[must_use]
    pub fn layout(&self, fit: &ViewportFit) -> ImageLayout {
        fit.layout(self.scale(fit))
    }

    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        !self.factor.is_max()
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        !self.factor.is_min()
    }
}

/// Formats a number for display (removes unnecessary decimal places)
#[must_use]
pub fn format_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i32;
        format!("{int_value}")
    } else {
        format!("{value:.1}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Scale as a percentage of native pixels, rounded for the toolbar label.
#[must_use]
pub fn scale_percent_label(scale: f32) -> String {
    format_number((scale * 1000.0).round() / 10.0)
}
