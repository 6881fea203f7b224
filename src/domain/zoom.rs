// SPDX-License-Identifier: MPL-2.0
//! Zoom value objects.
//!
//! Zoom is expressed as a factor relative to the fitted scale, so a factor
//! of 1 always shows the whole image whatever the viewport size.

/// Zoom bounds relative to the fitted scale.
pub mod zoom_bounds {
    /// Minimum zoom factor (the fit).
    pub const MIN_FACTOR: f32 = 1.0;
    /// Maximum zoom factor.
    pub const MAX_FACTOR: f32 = 10.0;
    /// Minimum zoom step percentage.
    pub const MIN_STEP: f32 = 1.0;
    /// Maximum zoom step percentage.
    pub const MAX_STEP: f32 = 200.0;
    /// Default zoom step percentage.
    pub const DEFAULT_STEP: f32 = 25.0;
}

// =============================================================================
// ZoomFactor
// =============================================================================

/// Multiplier applied to the fitted scale, always within `[1, 10]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Creates a new zoom factor, clamping the value to the valid range.
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_nan() {
            return Self::default();
        }
        Self(factor.clamp(zoom_bounds::MIN_FACTOR, zoom_bounds::MAX_FACTOR))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= zoom_bounds::MIN_FACTOR
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= zoom_bounds::MAX_FACTOR
    }

    /// Zooms in by one step.
    #[must_use]
    pub fn zoom_in(self, step: ZoomStep) -> Self {
        Self::new(self.0 * step.multiplier())
    }

    /// Zooms out by one step.
    #[must_use]
    pub fn zoom_out(self, step: ZoomStep) -> Self {
        Self::new(self.0 / step.multiplier())
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(zoom_bounds::MIN_FACTOR)
    }
}

// =============================================================================
// ZoomStep
// =============================================================================

/// Zoom step percentage, guaranteed to be within valid range (1%–200%).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomStep(f32);

impl ZoomStep {
    /// Creates a new zoom step, clamping the value to the valid range.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(zoom_bounds::MIN_STEP, zoom_bounds::MAX_STEP))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Factor applied per step (25% gives 1.25).
    #[must_use]
    pub fn multiplier(self) -> f32 {
        1.0 + self.0 / 100.0
    }
}

impl Default for ZoomStep {
    fn default() -> Self {
        Self(zoom_bounds::DEFAULT_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, SCALE_EPSILON};

    #[test]
    fn factor_is_clamped() {
        assert_eq!(ZoomFactor::new(0.2).value(), zoom_bounds::MIN_FACTOR);
        assert_eq!(ZoomFactor::new(42.0).value(), zoom_bounds::MAX_FACTOR);
        assert_eq!(ZoomFactor::new(f32::NAN), ZoomFactor::default());
    }

    #[test]
    fn zoom_in_then_out_returns_to_start() {
        let step = ZoomStep::new(25.0);
        let factor = ZoomFactor::new(2.0).zoom_in(step).zoom_out(step);
        assert_abs_diff_eq!(factor.value(), 2.0, epsilon = SCALE_EPSILON);
    }

    #[test]
    fn zoom_out_stops_at_fit() {
        let factor = ZoomFactor::default().zoom_out(ZoomStep::default());
        assert!(factor.is_min());
    }

    #[test]
    fn repeated_zoom_in_stops_at_max() {
        let step = ZoomStep::new(200.0);
        let factor = (0..10).fold(ZoomFactor::default(), |f, _| f.zoom_in(step));
        assert!(factor.is_max());
    }

    #[test]
    fn step_is_clamped() {
        assert_eq!(ZoomStep::new(0.0).value(), zoom_bounds::MIN_STEP);
        assert_eq!(ZoomStep::new(500.0).value(), zoom_bounds::MAX_STEP);
        assert_abs_diff_eq!(ZoomStep::new(50.0).multiplier(), 1.5, epsilon = SCALE_EPSILON);
    }
}
