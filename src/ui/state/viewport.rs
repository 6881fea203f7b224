// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Tracks the visible area of the detail viewer and its scroll offset.

use crate::domain::fit::{Extent, ImageLayout};
use iced::widget::scrollable::AbsoluteOffset;
use iced::{Rectangle, Size};

/// Sub-pixel size changes are layout noise, not a resize.
const SIZE_CHANGE_EPSILON: f32 = 0.5;

/// Manages viewport and scroll state
#[derive(Debug, Clone)]
pub struct ViewportState {
    /// Current scroll offset
    pub offset: AbsoluteOffset,

    /// Current viewport size, once the layout has been measured
    pub size: Option<Size>,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            offset: AbsoluteOffset { x: 0.0, y: 0.0 },
            size: None,
        }
    }
}

impl ViewportState {
    /// Resets the scroll offset to the top-left corner.
    pub fn reset_offset(&mut self) {
        self.offset = AbsoluteOffset { x: 0.0, y: 0.0 };
    }

    /// Records a measured viewport size.
    /// Returns true if the size changed.
    pub fn resize(&mut self, size: Size) -> bool {
        let changed = match self.size {
            Some(prev) => {
                (prev.width - size.width).abs() > SIZE_CHANGE_EPSILON
                    || (prev.height - size.height).abs() > SIZE_CHANGE_EPSILON
            }
            None => true,
        };
        if changed {
            self.size = Some(size);
        }
        changed
    }

    /// Records a scroll report from the scrollable.
    /// Returns true if the viewport size changed.
    pub fn update(&mut self, bounds: Rectangle, offset: AbsoluteOffset) -> bool {
        self.offset = offset;
        self.resize(bounds.size())
    }

    /// Measured size as a domain extent.
    #[must_use]
    pub fn extent(&self) -> Option<Extent> {
        self.size.map(|size| Extent::new(size.width, size.height))
    }

    /// Keeps the scroll offset inside the overflowing extent.
    pub fn clamp_offset(&mut self, overflow: Extent) {
        self.offset = clamp_offset(self.offset, overflow);
    }

    /// Moves the offset so the image point under the viewport center stays
    /// under it when the image goes from `from` to `to`.
    ///
    /// The result is not clamped; call [`Self::clamp_offset`] afterwards.
    pub fn keep_center(&mut self, from: &ImageLayout, to: &ImageLayout, viewport: Extent) {
        if from.size.is_empty() {
            return;
        }
        let half_w = viewport.width / 2.0;
        let half_h = viewport.height / 2.0;
        let fx = (self.offset.x + half_w - from.offset_x) / from.size.width;
        let fy = (self.offset.y + half_h - from.offset_y) / from.size.height;
        self.offset = AbsoluteOffset {
            x: fx * to.size.width + to.offset_x - half_w,
            y: fy * to.size.height + to.offset_y - half_h,
        };
    }
}

/// Clamps `offset` to `[0, overflow]` on both axes.
#[must_use]
pub fn clamp_offset(offset: AbsoluteOffset, overflow: Extent) -> AbsoluteOffset {
    AbsoluteOffset {
        x: offset.x.clamp(0.0, overflow.width.max(0.0)),
        y: offset.y.clamp(0.0, overflow.height.max(0.0)),
    }
}
