// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning through images.

use crate::domain::fit::Extent;
use crate::ui::state::viewport::clamp_offset;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Point;

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default)]
pub struct DragState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Position where the drag started
    pub start_position: Option<Point>,

    /// Viewport offset when the drag started
    pub start_offset: Option<AbsoluteOffset>,
}

impl DragState {
    /// Starts a drag operation
    pub fn start(&mut self, position: Point, offset: AbsoluteOffset) {
        self.is_dragging = true;
        self.start_position = Some(position);
        self.start_offset = Some(offset);
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.is_dragging = false;
        self.start_position = None;
        self.start_offset = None;
    }

    /// Offset for the cursor at `current_position`, clamped to `overflow`.
    ///
    /// Moving the cursor right scrolls the content left.
    #[must_use]
    pub fn calculate_offset(
        &self,
        current_position: Point,
        overflow: Extent,
    ) -> Option<AbsoluteOffset> {
        if !self.is_dragging {
            return None;
        }

        let start_pos = self.start_position?;
        let start_offset = self.start_offset?;

        let offset = AbsoluteOffset {
            x: start_offset.x - (current_position.x - start_pos.x),
            y: start_offset.y - (current_position.y - start_pos.y),
        };
        Some(clamp_offset(offset, overflow))
    }
}
