// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the interaction state of the detail screen, kept
//! apart from the download state machine that owns it.

pub mod drag;
pub mod viewport;
pub mod zoom;

pub use drag::DragState;
pub use viewport::ViewportState;
pub use zoom::ZoomState;
