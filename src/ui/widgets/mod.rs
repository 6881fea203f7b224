// SPDX-License-Identifier: MPL-2.0
pub mod zoom_surface;

pub use zoom_surface::{zoom_surface, ZoomSurface};
