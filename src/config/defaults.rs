// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom factor bounds relative to the fitted scale, zoom step bounds
//! - **Network**: HTTP client defaults for image downloads
//! - **Thumbnails**: List screen preview size

// ==========================================================================
// Zoom Defaults
// ==========================================================================

use crate::domain::zoom::zoom_bounds;

/// Minimum zoom factor relative to the fitted scale (the fit itself).
pub const MIN_ZOOM_FACTOR: f32 = zoom_bounds::MIN_FACTOR;

/// Maximum zoom factor relative to the fitted scale.
pub const MAX_ZOOM_FACTOR: f32 = zoom_bounds::MAX_FACTOR;

/// Default zoom step for zoom in/out operations.
pub const DEFAULT_ZOOM_STEP_PERCENT: f32 = zoom_bounds::DEFAULT_STEP;

/// Minimum allowed zoom step percentage.
pub const MIN_ZOOM_STEP_PERCENT: f32 = zoom_bounds::MIN_STEP;

/// Maximum allowed zoom step percentage.
pub const MAX_ZOOM_STEP_PERCENT: f32 = zoom_bounds::MAX_STEP;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// User agent sent with every image request.
pub const DEFAULT_USER_AGENT: &str = concat!("IcedGallery/", env!("CARGO_PKG_VERSION"));

/// Default number of redirects followed before giving up.
pub const DEFAULT_REDIRECT_LIMIT: u32 = 10;

/// Upper bound for the configurable redirect limit.
pub const MAX_REDIRECT_LIMIT: u32 = 32;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Longest edge of a list thumbnail after downscaling, in pixels.
pub const THUMBNAIL_MAX_EDGE: u32 = 128;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Zoom validation
    assert!(MIN_ZOOM_FACTOR > 0.0);
    assert!(MAX_ZOOM_FACTOR > MIN_ZOOM_FACTOR);
    assert!(MIN_ZOOM_STEP_PERCENT > 0.0);
    assert!(MAX_ZOOM_STEP_PERCENT > MIN_ZOOM_STEP_PERCENT);
    assert!(DEFAULT_ZOOM_STEP_PERCENT >= MIN_ZOOM_STEP_PERCENT);
    assert!(DEFAULT_ZOOM_STEP_PERCENT <= MAX_ZOOM_STEP_PERCENT);

    // Network validation
    assert!(DEFAULT_REDIRECT_LIMIT <= MAX_REDIRECT_LIMIT);

    // Thumbnail validation
    assert!(THUMBNAIL_MAX_EDGE > 0);
};
