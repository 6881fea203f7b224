// SPDX-License-Identifier: MPL-2.0
//! Shared tolerances for the geometry tests.
//!
//! Fit and zoom math runs in `f32`, so scales and pixel positions are
//! compared with `approx` against the tolerances below instead of `==`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for scale factors and zoom multipliers.
pub const SCALE_EPSILON: f32 = 1e-4;

/// Tolerance for sizes and offsets in logical pixels.
pub const PIXEL_EPSILON: f32 = 1e-3;
