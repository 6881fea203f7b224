// SPDX-License-Identifier: MPL-2.0
//! Fit-to-viewport and centering geometry.
//!
//! All functions here are pure: the same image and viewport sizes always
//! produce the same scale and offsets.

use crate::domain::zoom::zoom_bounds;

/// Width and height in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Extent {
    pub width: f32,
    pub height: f32,
}

impl Extent {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or not a number.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[must_use]
    pub fn scaled(&self, scale: f32) -> Self {
        Self::new(self.width * scale, self.height * scale)
    }
}

/// Why a fit could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitError {
    /// The image has a zero dimension.
    DegenerateImage,
    /// The viewport has not been laid out yet, or collapsed to nothing.
    EmptyViewport,
}

/// Scale bounds for showing an image inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportFit {
    /// Largest scale at which the whole image is visible.
    pub scale: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    image: Extent,
    viewport: Extent,
}

impl ViewportFit {
    /// Computes the fit of `image` into `viewport`.
    ///
    /// `scale = min(vw / iw, vh / ih)`, the minimum scale is the fit itself
    /// and the maximum is ten times the fit.
    pub fn compute(image: Extent, viewport: Extent) -> Result<Self, FitError> {
        if image.is_empty() {
            return Err(FitError::DegenerateImage);
        }
        if viewport.is_empty() {
            return Err(FitError::EmptyViewport);
        }

        let scale = (viewport.width / image.width).min(viewport.height / image.height);
        Ok(Self {
            scale,
            min_scale: scale * zoom_bounds::MIN_FACTOR,
            max_scale: scale * zoom_bounds::MAX_FACTOR,
            image,
            viewport,
        })
    }

    #[must_use]
    pub fn image(&self) -> Extent {
        self.image
    }

    #[must_use]
    pub fn viewport(&self) -> Extent {
        self.viewport
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f32) -> f32 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// Displayed rectangle of the image at `scale`, clamped to the bounds.
    #[must_use]
    pub fn layout(&self, scale: f32) -> ImageLayout {
        let scale = self.clamp_scale(scale);
        let size = self.image.scaled(scale);
        ImageLayout {
            scale,
            size,
            offset_x: center_offset(size.width, self.viewport.width),
            offset_y: center_offset(size.height, self.viewport.height),
        }
    }
}

/// Where and how large the image is drawn inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageLayout {
    pub scale: f32,
    pub size: Extent,
    /// Inset from the left edge; zero when the image overflows horizontally.
    pub offset_x: f32,
    /// Inset from the top edge; zero when the image overflows vertically.
    pub offset_y: f32,
}

impl ImageLayout {
    /// Scrollable overflow along each axis at this layout.
    #[must_use]
    pub fn overflow(&self, viewport: Extent) -> Extent {
        Extent::new(
            (self.size.width - viewport.width).max(0.0),
            (self.size.height - viewport.height).max(0.0),
        )
    }
}

/// Inset that centers `scaled` inside `viewport` along one axis.
#[must_use]
pub fn center_offset(scaled: f32, viewport: f32) -> f32 {
    if scaled < viewport {
        (viewport - scaled) / 2.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, PIXEL_EPSILON, SCALE_EPSILON};

    #[test]
    fn wide_image_in_square_viewport_is_letterboxed() {
        let fit = ViewportFit::compute(Extent::new(1000.0, 500.0), Extent::new(300.0, 300.0))
            .expect("fit should succeed");
        assert_abs_diff_eq!(fit.scale, 0.3, epsilon = SCALE_EPSILON);
        assert_abs_diff_eq!(fit.min_scale, 0.3, epsilon = SCALE_EPSILON);
        assert_abs_diff_eq!(fit.max_scale, 3.0, epsilon = SCALE_EPSILON);

        let layout = fit.layout(fit.scale);
        assert_abs_diff_eq!(layout.size.width, 300.0, epsilon = PIXEL_EPSILON);
        assert_abs_diff_eq!(layout.size.height, 150.0, epsilon = PIXEL_EPSILON);
        assert_abs_diff_eq!(layout.offset_x, 0.0, epsilon = PIXEL_EPSILON);
        assert_abs_diff_eq!(layout.offset_y, 75.0, epsilon = PIXEL_EPSILON);
    }

    #[test]
    fn tall_image_is_pillarboxed() {
        let fit = ViewportFit::compute(Extent::new(200.0, 800.0), Extent::new(400.0, 400.0))
            .expect("fit should succeed");
        assert_abs_diff_eq!(fit.scale, 0.5, epsilon = SCALE_EPSILON);

        let layout = fit.layout(fit.scale);
        assert_abs_diff_eq!(layout.offset_x, 150.0, epsilon = PIXEL_EPSILON);
        assert_abs_diff_eq!(layout.offset_y, 0.0, epsilon = PIXEL_EPSILON);
    }

    #[test]
    fn small_image_is_scaled_up_to_fit() {
        let fit = ViewportFit::compute(Extent::new(10.0, 10.0), Extent::new(100.0, 50.0))
            .expect("fit should succeed");
        assert_abs_diff_eq!(fit.scale, 5.0, epsilon = SCALE_EPSILON);
    }

    #[test]
    fn zero_dimension_image_is_degenerate() {
        assert_eq!(
            ViewportFit::compute(Extent::new(0.0, 10.0), Extent::new(100.0, 100.0)),
            Err(FitError::DegenerateImage)
        );
        assert_eq!(
            ViewportFit::compute(Extent::new(10.0, 0.0), Extent::new(100.0, 100.0)),
            Err(FitError::DegenerateImage)
        );
    }

    #[test]
    fn empty_viewport_is_reported_separately() {
        assert_eq!(
            ViewportFit::compute(Extent::new(10.0, 10.0), Extent::new(0.0, 100.0)),
            Err(FitError::EmptyViewport)
        );
    }

    #[test]
    fn layout_clamps_scale_to_bounds() {
        let fit = ViewportFit::compute(Extent::new(100.0, 100.0), Extent::new(100.0, 100.0))
            .expect("fit should succeed");
        assert_abs_diff_eq!(fit.layout(0.01).scale, fit.min_scale, epsilon = SCALE_EPSILON);
        assert_abs_diff_eq!(fit.layout(1000.0).scale, fit.max_scale, epsilon = SCALE_EPSILON);
    }

    #[test]
    fn zoomed_layout_overflows_and_stops_centering() {
        let fit = ViewportFit::compute(Extent::new(1000.0, 500.0), Extent::new(300.0, 300.0))
            .expect("fit should succeed");
        let layout = fit.layout(fit.scale * 4.0);

        assert_abs_diff_eq!(layout.size.width, 1200.0, epsilon = 1e-2);
        assert_abs_diff_eq!(layout.size.height, 600.0, epsilon = 1e-2);
        assert_abs_diff_eq!(layout.offset_x, 0.0, epsilon = SCALE_EPSILON);
        assert_abs_diff_eq!(layout.offset_y, 0.0, epsilon = SCALE_EPSILON);

        let overflow = layout.overflow(fit.viewport());
        assert_abs_diff_eq!(overflow.width, 900.0, epsilon = 1e-2);
        assert_abs_diff_eq!(overflow.height, 300.0, epsilon = 1e-2);
    }

    #[test]
    fn center_offset_is_deterministic() {
        assert_eq!(center_offset(150.0, 300.0), center_offset(150.0, 300.0));
        assert_abs_diff_eq!(center_offset(150.0, 300.0), 75.0, epsilon = SCALE_EPSILON);
        assert_abs_diff_eq!(center_offset(300.0, 300.0), 0.0, epsilon = SCALE_EPSILON);
        assert_abs_diff_eq!(center_offset(400.0, 300.0), 0.0, epsilon = SCALE_EPSILON);
    }

    #[test]
    fn fit_scale_is_the_smaller_ratio() {
        let cases = [
            (Extent::new(640.0, 480.0), Extent::new(1920.0, 1080.0)),
            (Extent::new(3000.0, 100.0), Extent::new(800.0, 600.0)),
            (Extent::new(33.0, 77.0), Extent::new(51.0, 19.0)),
        ];
        for (image, viewport) in cases {
            let fit = ViewportFit::compute(image, viewport).expect("fit should succeed");
            let expected = (viewport.width / image.width).min(viewport.height / image.height);
            assert_abs_diff_eq!(fit.scale, expected, epsilon = SCALE_EPSILON);
            assert_abs_diff_eq!(fit.max_scale, expected * 10.0, epsilon = SCALE_EPSILON);
        }
    }
}
