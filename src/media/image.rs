// SPDX-License-Identifier: MPL-2.0
//! Decoding of downloaded bytes (PNG, JPEG, GIF, WebP, etc.) into displayable images.

use crate::domain::fit::Extent;
use crate::error::{DecodeError, Result};
use iced::widget::image;
use image_rs::{imageops::FilterType, GenericImageView};

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Intrinsic size in pixels, as used by the fit computation.
    #[must_use]
    pub fn extent(&self) -> Extent {
        Extent::new(self.width as f32, self.height as f32)
    }
}

/// How the decoded image will be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeTarget {
    /// Keep every pixel, for the zoomable detail view.
    Full,
    /// Downscale so the longest edge is at most this many pixels.
    Thumbnail(u32),
}

/// Decodes `bytes` into RGBA pixels.
///
/// Fails with [`DecodeError::NotAnImage`] when no decoder accepts the bytes
/// and with [`DecodeError::EmptyImage`] when the result has no pixels.
pub fn decode(bytes: &[u8], target: DecodeTarget) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)
        .map_err(|e| DecodeError::NotAnImage(e.to_string()))?;

    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height }.into());
    }

    let img = match target {
        DecodeTarget::Thumbnail(max_edge) if width > max_edge || height > max_edge => {
            img.resize(max_edge, max_edge, FilterType::Triangle)
        }
        _ => img,
    };

    let (width, height) = img.dimensions();
    let pixels = img.to_rgba8().into_vec();
    Ok(ImageData::from_rgba(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("failed to encode png");
        bytes
    }

    #[test]
    fn decode_png_returns_expected_dimensions() {
        let data = decode(&png_bytes(4, 2), DecodeTarget::Full).expect("png should decode");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.extent(), Extent::new(4.0, 2.0));
    }

    #[test]
    fn decode_text_is_not_an_image() {
        match decode(b"<html>404</html>", DecodeTarget::Full) {
            Err(Error::Decode(DecodeError::NotAnImage(message))) => assert!(!message.is_empty()),
            other => panic!("expected NotAnImage, got {other:?}"),
        }
    }

    #[test]
    fn decode_empty_payload_is_not_an_image() {
        assert!(matches!(
            decode(&[], DecodeTarget::Full),
            Err(Error::Decode(DecodeError::NotAnImage(_)))
        ));
    }

    #[test]
    fn thumbnail_target_bounds_longest_edge() {
        let data = decode(&png_bytes(400, 100), DecodeTarget::Thumbnail(64))
            .expect("png should decode");
        assert_eq!(data.width, 64);
        assert_eq!(data.height, 16);
    }

    #[test]
    fn thumbnail_target_keeps_small_images() {
        let data = decode(&png_bytes(20, 10), DecodeTarget::Thumbnail(64))
            .expect("png should decode");
        assert_eq!((data.width, data.height), (20, 10));
    }
}
