// SPDX-License-Identifier: MPL-2.0
//! Remote image handling: streaming downloads and in-memory decoding.

pub mod download;
pub mod image;

pub use download::{build_client, fetch, fetch_image, parse_url, DownloadEvent};
pub use image::{decode, DecodeTarget, ImageData};
