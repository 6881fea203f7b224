// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a two-screen image browser built with the Iced GUI
//! framework.
//!
//! The list screen shows a fixed set of rows with thumbnails. Opening a
//! zoomable row downloads the full-resolution image with progress reporting,
//! fits it to the window and lets the user zoom and pan.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
