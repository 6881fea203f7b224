// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`row`]: The list model ([`Row`](row::Row), [`RowList`](row::RowList))
//! - [`progress`]: Download progress reports ([`DownloadProgress`](progress::DownloadProgress))
//! - [`fit`]: Fit-to-viewport and centering geometry ([`ViewportFit`](fit::ViewportFit),
//!   [`ImageLayout`](fit::ImageLayout))
//! - [`zoom`]: Zoom value objects ([`ZoomFactor`](zoom::ZoomFactor), [`ZoomStep`](zoom::ZoomStep))

pub mod fit;
pub mod progress;
pub mod row;
pub mod zoom;
