// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! - [`error_display`] - Error panel with a title, a message, an acknowledge
//!   button and collapsible technical details

pub mod error_display;
