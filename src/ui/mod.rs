// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Screens follow the Elm-style "state down, messages up" pattern: each one
//! owns a `State`, handles its own `Message` and reports an `Effect` that the
//! application turns into navigation or notifications.
//!
//! # Screens
//!
//! - [`list`] - Rows with thumbnails
//! - [`detail`] - Download progress, fitted image with zoom and pan
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Interaction state (zoom, viewport, drag)
//! - [`components`] - Reusable UI components (error panel)
//! - [`widgets`] - Custom Iced widgets (zoom surface)
//! - [`styles`] - Centralized button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode
//! - [`notifications`] - Toast notification system for user feedback

pub mod components;
pub mod design_tokens;
pub mod detail;
pub mod list;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
