// SPDX-License-Identifier: MPL-2.0
//! Detail screen: downloads one image and shows it fitted to the window,
//! with zoom and grab-to-pan.

pub mod component;
pub mod pane;

pub use component::{Effect, FetchId, LoadState, Message, State, ViewEnv};
