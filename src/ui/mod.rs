// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! renders from borrowed state and emits its own `Message`, which the
//! application root maps and handles.
//!
//! # Components
//!
//! - [`gallery_view`] - The page: header, layout toggle, slots, biography
//! - [`slot`] - One image slot, its phases and file intake
//! - [`notice`] - Blocking modal for rejected files
//! - [`notifications`] - Toast notification system for non-blocking feedback
//!
//! # Shared Infrastructure
//!
//! - [`layout`] - Grid and feed metrics
//! - [`images`] - Reference to image handle resolution
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery_view;
pub mod images;
pub mod layout;
pub mod notice;
pub mod notifications;
pub mod slot;
pub mod theming;
