// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a single-window photo gallery built with the Iced GUI
//! framework.
//!
//! The window shows a fixed set of image slots seeded with remote
//! placeholders. Clicking a slot (or dropping a file onto it) replaces its
//! picture with a local image file for the rest of the session. A toggle
//! switches between a multi-column grid and a single-column feed.
//!
//! # Modules
//!
//! - [`gallery`] - Slot list and layout mode, with pure update functions
//! - [`media`] - Declared file types and remote placeholder downloads
//! - [`ui`] - Iced components: page, slots, notice, toasts
//! - [`app`] - Application root, configuration and paths
//! - [`i18n`] - Fluent localization
//! - [`logging`] - Tracing subscriber setup
//! - [`error`] - Crate error types

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod error;
pub mod gallery;
pub mod i18n;
pub mod logging;
pub mod media;
pub mod ui;
