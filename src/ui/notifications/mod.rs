// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for non-blocking user feedback.
//!
//! Toasts inform the user about things that do not need an answer, such as a
//! settings file that could not be read or a slot count that was clamped. Blocking messages use the
//! [`notice`](crate::ui::notice) modal instead.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Design Considerations
//!
//! - Toast duration: ~3s for info, ~5s for warnings
//! - Max visible toasts: 3 (others are queued)
//! - Position: bottom-right corner

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
