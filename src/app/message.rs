// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::gallery::{DisplayRef, SlotId};
use crate::ui::gallery_view;
use crate::ui::notice;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery_view::Message),
    Notice(notice::Message),
    Notification(notifications::NotificationMessage),
    /// Result from the file picker opened for `slot`. `None` means cancelled.
    FileChosen {
        slot: SlotId,
        path: Option<PathBuf>,
    },
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// A remote placeholder download finished.
    PlaceholderFetched {
        reference: DisplayRef,
        result: Result<Vec<u8>, Error>,
    },
    /// Keyboard navigation between slots.
    Focus(FocusCommand),
    /// Periodic tick for toast auto-dismiss.
    Tick(Instant),
}

/// Keyboard commands acting on the focused slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusCommand {
    /// Tab: focus the following slot, wrapping to the first.
    Next,
    /// Shift+Tab: focus the preceding slot, wrapping to the last.
    Previous,
    /// Enter or Space: activate the focused slot, or dismiss the notice.
    Activate,
    /// Escape.
    Clear,
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional slot count, taking precedence over `settings.toml`.
    pub slots: Option<u32>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_GALLERY_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional log filter directive, e.g. `debug` or `iced_gallery=trace`.
    pub log: Option<String>,
}
