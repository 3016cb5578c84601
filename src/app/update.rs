// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] borrowing the parts of `App` they may
//! touch, apply state changes and return the follow-up task, if any.

use super::{FocusCommand, Message};
use crate::error::IntakeError;
use crate::gallery::{GalleryState, LocalRefRegistry, SlotId, SlotImage};
use crate::i18n::fluent::I18n;
use crate::media::{self, remote};
use crate::ui::gallery_view;
use crate::ui::images::ImageResolver;
use crate::ui::notice;
use crate::ui::notifications;
use crate::ui::slot::{self, SlotPhase};
use iced::Task;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a mut GalleryState,
    pub registry: &'a mut LocalRefRegistry,
    pub resolver: &'a mut ImageResolver,
    pub phases: &'a mut HashMap<SlotId, SlotPhase>,
    pub hovered: &'a mut Option<SlotId>,
    /// Slot selected with the keyboard.
    pub focused: &'a mut Option<SlotId>,
    pub notice: &'a mut Option<IntakeError>,
    pub notifications: &'a mut notifications::Manager,
}

impl UpdateContext<'_> {
    fn picker_open(&self) -> bool {
        self.phases
            .values()
            .any(|phase| *phase == SlotPhase::AwaitingFileSelection)
    }
}

pub fn handle_gallery_message(
    ctx: &mut UpdateContext<'_>,
    message: gallery_view::Message,
) -> Task<Message> {
    match message {
        gallery_view::Message::SetLayout(mode) => {
            ctx.gallery.set_layout(mode);
            tracing::debug!(?mode, "layout changed");
            Task::none()
        }
        gallery_view::Message::Slot(id, message) => handle_slot_message(ctx, id, message),
    }
}

fn handle_slot_message(
    ctx: &mut UpdateContext<'_>,
    id: SlotId,
    message: slot::Message,
) -> Task<Message> {
    if ctx.gallery.slot(id).is_none() {
        return Task::none();
    }

    let can_activate = ctx.notice.is_none() && !ctx.picker_open();
    let phase = ctx.phases.entry(id).or_default();

    match slot::update(message, phase, can_activate) {
        slot::Event::None => Task::none(),
        slot::Event::OpenPicker => open_file_dialog(ctx.i18n, id),
        slot::Event::Hovered(true) => {
            *ctx.hovered = Some(id);
            Task::none()
        }
        slot::Event::Hovered(false) => {
            // Enter on the next slot may arrive before exit from this one.
            if *ctx.hovered == Some(id) {
                *ctx.hovered = None;
            }
            Task::none()
        }
    }
}

/// Handles the picker result for `id`. `None` means the dialog was cancelled.
pub fn handle_file_chosen(
    ctx: &mut UpdateContext<'_>,
    id: SlotId,
    path: Option<PathBuf>,
) -> Task<Message> {
    if let Some(phase) = ctx.phases.get_mut(&id) {
        slot::finish_selection(phase);
    }

    match path {
        Some(path) => take_file_into_slot(ctx, id, &path),
        None => tracing::debug!(slot = %id, "file selection cancelled"),
    }
    Task::none()
}

/// Handles a file dropped on the window: it goes to the slot under the cursor.
pub fn handle_file_dropped(ctx: &mut UpdateContext<'_>, path: PathBuf) -> Task<Message> {
    if ctx.notice.is_some() {
        tracing::debug!(path = %path.display(), "drop ignored while a notice is shown");
        return Task::none();
    }

    match *ctx.hovered {
        Some(id) => take_file_into_slot(ctx, id, &path),
        None => tracing::debug!(path = %path.display(), "drop outside any slot ignored"),
    }
    Task::none()
}

/// Moves keyboard focus between slots, or activates the focused one.
///
/// While the notice is shown, only `Activate` has an effect: it dismisses it.
pub fn handle_focus(ctx: &mut UpdateContext<'_>, command: FocusCommand) -> Task<Message> {
    if ctx.notice.is_some() {
        if command == FocusCommand::Activate {
            return handle_notice_message(ctx, notice::Message::Dismiss);
        }
        return Task::none();
    }

    match command {
        FocusCommand::Next | FocusCommand::Previous => {
            let ids: Vec<SlotId> = ctx.gallery.slots().iter().map(|s| s.id()).collect();
            *ctx.focused = step_focus(&ids, *ctx.focused, command == FocusCommand::Next);
            Task::none()
        }
        FocusCommand::Activate => match *ctx.focused {
            Some(id) => handle_slot_message(ctx, id, slot::Message::Pressed),
            None => Task::none(),
        },
        FocusCommand::Clear => {
            *ctx.focused = None;
            Task::none()
        }
    }
}

fn step_focus(ids: &[SlotId], current: Option<SlotId>, forward: bool) -> Option<SlotId> {
    let last = ids.len().checked_sub(1)?;
    let index = match current.and_then(|id| ids.iter().position(|&other| other == id)) {
        Some(index) if forward => (index + 1) % ids.len(),
        Some(index) => index.checked_sub(1).unwrap_or(last),
        None if forward => 0,
        None => last,
    };
    ids.get(index).copied()
}

pub fn handle_notice_message(ctx: &mut UpdateContext<'_>, message: notice::Message) -> Task<Message> {
    match message {
        notice::Message::Dismiss => {
            *ctx.notice = None;
        }
    }
    Task::none()
}

/// Validates `path` and, if it is an image, shows it in slot `id`.
///
/// A rejected file raises the blocking notice and leaves the gallery as is.
fn take_file_into_slot(ctx: &mut UpdateContext<'_>, id: SlotId, path: &Path) {
    if ctx.gallery.slot(id).is_none() {
        return;
    }

    match slot::accept_file(path, ctx.registry) {
        Ok(reference) => {
            ctx.resolver.insert_local(reference.clone(), path);
            if let Some(previous) = ctx.gallery.apply_replace(id, reference) {
                release_superseded(ctx, previous);
            }
            tracing::info!(slot = %id, path = %path.display(), "slot image replaced");
        }
        Err(err) => {
            tracing::warn!(slot = %id, path = %path.display(), error = %err, "file rejected");
            *ctx.notice = Some(err);
        }
    }
}

/// Frees the `blob:` reference a slot no longer shows.
fn release_superseded(ctx: &mut UpdateContext<'_>, previous: SlotImage) {
    if let SlotImage::Populated(reference) = previous {
        if reference.is_local() {
            ctx.registry.release(&reference);
            ctx.resolver.forget(&reference);
        }
    }
}

/// Opens the native picker for slot `id`, filtered to image files.
pub fn open_file_dialog(i18n: &I18n, id: SlotId) -> Task<Message> {
    let slot_id = id.to_string();
    let title = i18n.tr_with_args("file-dialog-title", &[("id", slot_id.as_str())]);
    let filter_name = i18n.tr("file-dialog-filter");

    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .add_filter(filter_name, media::extensions::IMAGE_EXTENSIONS)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        move |path| Message::FileChosen { slot: id, path },
    )
}

/// Starts one download per remote reference not yet known to `resolver`.
pub fn fetch_placeholders(resolver: &mut ImageResolver, gallery: &GalleryState) -> Task<Message> {
    let claimed = resolver.claim_remote_fetches(gallery.slots());
    if claimed.is_empty() {
        return Task::none();
    }

    tracing::debug!(count = claimed.len(), "fetching placeholders");
    Task::batch(claimed.into_iter().map(|reference| {
        let url = reference.as_str().to_owned();
        Task::perform(remote::fetch_image_bytes(url), move |result| {
            Message::PlaceholderFetched { reference, result }
        })
    }))
}
