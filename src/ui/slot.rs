// SPDX-License-Identifier: MPL-2.0
//! Presentation of a single image slot.
//!
//! A slot shows its image (or a neutral placeholder) and reacts to clicks by
//! asking the application to open a file picker. The picked file is checked
//! here before any reference is derived; the gallery state is only touched by
//! the application root.
//!
//! Per-slot phases: `Idle -> AwaitingFileSelection -> Idle`.

use crate::error::IntakeError;
use crate::gallery::{DisplayRef, ImageSlot, LocalRefRegistry, SlotImage};
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::design_tokens::{border, opacity, palette, radius, spacing, typography};
use iced::widget::image::Handle;
use iced::widget::{container, image, mouse_area, Column, Container, Stack, Text};
use iced::{alignment, mouse, Background, Color, ContentFit, Element, Length, Theme};
use std::path::Path;

/// Presentation phase of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotPhase {
    #[default]
    Idle,
    /// The native picker is open for this slot.
    AwaitingFileSelection,
}

/// Contextual data needed to render a slot.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub slot: &'a ImageSlot,
    /// Drawable image, when the slot's reference could be resolved.
    pub handle: Option<&'a Handle>,
    /// Whether a remote download for this slot is still running.
    pub loading: bool,
    pub hovered: bool,
    /// Selected with the keyboard; shown like a hover.
    pub focused: bool,
    pub phase: SlotPhase,
    pub cell_height: f32,
}

/// Messages emitted by a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Pressed,
    CursorEntered,
    CursorLeft,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Open the file picker for this slot.
    OpenPicker,
    /// The cursor entered (`true`) or left (`false`) the slot.
    Hovered(bool),
}

/// Process a slot message.
///
/// A press only opens the picker when the slot is idle and `can_activate`
/// holds; the caller withholds it while another picker or a notice is open.
pub fn update(message: Message, phase: &mut SlotPhase, can_activate: bool) -> Event {
    match message {
        Message::Pressed => {
            if *phase == SlotPhase::Idle && can_activate {
                *phase = SlotPhase::AwaitingFileSelection;
                Event::OpenPicker
            } else {
                Event::None
            }
        }
        Message::CursorEntered => Event::Hovered(true),
        Message::CursorLeft => Event::Hovered(false),
    }
}

/// Ends a pick, whatever its outcome. Nothing about the chosen file is kept,
/// so picking the same file again is handled as a new selection.
pub fn finish_selection(phase: &mut SlotPhase) {
    *phase = SlotPhase::Idle;
}

/// Checks a picked file and derives the reference the slot should show.
///
/// # Errors
///
/// Returns [`IntakeError::NotAnImage`] when the file's declared type is not
/// an image. No reference is derived in that case.
pub fn accept_file(path: &Path, registry: &mut LocalRefRegistry) -> Result<DisplayRef, IntakeError> {
    let mime = media::validate_image_file(path)?;
    let reference = registry.derive(path);
    tracing::debug!(path = %path.display(), mime, reference = %reference, "accepted file");
    Ok(reference)
}

/// Render a slot.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let surface: Element<'a, Message> = match (ctx.slot.image(), ctx.handle) {
        (SlotImage::Populated(_), Some(handle)) => build_image(&ctx, handle),
        (SlotImage::Populated(_) | SlotImage::Placeholder, _) => build_placeholder(&ctx),
    };

    let highlighted = ctx.hovered || ctx.focused;

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(ctx.cell_height))
        .push(surface);

    if let Some(key) = caption_key(ctx.phase, highlighted, ctx.handle.is_some()) {
        stack = stack.push(caption_overlay(ctx.i18n.tr(key)));
    }

    let framed = Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.cell_height))
        .clip(true)
        .style(move |theme: &Theme| frame_style(theme, highlighted));

    mouse_area(framed)
        .on_press(Message::Pressed)
        .on_enter(Message::CursorEntered)
        .on_exit(Message::CursorLeft)
        .interaction(mouse::Interaction::Pointer)
        .into()
}

/// Caption drawn over the slot. Hover and keyboard focus both invite a
/// replacement once an image is shown.
fn caption_key(phase: SlotPhase, highlighted: bool, has_image: bool) -> Option<&'static str> {
    match phase {
        SlotPhase::AwaitingFileSelection => Some("slot-awaiting"),
        SlotPhase::Idle if highlighted && has_image => Some("slot-replace-invitation"),
        SlotPhase::Idle => None,
    }
}

fn build_image<'a>(ctx: &ViewContext<'a>, handle: &Handle) -> Element<'a, Message> {
    image(handle.clone())
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.cell_height))
        .into()
}

/// Neutral surface with the slot id and an upload invitation.
fn build_placeholder<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let id = ctx.slot.id().to_string();
    let label = Text::new(ctx.i18n.tr_with_args("slot-label", &[("id", id.as_str())]))
        .size(typography::TITLE_SM);

    let hint_key = if ctx.loading {
        "slot-loading"
    } else {
        "slot-upload-invitation"
    };
    let hint = Text::new(ctx.i18n.tr(hint_key))
        .size(typography::CAPTION)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::GRAY_400),
        });

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(label)
        .push(hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|theme: &Theme| container::Style {
            background: Some(Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            ..Default::default()
        })
        .into()
}

/// Text band drawn over the bottom of the slot.
fn caption_overlay<'a>(label: String) -> Element<'a, Message> {
    let band = Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            })),
            text_color: Some(palette::WHITE),
            ..Default::default()
        });

    Container::new(band)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn frame_style(theme: &Theme, highlighted: bool) -> container::Style {
    let (color, width) = if highlighted {
        (palette::PRIMARY_500, border::WIDTH_MD)
    } else {
        (theme.extended_palette().background.strong.color, border::WIDTH_SM)
    };

    container::Style {
        border: iced::Border {
            color,
            width,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn highlighted_slot_with_image_invites_replacement() {
        assert_eq!(
            caption_key(SlotPhase::Idle, true, true),
            Some("slot-replace-invitation")
        );
        assert_eq!(caption_key(SlotPhase::Idle, false, true), None);
        assert_eq!(caption_key(SlotPhase::Idle, true, false), None);
        assert_eq!(
            caption_key(SlotPhase::AwaitingFileSelection, false, true),
            Some("slot-awaiting")
        );
    }

    #[test]
    fn press_on_idle_slot_opens_picker() {
        let mut phase = SlotPhase::Idle;
        assert_eq!(update(Message::Pressed, &mut phase, true), Event::OpenPicker);
        assert_eq!(phase, SlotPhase::AwaitingFileSelection);
    }

    #[test]
    fn press_while_awaiting_is_ignored() {
        let mut phase = SlotPhase::AwaitingFileSelection;
        assert_eq!(update(Message::Pressed, &mut phase, true), Event::None);
        assert_eq!(phase, SlotPhase::AwaitingFileSelection);
    }

    #[test]
    fn press_is_ignored_when_activation_is_blocked() {
        let mut phase = SlotPhase::Idle;
        assert_eq!(update(Message::Pressed, &mut phase, false), Event::None);
        assert_eq!(phase, SlotPhase::Idle);
    }

    #[test]
    fn hover_messages_do_not_change_phase() {
        let mut phase = SlotPhase::Idle;
        assert_eq!(
            update(Message::CursorEntered, &mut phase, true),
            Event::Hovered(true)
        );
        assert_eq!(
            update(Message::CursorLeft, &mut phase, true),
            Event::Hovered(false)
        );
        assert_eq!(phase, SlotPhase::Idle);
    }

    #[test]
    fn finish_selection_returns_to_idle() {
        let mut phase = SlotPhase::AwaitingFileSelection;
        finish_selection(&mut phase);
        assert_eq!(phase, SlotPhase::Idle);
    }

    #[test]
    fn accept_file_derives_local_reference_for_images() {
        let mut registry = LocalRefRegistry::new();
        let path = PathBuf::from("/photos/cat.png");

        let reference = accept_file(&path, &mut registry).expect("png is an image");
        assert!(reference.is_local());
        assert_eq!(registry.resolve(&reference), Some(path.as_path()));
    }

    #[test]
    fn accept_file_rejects_non_images_without_registering() {
        let mut registry = LocalRefRegistry::new();
        let err = accept_file(Path::new("/docs/report.pdf"), &mut registry).unwrap_err();

        assert_eq!(
            err,
            IntakeError::NotAnImage {
                mime: "application/pdf".into()
            }
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn same_file_twice_yields_distinct_references() {
        let mut registry = LocalRefRegistry::new();
        let path = Path::new("/photos/cat.png");

        let first = accept_file(path, &mut registry).unwrap();
        let second = accept_file(path, &mut registry).unwrap();
        assert_ne!(first, second);
    }
}
