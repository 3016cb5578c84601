// SPDX-License-Identifier: MPL-2.0
//! Blocking notice shown when a picked file cannot go into a slot.
//!
//! The notice covers the window with a scrim that swallows every pointer
//! event, so the gallery underneath cannot be clicked until it is dismissed.

use crate::error::IntakeError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, opaque, Column, Container, Row, Text};
use iced::{alignment, Background, Color, Element, Length, Theme};

/// Messages emitted by the notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Dismiss,
}

/// Render the notice for `error` as a full-window overlay.
pub fn view<'a>(error: &IntakeError, i18n: &'a I18n) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("notice-title")).size(typography::TITLE_MD);
    let body = Text::new(i18n.tr(error.i18n_key())).size(typography::BODY_LG);

    let dismiss = button(
        Text::new(i18n.tr("notice-dismiss"))
            .size(typography::BODY)
            .center(),
    )
    .on_press(Message::Dismiss)
    .padding([spacing::XS, spacing::LG])
    .height(Length::Fixed(sizing::BUTTON_HEIGHT));

    let actions = Row::new()
        .width(Length::Fill)
        .push(Container::new(dismiss).width(Length::Fill).align_x(alignment::Horizontal::Right));

    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(title)
            .push(body)
            .push(actions),
    )
    .width(Length::Fixed(sizing::NOTICE_WIDTH))
    .padding(spacing::LG)
    .style(card_style);

    let scrim = Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            })),
            ..Default::default()
        });

    opaque(scrim)
}

fn card_style(theme: &Theme) -> container::Style {
    let ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(ext.background.base.color)),
        border: iced::Border {
            color: ext.danger.base.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        text_color: Some(ext.background.base.text),
        ..Default::default()
    }
}
