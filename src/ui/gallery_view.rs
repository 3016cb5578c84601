// SPDX-License-Identifier: MPL-2.0
//! The gallery page: header, layout toggle, slot area and biography.

use crate::app::config::ProfileConfig;
use crate::gallery::{GalleryState, LayoutMode, SlotId};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::images::ImageResolver;
use crate::ui::layout::LayoutStyle;
use crate::ui::slot::{self, SlotPhase};
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Background, Element, Length, Theme};
use std::collections::HashMap;

/// Contextual data needed to render the gallery page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a GalleryState,
    pub resolver: &'a ImageResolver,
    pub phases: &'a HashMap<SlotId, SlotPhase>,
    pub hovered: Option<SlotId>,
    pub focused: Option<SlotId>,
    pub grid_columns: u32,
    /// Configured subtitle; the localized default is used when absent.
    pub subtitle: Option<&'a str>,
    pub profile: &'a ProfileConfig,
}

/// Messages emitted by the gallery page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Slot(SlotId, slot::Message),
    SetLayout(LayoutMode),
}

/// Render the gallery page.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let style = LayoutStyle::for_mode(ctx.state.layout(), ctx.grid_columns);

    let page = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(build_header(&ctx))
        .push(build_layout_toggle(&ctx))
        .push(build_slot_area(&ctx, style))
        .push(build_biography(&ctx));

    scrollable(Container::new(page).width(Length::Fill).center_x(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let subtitle = subtitle_text(ctx);

    Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("header-title")).size(typography::TITLE_LG))
        .push(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(palette::GRAY_400),
                }),
        )
        .into()
}

/// Configured subtitle, or the localized default naming the slot count.
fn subtitle_text(ctx: &ViewContext<'_>) -> String {
    ctx.subtitle.map_or_else(
        || {
            let count = ctx.state.len().to_string();
            ctx.i18n
                .tr_with_args("header-subtitle-default", &[("count", count.as_str())])
        },
        str::to_owned,
    )
}

/// Two mutually exclusive buttons; the active one cannot be pressed.
fn build_layout_toggle<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.state.layout();

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(ctx.i18n.tr("layout-toggle-label")).size(typography::BODY));

    for mode in LayoutMode::ALL {
        let selected = mode == current;
        let label = Text::new(ctx.i18n.tr(mode.i18n_key()))
            .size(typography::BODY)
            .center()
            .width(Length::Fill);

        let mut toggle = button(label)
            .width(Length::Fixed(sizing::TOGGLE_BUTTON_WIDTH))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .style(move |theme: &Theme, status| toggle_button_style(theme, status, selected));

        if !selected {
            toggle = toggle.on_press(Message::SetLayout(mode));
        }
        row = row.push(toggle);
    }

    row.into()
}

fn build_slot_area<'a>(ctx: &ViewContext<'a>, style: LayoutStyle) -> Element<'a, Message> {
    let columns = style.columns.max(1) as usize;
    let mut rows = Column::new().spacing(style.spacing).width(Length::Fill);

    for chunk in ctx.state.slots().chunks(columns) {
        let mut row = Row::new().spacing(style.spacing).width(Length::Fill);

        for image_slot in chunk {
            let id = image_slot.id();
            let reference = image_slot.image().reference();
            let cell = slot::view(slot::ViewContext {
                i18n: ctx.i18n,
                slot: image_slot,
                handle: reference.and_then(|r| ctx.resolver.handle(r)),
                loading: reference.is_some_and(|r| ctx.resolver.is_pending(r)),
                hovered: ctx.hovered == Some(id),
                focused: ctx.focused == Some(id),
                phase: ctx.phases.get(&id).copied().unwrap_or_default(),
                cell_height: style.cell_height,
            })
            .map(move |message| Message::Slot(id, message));

            row = row.push(Container::new(cell).width(Length::FillPortion(1)));
        }

        // Keep cells of an incomplete last row the same width as the others.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }

        rows = rows.push(row);
    }

    Container::new(rows)
        .width(Length::Fill)
        .max_width(style.max_width)
        .into()
}

fn build_biography<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let name = ctx
        .profile
        .name
        .clone()
        .unwrap_or_else(|| ctx.i18n.tr("bio-default-name"));
    let body = ctx
        .profile
        .biography
        .clone()
        .unwrap_or_else(|| ctx.i18n.tr("bio-default-body"));

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(ctx.i18n.tr("bio-title")).size(typography::TITLE_MD))
        .push(Text::new(name).size(typography::TITLE_SM))
        .push(Text::new(body).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .max_width(sizing::BIO_MAX_WIDTH)
        .padding(spacing::LG)
        .style(|theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(
                theme.extended_palette().background.weak.color,
            )),
            border: iced::Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn toggle_button_style(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
    let ext = theme.extended_palette();

    let (background, text_color) = if selected {
        (ext.primary.base.color, ext.primary.base.text)
    } else {
        match status {
            button::Status::Hovered | button::Status::Pressed => {
                (ext.background.strong.color, ext.background.strong.text)
            }
            button::Status::Active | button::Status::Disabled => {
                (ext.background.weak.color, ext.background.weak.text)
            }
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: iced::Border {
            color: ext.primary.base.color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: iced::Shadow::default(),
        snap: true,
    }
}
