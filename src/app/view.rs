// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the gallery page, the toast overlay and, when a
//! file was rejected, the blocking notice.

use super::config::ProfileConfig;
use super::Message;
use crate::error::IntakeError;
use crate::gallery::{GalleryState, SlotId};
use crate::i18n::fluent::I18n;
use crate::ui::gallery_view;
use crate::ui::images::ImageResolver;
use crate::ui::notice;
use crate::ui::notifications::{self, Toast};
use crate::ui::slot::SlotPhase;
use iced::widget::{Container, Stack};
use iced::{Element, Length};
use std::collections::HashMap;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a GalleryState,
    pub resolver: &'a ImageResolver,
    pub phases: &'a HashMap<SlotId, SlotPhase>,
    pub hovered: Option<SlotId>,
    pub focused: Option<SlotId>,
    pub notice: Option<&'a IntakeError>,
    pub notifications: &'a notifications::Manager,
    pub grid_columns: u32,
    pub subtitle: Option<&'a str>,
    pub profile: &'a ProfileConfig,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let page = gallery_view::view(gallery_view::ViewContext {
        i18n: ctx.i18n,
        state: ctx.gallery,
        resolver: ctx.resolver,
        phases: ctx.phases,
        hovered: ctx.hovered,
        focused: ctx.focused,
        grid_columns: ctx.grid_columns,
        subtitle: ctx.subtitle,
        profile: ctx.profile,
    })
    .map(Message::Gallery);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(Container::new(page).width(Length::Fill).height(Length::Fill));

    if ctx.notifications.has_notifications() {
        layers = layers.push(
            Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
        );
    }

    if let Some(error) = ctx.notice {
        layers = layers.push(notice::view(error, ctx.i18n).map(Message::Notice));
    }

    layers.into()
}
