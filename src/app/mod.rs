// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the gallery state and every piece of presentation
//! state around it (slot phases, hover, the blocking notice, toasts) and
//! translates messages into state changes or async tasks such as the file
//! picker and placeholder downloads.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, FocusCommand, Message};

use crate::error::IntakeError;
use crate::gallery::{GalleryState, LocalRefRegistry, SlotId};
use crate::i18n::fluent::I18n;
use crate::ui::images::ImageResolver;
use crate::ui::notifications;
use crate::ui::slot::SlotPhase;
use crate::ui::theming::ThemeMode;
use config::{Config, ProfileConfig};
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: GalleryState,
    /// Paths behind the `blob:` references currently in use.
    registry: LocalRefRegistry,
    resolver: ImageResolver,
    /// Slots not listed here are idle.
    phases: HashMap<SlotId, SlotPhase>,
    hovered: Option<SlotId>,
    focused: Option<SlotId>,
    /// Blocking notice; while set, slots cannot be activated.
    notice: Option<IntakeError>,
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    grid_columns: u32,
    subtitle: Option<String>,
    profile: ProfileConfig,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("slots", &self.gallery.len())
            .field("layout", &self.gallery.layout())
            .field("notice", &self.notice)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 900;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// # Errors
///
/// Returns the Iced error when the window or renderer cannot be created.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a boot function implementing `Fn`.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads `settings.toml` and builds the initial state.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::from_config(flags, config, config_warning)
    }

    /// Builds the initial state from an already loaded configuration.
    ///
    /// `config_warning` is the i18n key of a load problem to show as a toast.
    /// The returned task downloads the remote placeholders.
    pub fn from_config(
        flags: Flags,
        mut config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        if let Some(slots) = flags.slots {
            config.gallery.slot_count = Some(slots);
        }
        let requested = config
            .gallery
            .slot_count
            .unwrap_or(config::DEFAULT_SLOT_COUNT);
        let slot_count = config.gallery.slot_count();
        let gallery = GalleryState::initialize(slot_count, &config.gallery.placeholder_source());

        tracing::info!(
            slots = slot_count,
            locale = %i18n.current_locale(),
            "gallery initialized"
        );

        let mut app = App {
            i18n,
            gallery,
            registry: LocalRefRegistry::new(),
            resolver: ImageResolver::new(),
            phases: HashMap::new(),
            hovered: None,
            focused: None,
            notice: None,
            notifications: notifications::Manager::new(),
            theme_mode: config.general.theme_mode,
            grid_columns: config.gallery.grid_columns(),
            subtitle: config.gallery.title.clone(),
            profile: config.profile.clone(),
        };

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }
        if requested != slot_count {
            app.notifications.push(
                notifications::Notification::info("notification-slots-clamped")
                    .with_arg("requested", requested.to_string())
                    .with_arg("count", slot_count.to_string()),
            );
        }

        let task = update::fetch_placeholders(&mut app.resolver, &app.gallery);
        (app, task)
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create(self.notifications.has_notifications())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            gallery: &mut self.gallery,
            registry: &mut self.registry,
            resolver: &mut self.resolver,
            phases: &mut self.phases,
            hovered: &mut self.hovered,
            focused: &mut self.focused,
            notice: &mut self.notice,
            notifications: &mut self.notifications,
        };

        match message {
            Message::Gallery(message) => update::handle_gallery_message(&mut ctx, message),
            Message::Notice(message) => update::handle_notice_message(&mut ctx, message),
            Message::Notification(message) => {
                ctx.notifications.handle_message(&message);
                Task::none()
            }
            Message::FileChosen { slot, path } => update::handle_file_chosen(&mut ctx, slot, path),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::PlaceholderFetched { reference, result } => {
                ctx.resolver.complete_fetch(reference, result);
                Task::none()
            }
            Message::Focus(command) => update::handle_focus(&mut ctx, command),
            Message::Tick(_) => {
                ctx.notifications.tick();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            resolver: &self.resolver,
            phases: &self.phases,
            hovered: self.hovered,
            focused: self.focused,
            notice: self.notice.as_ref(),
            notifications: &self.notifications,
            grid_columns: self.grid_columns,
            subtitle: self.subtitle.as_deref(),
            profile: &self.profile,
        })
    }

    #[must_use]
    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    #[must_use]
    pub fn registry(&self) -> &LocalRefRegistry {
        &self.registry
    }

    #[must_use]
    pub fn resolver(&self) -> &ImageResolver {
        &self.resolver
    }

    /// The blocking notice currently shown, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&IntakeError> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn slot_phase(&self, id: SlotId) -> SlotPhase {
        self.phases.get(&id).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn hovered_slot(&self) -> Option<SlotId> {
        self.hovered
    }

    #[must_use]
    pub fn focused_slot(&self) -> Option<SlotId> {
        self.focused
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn grid_columns(&self) -> u32 {
        self.grid_columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::{LayoutMode, SlotImage};
    use crate::ui::gallery_view;
    use crate::ui::notice;
    use crate::ui::slot;
    use std::path::PathBuf;

    fn app_with_slots(slots: u32) -> App {
        let flags = Flags {
            lang: Some("en-US".into()),
            slots: Some(slots),
            ..Flags::default()
        };
        let (app, _task) = App::from_config(flags, Config::default(), None);
        app
    }

    fn press(app: &mut App, id: u32) {
        let _ = app.update(Message::Gallery(gallery_view::Message::Slot(
            SlotId::new(id),
            slot::Message::Pressed,
        )));
    }

    fn choose(app: &mut App, id: u32, path: Option<&str>) {
        let _ = app.update(Message::FileChosen {
            slot: SlotId::new(id),
            path: path.map(PathBuf::from),
        });
    }

    #[test]
    fn starts_in_grid_with_configured_slot_count() {
        let app = app_with_slots(6);
        assert_eq!(app.gallery().len(), 6);
        assert_eq!(app.gallery().layout(), LayoutMode::Grid);
        assert!(app.notice().is_none());
    }

    #[test]
    fn title_comes_from_translations() {
        let app = app_with_slots(1);
        assert_eq!(app.title(), "Photo Gallery");
    }

    #[test]
    fn config_warning_becomes_a_toast() {
        let flags = Flags::default();
        let (app, _task) = App::from_config(
            flags,
            Config::default(),
            Some("notification-config-load-error".into()),
        );
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn out_of_range_slot_count_is_clamped_with_a_toast() {
        let app = app_with_slots(999);
        assert_eq!(app.gallery().len(), 256);

        let toast = app.notifications().visible().next().unwrap();
        assert_eq!(toast.severity(), notifications::Severity::Info);
        assert_eq!(toast.message_key(), "notification-slots-clamped");
        assert_eq!(
            app.i18n.tr_with_args(
                toast.message_key(),
                &[("requested", "999"), ("count", "256")]
            ),
            "999 slots requested, showing 256."
        );
    }

    #[test]
    fn slot_count_in_range_raises_no_toast() {
        let app = app_with_slots(6);
        assert!(!app.notifications().has_notifications());
    }

    fn focus(app: &mut App, command: FocusCommand) {
        let _ = app.update(Message::Focus(command));
    }

    #[test]
    fn tab_cycles_focus_through_slots() {
        let mut app = app_with_slots(3);
        assert_eq!(app.focused_slot(), None);

        focus(&mut app, FocusCommand::Next);
        assert_eq!(app.focused_slot(), Some(SlotId::new(1)));
        focus(&mut app, FocusCommand::Next);
        focus(&mut app, FocusCommand::Next);
        assert_eq!(app.focused_slot(), Some(SlotId::new(3)));
        focus(&mut app, FocusCommand::Next);
        assert_eq!(app.focused_slot(), Some(SlotId::new(1)));

        focus(&mut app, FocusCommand::Previous);
        assert_eq!(app.focused_slot(), Some(SlotId::new(3)));

        focus(&mut app, FocusCommand::Clear);
        assert_eq!(app.focused_slot(), None);
    }

    #[test]
    fn activating_focused_slot_opens_its_picker() {
        let mut app = app_with_slots(3);
        focus(&mut app, FocusCommand::Previous);
        focus(&mut app, FocusCommand::Activate);
        assert_eq!(app.slot_phase(SlotId::new(3)), SlotPhase::AwaitingFileSelection);
    }

    #[test]
    fn activate_dismisses_the_notice_before_anything_else() {
        let mut app = app_with_slots(2);
        press(&mut app, 1);
        choose(&mut app, 1, Some("/docs/notes.txt"));
        assert!(app.notice().is_some());

        focus(&mut app, FocusCommand::Next);
        assert_eq!(app.focused_slot(), None);

        focus(&mut app, FocusCommand::Activate);
        assert!(app.notice().is_none());
        assert_eq!(app.slot_phase(SlotId::new(1)), SlotPhase::Idle);
    }

    #[test]
    fn pressing_a_slot_awaits_file_selection() {
        let mut app = app_with_slots(4);
        press(&mut app, 2);
        assert_eq!(app.slot_phase(SlotId::new(2)), SlotPhase::AwaitingFileSelection);
        assert_eq!(app.slot_phase(SlotId::new(1)), SlotPhase::Idle);
    }

    #[test]
    fn only_one_picker_at_a_time() {
        let mut app = app_with_slots(4);
        press(&mut app, 1);
        press(&mut app, 3);
        assert_eq!(app.slot_phase(SlotId::new(3)), SlotPhase::Idle);
    }

    #[test]
    fn cancel_returns_to_idle_without_change() {
        let mut app = app_with_slots(4);
        let before = app.gallery().clone();

        press(&mut app, 1);
        choose(&mut app, 1, None);

        assert_eq!(app.slot_phase(SlotId::new(1)), SlotPhase::Idle);
        assert_eq!(app.gallery(), &before);
        assert!(app.notice().is_none());
    }

    #[test]
    fn picked_image_replaces_only_that_slot() {
        let mut app = app_with_slots(4);
        let before = app.gallery().clone();

        press(&mut app, 2);
        choose(&mut app, 2, Some("/photos/cat.jpg"));

        let slot = app.gallery().slot(SlotId::new(2)).unwrap();
        let reference = slot.image().reference().unwrap();
        assert!(reference.is_local());
        assert!(app.resolver().handle(reference).is_some());

        for id in [1, 3, 4] {
            let id = SlotId::new(id);
            assert_eq!(app.gallery().slot(id), before.slot(id));
        }
        assert_eq!(app.slot_phase(SlotId::new(2)), SlotPhase::Idle);
    }

    #[test]
    fn non_image_raises_one_notice_and_changes_nothing() {
        let mut app = app_with_slots(4);
        let before = app.gallery().clone();

        press(&mut app, 1);
        choose(&mut app, 1, Some("/docs/notes.txt"));

        assert_eq!(app.gallery(), &before);
        assert!(matches!(app.notice(), Some(IntakeError::NotAnImage { .. })));
        assert!(app.registry().is_empty());
        assert_eq!(app.slot_phase(SlotId::new(1)), SlotPhase::Idle);
    }

    #[test]
    fn notice_blocks_activation_until_dismissed() {
        let mut app = app_with_slots(2);
        press(&mut app, 1);
        choose(&mut app, 1, Some("/docs/notes.txt"));

        press(&mut app, 2);
        assert_eq!(app.slot_phase(SlotId::new(2)), SlotPhase::Idle);

        let _ = app.update(Message::Notice(notice::Message::Dismiss));
        assert!(app.notice().is_none());

        press(&mut app, 2);
        assert_eq!(app.slot_phase(SlotId::new(2)), SlotPhase::AwaitingFileSelection);
    }

    #[test]
    fn replacing_a_local_image_releases_the_old_reference() {
        let mut app = app_with_slots(2);

        press(&mut app, 1);
        choose(&mut app, 1, Some("/photos/a.png"));
        let first = app
            .gallery()
            .slot(SlotId::new(1))
            .and_then(|s| s.image().reference().cloned())
            .unwrap();

        press(&mut app, 1);
        choose(&mut app, 1, Some("/photos/a.png"));
        let second = app
            .gallery()
            .slot(SlotId::new(1))
            .and_then(|s| s.image().reference().cloned())
            .unwrap();

        assert_ne!(first, second);
        assert!(app.registry().resolve(&first).is_none());
        assert!(app.registry().resolve(&second).is_some());
        assert_eq!(app.registry().len(), 1);
    }

    #[test]
    fn drop_goes_to_hovered_slot() {
        let mut app = app_with_slots(3);
        let _ = app.update(Message::Gallery(gallery_view::Message::Slot(
            SlotId::new(3),
            slot::Message::CursorEntered,
        )));
        assert_eq!(app.hovered_slot(), Some(SlotId::new(3)));

        let _ = app.update(Message::FileDropped(PathBuf::from("/photos/dog.webp")));

        let image = app.gallery().slot(SlotId::new(3)).unwrap().image();
        assert!(matches!(image, SlotImage::Populated(r) if r.is_local()));
    }

    #[test]
    fn drop_without_hover_is_ignored() {
        let mut app = app_with_slots(3);
        let before = app.gallery().clone();

        let _ = app.update(Message::FileDropped(PathBuf::from("/photos/dog.webp")));

        assert_eq!(app.gallery(), &before);
        assert!(app.registry().is_empty());
    }

    #[test]
    fn cursor_leaving_clears_hover() {
        let mut app = app_with_slots(2);
        for message in [slot::Message::CursorEntered, slot::Message::CursorLeft] {
            let _ = app.update(Message::Gallery(gallery_view::Message::Slot(
                SlotId::new(1),
                message,
            )));
        }
        assert_eq!(app.hovered_slot(), None);
    }

    #[test]
    fn layout_toggle_round_trips() {
        let mut app = app_with_slots(2);
        let _ = app.update(Message::Gallery(gallery_view::Message::SetLayout(
            LayoutMode::Feed,
        )));
        assert_eq!(app.gallery().layout(), LayoutMode::Feed);

        let _ = app.update(Message::Gallery(gallery_view::Message::SetLayout(
            LayoutMode::Grid,
        )));
        assert_eq!(app.gallery().layout(), LayoutMode::Grid);
    }

    #[test]
    fn unknown_slot_messages_are_ignored() {
        let mut app = app_with_slots(2);
        let before = app.gallery().clone();

        press(&mut app, 9);
        choose(&mut app, 9, Some("/photos/a.png"));

        assert_eq!(app.gallery(), &before);
        assert!(app.registry().is_empty());
        assert!(app.phases.is_empty());
    }
}
