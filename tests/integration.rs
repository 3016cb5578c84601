// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::config::{self, Config, GalleryConfig, GeneralConfig};
use iced_gallery::app::{App, Flags, Message};
use iced_gallery::error::IntakeError;
use iced_gallery::gallery::{
    DisplayRef, GalleryState, LayoutMode, PlaceholderSource, SlotId, SlotImage,
};
use iced_gallery::i18n::fluent::I18n;
use iced_gallery::ui::gallery_view;
use iced_gallery::ui::layout::LayoutStyle;
use iced_gallery::ui::notice;
use iced_gallery::ui::slot::{self, SlotPhase};
use std::path::PathBuf;
use tempfile::tempdir;

fn boot(slots: u32) -> App {
    let flags = Flags {
        lang: Some("en-US".to_string()),
        slots: Some(slots),
        ..Flags::default()
    };
    let (app, _task) = App::from_config(flags, Config::default(), None);
    app
}

fn pick(app: &mut App, id: u32, path: &str) {
    let slot = SlotId::new(id);
    let _ = app.update(Message::Gallery(gallery_view::Message::Slot(
        slot,
        slot::Message::Pressed,
    )));
    let _ = app.update(Message::FileChosen {
        slot,
        path: Some(PathBuf::from(path)),
    });
}

fn reference_of(app: &App, id: u32) -> Option<DisplayRef> {
    app.gallery()
        .slot(SlotId::new(id))
        .and_then(|slot| slot.image().reference().cloned())
}

#[test]
fn replacing_slot_one_leaves_slot_two_alone() {
    let state = GalleryState::initialize(16, &PlaceholderSource::default());
    let slot_two = state.slot(SlotId::new(2)).cloned();

    let local = DisplayRef::new("blob:local-ref-A").expect("non-empty reference");
    let next = state.replace_slot_image(SlotId::new(1), local.clone());

    assert_eq!(
        next.slot(SlotId::new(1)).map(|s| s.image().clone()),
        Some(SlotImage::Populated(local))
    );
    assert_eq!(next.slot(SlotId::new(2)).cloned(), slot_two);
}

#[test]
fn feed_then_grid_restores_grid_style() {
    let mut app = boot(8);
    let grid = LayoutStyle::for_mode(app.gallery().layout(), app.grid_columns());

    for mode in [LayoutMode::Feed, LayoutMode::Grid] {
        let _ = app.update(Message::Gallery(gallery_view::Message::SetLayout(mode)));
    }

    assert_eq!(app.gallery().layout(), LayoutMode::Grid);
    assert_eq!(
        LayoutStyle::for_mode(app.gallery().layout(), app.grid_columns()),
        grid
    );
}

#[test]
fn non_image_selection_surfaces_exactly_one_notice() {
    let mut app = boot(4);
    let before = app.gallery().clone();

    pick(&mut app, 3, "/home/user/report.pdf");

    assert_eq!(app.gallery(), &before);
    assert_eq!(
        app.notice(),
        Some(&IntakeError::NotAnImage {
            mime: "application/pdf".to_string()
        })
    );

    let _ = app.update(Message::Notice(notice::Message::Dismiss));
    assert!(app.notice().is_none());
    assert_eq!(app.gallery(), &before);
}

#[test]
fn picking_the_same_file_twice_is_handled_twice() {
    let mut app = boot(2);

    pick(&mut app, 1, "/photos/sunset.JPG");
    let first = reference_of(&app, 1).expect("slot 1 populated");
    assert_eq!(app.slot_phase(SlotId::new(1)), SlotPhase::Idle);

    pick(&mut app, 1, "/photos/sunset.JPG");
    let second = reference_of(&app, 1).expect("slot 1 populated");

    assert!(first.is_local() && second.is_local());
    assert_ne!(first, second);
    assert_eq!(app.registry().len(), 1);
}

#[test]
fn placeholders_are_not_released_when_replaced() {
    let mut app = boot(1);
    let placeholder = reference_of(&app, 1).expect("seeded placeholder");
    assert!(placeholder.is_remote());

    pick(&mut app, 1, "/photos/cat.png");

    assert!(reference_of(&app, 1).is_some_and(|r| r.is_local()));
    assert!(app.resolver().is_pending(&placeholder));
}

#[test]
fn settings_file_drives_gallery_and_language() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("settings.toml");

    let settings = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        gallery: GalleryConfig {
            slot_count: Some(6),
            grid_columns: Some(3),
            placeholder_url: Some("https://img.test/{id}.jpg".to_string()),
            title: Some("Carnet".to_string()),
        },
        ..Config::default()
    };
    config::save_to_path(&settings, &path).expect("failed to write settings");
    let loaded = config::load_from_path(&path).expect("failed to read settings");

    let (app, _task) = App::from_config(Flags::default(), loaded, None);

    assert_eq!(app.gallery().len(), 6);
    assert_eq!(app.grid_columns(), 3);
    assert_eq!(
        reference_of(&app, 4).map(|r| r.as_str().to_string()),
        Some("https://img.test/4.jpg".to_string())
    );
    assert_eq!(app.i18n.current_locale().to_string(), "fr");
    assert_eq!(
        app.i18n.tr("error-not-an-image"),
        "Veuillez sélectionner un fichier image."
    );
}

#[test]
fn cli_language_overrides_config() {
    let settings = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };

    let i18n = I18n::new(Some("en-US".to_string()), None, &settings);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("error-not-an-image"), "Please select an image file.");
}
