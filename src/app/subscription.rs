// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native file drops and slot navigation keys are routed to the update loop;
//! a one-second tick runs only while toasts are present so they can expire.

use super::{FocusCommand, Message};
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval at which toast timers are checked.
const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Builds the subscriptions for the current state.
pub fn create(has_notifications: bool) -> Subscription<Message> {
    let events = event::listen_with(|event, status, _window_id| match event {
        event::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. })
            if status == event::Status::Ignored =>
        {
            focus_command(&key, modifiers).map(Message::Focus)
        }
        _ => None,
    });

    if has_notifications {
        Subscription::batch([events, time::every(TICK_INTERVAL).map(Message::Tick)])
    } else {
        events
    }
}

/// Maps a key press to a slot navigation command.
fn focus_command(key: &Key, modifiers: keyboard::Modifiers) -> Option<FocusCommand> {
    match key {
        Key::Named(Named::Tab) if modifiers.shift() => Some(FocusCommand::Previous),
        Key::Named(Named::Tab) => Some(FocusCommand::Next),
        Key::Named(Named::Enter | Named::Space) => Some(FocusCommand::Activate),
        Key::Named(Named::Escape) => Some(FocusCommand::Clear),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_moves_focus_both_ways() {
        let tab = Key::Named(Named::Tab);
        assert_eq!(
            focus_command(&tab, keyboard::Modifiers::empty()),
            Some(FocusCommand::Next)
        );
        assert_eq!(
            focus_command(&tab, keyboard::Modifiers::SHIFT),
            Some(FocusCommand::Previous)
        );
    }

    #[test]
    fn enter_and_space_activate() {
        for named in [Named::Enter, Named::Space] {
            assert_eq!(
                focus_command(&Key::Named(named), keyboard::Modifiers::empty()),
                Some(FocusCommand::Activate)
            );
        }
    }

    #[test]
    fn other_keys_are_ignored() {
        let key = Key::Character("a".into());
        assert_eq!(focus_command(&key, keyboard::Modifiers::empty()), None);
    }
}
