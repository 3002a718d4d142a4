// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two tick cadences keep the app quiet when nothing moves: a fine
//! animation tick that only runs while something animates, and a coarse
//! timeout tick for deadline checks (loading settle, form confirmation,
//! reveal delays). The OS theme probe runs only while no explicit theme
//! choice is stored.

use super::Message;
use iced::keyboard::Key;
use iced::{event, time, Subscription};
use std::time::Duration;

const ANIMATION_TICK: Duration = Duration::from_millis(16);
const TIMEOUT_TICK: Duration = Duration::from_millis(100);
const OS_THEME_PROBE: Duration = Duration::from_secs(2);

/// Native keyboard and window events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match &event {
        event::Event::Keyboard(iced::keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            if matches!(status, event::Status::Captured) {
                return None;
            }
            if modifiers.command() && modifiers.shift() {
                if let Key::Character(c) = key {
                    if c.as_str().eq_ignore_ascii_case("t") {
                        return Some(Message::ThemeShortcut);
                    }
                }
            }
            None
        }
        event::Event::Window(iced::window::Event::Resized(size)) => {
            Some(Message::WindowResized(*size))
        }
        _ => None,
    })
}

/// Fine tick while any animation runs, nothing otherwise.
pub fn create_animation_tick(active: bool) -> Subscription<Message> {
    if active {
        time::every(ANIMATION_TICK).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}

/// Coarse tick while any deadline is pending, nothing otherwise.
pub fn create_timeout_tick(pending: bool) -> Subscription<Message> {
    if pending {
        time::every(TIMEOUT_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Periodic OS light/dark re-detection while the OS is in charge.
pub fn create_os_theme_probe(enabled: bool) -> Subscription<Message> {
    if enabled {
        time::every(OS_THEME_PROBE).map(Message::OsThemeProbe)
    } else {
        Subscription::none()
    }
}
