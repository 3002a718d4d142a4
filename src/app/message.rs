// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::back_to_top;
use crate::ui::contact_form;
use crate::ui::floating_icons::IconField;
use crate::ui::navbar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    ContactForm(contact_form::Message),
    BackToTop(back_to_top::Message),
    /// A click that landed outside any control; closes the dropdown.
    OutsideClicked,
    /// Ctrl/Cmd+Shift+T.
    ThemeShortcut,
    /// Periodic check of the OS light/dark signal while no explicit
    /// theme choice is stored.
    OsThemeProbe(Instant),
    /// The page scrollable reported a new vertical offset.
    Scrolled(f32),
    WindowResized(iced::Size),
    /// The startup resources finished preparing.
    IconFieldReady(IconField),
    /// Coarse tick driving deadline-based timeouts.
    Tick(Instant),
    /// Fine-grained tick driving the running animations.
    AnimationTick(Instant),
}

/// Launch options parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Locale override, e.g. `--lang fr`.
    pub lang: Option<String>,
}
