// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the page sections, the scroll-driven
//! components (navigation highlight, counters, reveals), the timed
//! animations (typing, smooth scroll, spinner), and the persisted theme
//! preference. Policy decisions (theme precedence, persistence format,
//! what counts as "still animating") live here so user-facing behavior is
//! easy to audit.

mod message;
pub mod section;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::I18n;
use crate::ui::contact_form;
use crate::ui::counters::CounterBoard;
use crate::ui::floating_icons::IconField;
use crate::ui::loading::LoadingScreen;
use crate::ui::navbar;
use crate::ui::reveal::{RevealId, RevealSet};
use crate::ui::theming::{self, ThemeChoice};
use crate::ui::typing::{default_phrases, TypingAnimation};
use crate::ui::viewport::{ScrollAnimation, Viewport};
use iced::{window, Subscription, Task, Theme};
use section::SectionMap;
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Delay step between neighbouring cards revealing in the same row.
const CARD_STAGGER: Duration = Duration::from_millis(150);

/// Root Iced application state bridging the page components, localization,
/// and persisted preferences.
pub struct App {
    pub i18n: I18n,
    sections: SectionMap,
    /// Explicit user choice, if any; `None` keeps the OS signal in charge.
    stored_theme: Option<ThemeChoice>,
    os_theme: ThemeChoice,
    language: Option<String>,
    navbar: navbar::State,
    typing: TypingAnimation,
    counters: CounterBoard,
    reveals: RevealSet,
    skill_reveals: Vec<RevealId>,
    experience_reveals: Vec<RevealId>,
    project_reveals: Vec<RevealId>,
    icon_field: Option<IconField>,
    contact: contact_form::State,
    loading: LoadingScreen,
    viewport: Viewport,
    scroll_animation: Option<ScrollAnimation>,
    launched_at: Instant,
    /// Last observed tick instant; the clock the view renders with.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme", &self.resolved_theme())
            .field("scroll_offset", &self.viewport.offset)
            .field("loading", &self.loading.is_visible())
            .finish()
    }
}

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
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the page state and kicks off the asynchronous startup
    /// resource preparation that the loading overlay waits on.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load settings: {err}");
            config::Config::default()
        });
        let i18n = I18n::new(flags.lang, &config);
        let sections = SectionMap::portfolio();
        let now = Instant::now();

        let mut typing = TypingAnimation::new(default_phrases());
        typing.start(now);

        let mut app = App {
            i18n,
            stored_theme: config.theme,
            os_theme: theming::detect_os_theme(),
            language: config.language,
            navbar: navbar::State::new(),
            typing,
            counters: CounterBoard::new(),
            reveals: RevealSet::new(),
            skill_reveals: Vec::new(),
            experience_reveals: Vec::new(),
            project_reveals: Vec::new(),
            icon_field: None,
            contact: contact_form::State::new(),
            loading: LoadingScreen::new(),
            viewport: Viewport::new(0.0, WINDOW_DEFAULT_HEIGHT as f32),
            scroll_animation: None,
            launched_at: now,
            now,
            sections,
        };
        app.register_scroll_bands();
        app.sync_scroll_effects(now);

        let task = Task::perform(IconField::prepare(), Message::IconFieldReady);
        (app, task)
    }

    /// Registers the counter row and every reveal-gated card with the
    /// vertical bands they occupy in the section map.
    fn register_scroll_bands(&mut self) {
        use section::Section;

        let about_top = self.sections.top(Section::About);
        self.counters = CounterBoard::portfolio(about_top + 500.0, 140.0);

        let skills_top = self.sections.top(Section::Skills);
        self.skill_reveals = (0..view::SKILL_CARDS.len())
            .map(|i| {
                self.reveals
                    .add(skills_top + 180.0, 260.0, CARD_STAGGER * i as u32)
            })
            .collect();

        let experience_top = self.sections.top(Section::Experience);
        self.experience_reveals = (0..view::EXPERIENCE_CARDS.len())
            .map(|i| {
                self.reveals
                    .add(experience_top + 160.0 + 260.0 * i as f32, 240.0, Duration::ZERO)
            })
            .collect();

        let projects_top = self.sections.top(Section::Projects);
        self.project_reveals = (0..view::PROJECT_CARDS.len())
            .map(|i| {
                self.reveals
                    .add(projects_top + 180.0, 320.0, CARD_STAGGER * i as u32)
            })
            .collect();
    }

    /// The theme currently in effect: explicit choice first, OS otherwise.
    #[must_use]
    pub fn resolved_theme(&self) -> ThemeChoice {
        theming::resolve(self.stored_theme, self.os_theme)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.resolved_theme().iced_theme()
    }

    /// Flips the theme and persists the result as an explicit choice.
    fn toggle_theme(&mut self) {
        self.stored_theme = Some(self.resolved_theme().toggled());
        let config = config::Config {
            theme: self.stored_theme,
            language: self.language.clone(),
        };
        if let Err(err) = config::save(&config) {
            eprintln!("Failed to save settings: {err}");
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let animating = self.typing.is_running()
            || self.counters.any_animating(self.now)
            || self.scroll_animation.is_some()
            || self.loading.is_visible();
        let deadlines_pending = self.loading.is_settling()
            || self.contact.is_confirming()
            || self.reveals.any_pending();

        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_animation_tick(animating),
            subscription::create_timeout_tick(deadlines_pending),
            subscription::create_os_theme_probe(self.stored_theme.is_none()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Flags::default()).0
    }

    #[test]
    fn window_title_comes_from_translations() {
        assert_eq!(app().title(), "IcedFolio");
    }

    #[test]
    fn explicit_theme_choice_survives_an_os_flip() {
        let mut app = app();
        app.stored_theme = Some(ThemeChoice::Light);
        app.os_theme = ThemeChoice::Dark;
        assert_eq!(app.resolved_theme(), ThemeChoice::Light);
    }

    #[test]
    fn typing_starts_at_boot() {
        let app = app();
        assert!(app.typing.is_running());
        assert!(!app.typing.visible_text().is_empty());
    }

    #[test]
    fn loading_overlay_covers_the_boot() {
        assert!(app().loading.is_visible());
    }

    #[test]
    fn every_card_row_is_registered_for_reveal() {
        let app = app();
        assert_eq!(app.skill_reveals.len(), view::SKILL_CARDS.len());
        assert_eq!(app.experience_reveals.len(), view::EXPERIENCE_CARDS.len());
        assert_eq!(app.project_reveals.len(), view::PROJECT_CARDS.len());
    }
}
