// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{view, App, Message};
use crate::ui::back_to_top::{self, Event as BackToTopEvent};
use crate::ui::contact_form::{self, Event as ContactFormEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::theming;
use crate::ui::viewport::ScrollAnimation;
use iced::Task;
use std::time::Instant;

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navbar(msg) => self.handle_navbar(msg),
            Message::ContactForm(msg) => self.handle_contact_form(msg),
            Message::BackToTop(msg) => match back_to_top::update(msg) {
                BackToTopEvent::ScrollToTop => self.start_scroll_to(0.0),
            },
            Message::OutsideClicked => {
                self.navbar.close_menu();
                Task::none()
            }
            Message::ThemeShortcut => {
                self.toggle_theme();
                Task::none()
            }
            Message::OsThemeProbe(_) => {
                // Only reachable while no explicit choice is stored, so the
                // freshly detected signal takes effect directly.
                self.os_theme = theming::detect_os_theme();
                Task::none()
            }
            Message::Scrolled(offset) => self.handle_scrolled(offset),
            Message::WindowResized(size) => {
                self.viewport.height = size.height;
                self.sync_scroll_effects(Instant::now());
                Task::none()
            }
            Message::IconFieldReady(field) => {
                self.icon_field = Some(field);
                self.loading.resources_ready(Instant::now());
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                self.loading.tick(now);
                self.contact.tick(now);
                self.reveals.tick(now);
                Task::none()
            }
            Message::AnimationTick(now) => self.handle_animation_tick(now),
        }
    }

    fn handle_navbar(&mut self, message: navbar::Message) -> Task<Message> {
        match self.navbar.update(message) {
            NavbarEvent::ScrollTo(section) => {
                let target = self.sections.anchor_target(section);
                self.start_scroll_to(target)
            }
            NavbarEvent::ToggleTheme => {
                self.toggle_theme();
                Task::none()
            }
            NavbarEvent::None => Task::none(),
        }
    }

    fn handle_contact_form(&mut self, message: contact_form::Message) -> Task<Message> {
        match self.contact.update(message, Instant::now()) {
            ContactFormEvent::Submitted(data) => {
                // Demo form: nothing is sent anywhere, the payload is only
                // logged so the flow can be observed.
                eprintln!("Contact form submitted (demo, nothing sent):");
                for (key, value) in data.pairs() {
                    eprintln!("  {key}: {value}");
                }
                Task::none()
            }
            ContactFormEvent::None => Task::none(),
        }
    }

    fn handle_scrolled(&mut self, offset: f32) -> Task<Message> {
        // The page is scroll-locked while the dropdown menu is open.
        if self.navbar.menu_open() && (offset - self.viewport.offset).abs() > f32::EPSILON {
            return self.snap_task(self.viewport.offset);
        }
        self.viewport.offset = offset;
        self.sync_scroll_effects(Instant::now());
        Task::none()
    }

    fn handle_animation_tick(&mut self, now: Instant) -> Task<Message> {
        self.now = now;
        self.typing.tick(now);

        if let Some(animation) = self.scroll_animation {
            let offset = animation.offset_at(now);
            if animation.is_finished(now) {
                self.scroll_animation = None;
            }
            return self.snap_task(offset);
        }
        Task::none()
    }

    /// Begins an eased scroll from the current offset to `target`.
    fn start_scroll_to(&mut self, target: f32) -> Task<Message> {
        self.scroll_animation = Some(ScrollAnimation::new(
            self.viewport.offset,
            target,
            Instant::now(),
        ));
        Task::none()
    }

    /// Re-derives everything that depends on the scroll position.
    pub(super) fn sync_scroll_effects(&mut self, now: Instant) {
        self.navbar.sync_scroll(self.viewport.offset, &self.sections);
        self.counters.sync_visibility(&self.viewport, now);
        self.reveals.sync_visibility(&self.viewport, now);
    }

    /// Task snapping the page scrollable to an absolute offset.
    fn snap_task(&self, offset: f32) -> Task<Message> {
        use iced::widget::scrollable::RelativeOffset;
        use iced::widget::{operation, Id};

        let max_scroll = (self.sections.total_height() - self.viewport.height).max(1.0);
        operation::snap_to(
            Id::new(view::PAGE_SCROLL_ID),
            RelativeOffset {
                x: 0.0,
                y: (offset / max_scroll).clamp(0.0, 1.0),
            },
        )
    }
}
