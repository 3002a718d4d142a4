// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar.
//!
//! The bar pins to the top of the window and switches to a denser style
//! once the page scrolls past a small threshold. Wide layouts show the
//! link row inline; the hamburger opens a dropdown with the same links.
//! The link matching the section under the reading point is highlighted.

use crate::app::section::Section;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Space, Text};
use iced::{Element, Length};

/// The bar switches to its scrolled style strictly below this depth.
pub const SCROLLED_THRESHOLD: f32 = 50.0;

#[derive(Debug, Default)]
pub struct State {
    menu_open: bool,
    scrolled: bool,
    active: Option<Section>,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    ToggleMenu,
    LinkClicked(Section),
    ThemeTogglePressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    None,
    ScrollTo(Section),
    ToggleTheme,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn active(&self) -> Option<Section> {
        self.active
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ToggleMenu => {
                self.menu_open = !self.menu_open;
                Event::None
            }
            Message::LinkClicked(section) => {
                self.menu_open = false;
                Event::ScrollTo(section)
            }
            Message::ThemeTogglePressed => Event::ToggleTheme,
        }
    }

    /// Closes the dropdown, e.g. after a click outside of it.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Re-derives the scroll-dependent parts of the bar from the current
    /// scroll offset.
    pub fn sync_scroll(&mut self, scroll_y: f32, sections: &crate::app::section::SectionMap) {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;
        self.active = sections.active_at(scroll_y);
    }

    pub fn view<'a>(&self, i18n: &I18n, theme_is_dark: bool) -> Element<'a, Message> {
        let brand = Text::new(i18n.tr("nav-brand")).size(typography::LEAD);

        let mut links = Row::new().spacing(spacing::SM);
        for section in Section::ALL {
            links = links.push(self.link_button(i18n, section));
        }

        let theme_toggle = button(Text::new(if theme_is_dark { "☀" } else { "🌙" }))
            .style(styles::nav_link(false))
            .on_press(Message::ThemeTogglePressed);

        let hamburger = button(Text::new("☰"))
            .style(styles::nav_link(self.menu_open))
            .on_press(Message::ToggleMenu);

        let bar = Row::new()
            .padding(spacing::SM)
            .spacing(spacing::MD)
            .align_y(iced::Alignment::Center)
            .push(brand)
            .push(Space::new().width(Length::Fill).height(Length::Shrink))
            .push(links)
            .push(theme_toggle)
            .push(hamburger);

        let mut content = Column::new()
            .width(Length::Fill)
            .push(iced::widget::container(bar).style(styles::navbar_bar(self.scrolled)));

        if self.menu_open {
            let mut dropdown = Column::new().spacing(spacing::XXS).padding(spacing::SM);
            for section in Section::ALL {
                dropdown = dropdown.push(self.link_button(i18n, section));
            }
            content = content.push(
                iced::widget::container(dropdown)
                    .width(Length::Fill)
                    .style(styles::navbar_bar(true)),
            );
        }

        content.into()
    }

    fn link_button<'a>(&self, i18n: &I18n, section: Section) -> Element<'a, Message> {
        let is_active = self.active == Some(section);
        button(Text::new(i18n.tr(section.title_key())).size(typography::BODY))
            .style(styles::nav_link(is_active))
            .on_press(Message::LinkClicked(section))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::section::SectionMap;

    #[test]
    fn toggle_opens_and_closes_the_menu() {
        let mut state = State::new();
        state.update(Message::ToggleMenu);
        assert!(state.menu_open());
        state.update(Message::ToggleMenu);
        assert!(!state.menu_open());
    }

    #[test]
    fn link_click_closes_the_menu_and_requests_a_scroll() {
        let mut state = State::new();
        state.update(Message::ToggleMenu);
        let event = state.update(Message::LinkClicked(Section::Projects));
        assert!(matches!(event, Event::ScrollTo(Section::Projects)));
        assert!(!state.menu_open());
    }

    #[test]
    fn outside_click_closes_the_menu() {
        let mut state = State::new();
        state.update(Message::ToggleMenu);
        state.close_menu();
        assert!(!state.menu_open());
    }

    #[test]
    fn scrolled_style_threshold_is_strict() {
        let sections = SectionMap::portfolio();
        let mut state = State::new();

        state.sync_scroll(50.0, &sections);
        assert!(!state.is_scrolled());

        state.sync_scroll(50.1, &sections);
        assert!(state.is_scrolled());
    }

    #[test]
    fn active_link_follows_the_scroll_offset() {
        let sections = SectionMap::portfolio();
        let mut state = State::new();

        state.sync_scroll(0.0, &sections);
        assert_eq!(state.active(), Some(Section::Home));

        state.sync_scroll(sections.top(Section::Skills), &sections);
        assert_eq!(state.active(), Some(Section::Skills));
    }

    #[test]
    fn theme_toggle_propagates_without_touching_the_menu() {
        let mut state = State::new();
        state.update(Message::ToggleMenu);
        let event = state.update(Message::ThemeTogglePressed);
        assert!(matches!(event, Event::ToggleTheme));
        assert!(state.menu_open());
    }
}
