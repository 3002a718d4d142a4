// SPDX-License-Identifier: MPL-2.0
//! Back-to-top control.
//!
//! A floating button that appears once the page is scrolled past a fixed
//! depth and asks the parent for a smooth scroll to the top when pressed.

use crate::i18n::I18n;
use crate::ui::design_tokens::sizing;
use crate::ui::styles;
use iced::widget::{button, Text};
use iced::{Element, Length};

/// The button appears strictly below this scroll depth.
pub const VISIBILITY_THRESHOLD: f32 = 500.0;

#[derive(Debug, Clone, Copy)]
pub enum Message {
    Pressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    ScrollToTop,
}

/// Whether the control is shown at the given scroll depth.
#[must_use]
pub fn visible(scroll_y: f32) -> bool {
    scroll_y > VISIBILITY_THRESHOLD
}

pub fn update(message: Message) -> Event {
    match message {
        Message::Pressed => Event::ScrollToTop,
    }
}

pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    button(Text::new(i18n.tr("back-to-top")))
        .height(Length::Fixed(sizing::BACK_TO_TOP))
        .style(styles::back_to_top_button)
        .on_press(Message::Pressed)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_at_the_top_of_the_page() {
        assert!(!visible(0.0));
    }

    #[test]
    fn threshold_is_strict() {
        assert!(!visible(500.0));
        assert!(visible(500.1));
    }

    #[test]
    fn press_requests_a_scroll_to_top() {
        assert!(matches!(update(Message::Pressed), Event::ScrollToTop));
    }
}
