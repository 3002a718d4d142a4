// SPDX-License-Identifier: MPL-2.0
//! Startup loading overlay.
//!
//! The overlay covers the window from launch until the startup resources
//! are ready, then lingers for a short settle period so the reveal never
//! flashes. Three states, strictly forward: preparing, settling, hidden.

use crate::i18n::I18n;
use crate::ui::styles;
use crate::ui::widgets::Spinner;
use iced::widget::{container, Column, Text};
use iced::{Color, Element, Length};
use std::time::{Duration, Instant};

/// How long the overlay stays up after resources are ready.
pub const HOLD: Duration = Duration::from_millis(1500);

#[derive(Debug)]
pub enum LoadingScreen {
    /// Waiting for startup resources.
    Preparing,
    /// Resources ready; holding the overlay for the settle period.
    Settling { since: Instant },
    Hidden,
}

impl LoadingScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::Preparing
    }

    /// Marks the startup resources ready and starts the settle period.
    pub fn resources_ready(&mut self, now: Instant) {
        if matches!(self, Self::Preparing) {
            *self = Self::Settling { since: now };
        }
    }

    /// Hides the overlay once the settle period has passed. Returns true
    /// when the overlay just disappeared.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self {
            Self::Settling { since } if now.saturating_duration_since(*since) >= HOLD => {
                *self = Self::Hidden;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// True while the settle period is running; the app keeps the timeout
    /// tick alive while this holds.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        matches!(self, Self::Settling { .. })
    }

    pub fn view<'a, M: 'a + 'static>(
        &self,
        i18n: &I18n,
        spinner_color: Color,
        spinner_angle: f32,
    ) -> Element<'a, M> {
        let content = Column::new()
            .spacing(16)
            .align_x(iced::Alignment::Center)
            .push(Spinner::new(spinner_color, spinner_angle).into_element())
            .push(Text::new(i18n.tr("loading-message")));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::loading_overlay)
            .into()
    }
}

impl Default for LoadingScreen {
    fn default() -> Self {
        Self::new()
    }
}
