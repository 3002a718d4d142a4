// SPDX-License-Identifier: MPL-2.0
//! Mock contact form.
//!
//! Submission never leaves the machine: the collected fields are handed to
//! the parent (which logs them, standing in for the absent backend), the
//! submit control shows a confirmation for a fixed window, and afterwards
//! the control is restored and every field cleared.

use crate::i18n::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::styles;
use iced::widget::{button, text_input, Column, Text};
use iced::{Element, Length};
use std::time::{Duration, Instant};

pub const CONFIRMATION_DURATION: Duration = Duration::from_millis(3000);

/// The collected field values handed to the parent on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormData {
    /// Key/value view of the fields, the shape a backend would receive.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("subject", self.subject.as_str()),
            ("message", self.message.as_str()),
        ]
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmailChanged(String),
    SubjectChanged(String),
    MessageChanged(String),
    Submit,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Submitted(FormData),
}

#[derive(Debug, Default)]
pub struct State {
    name: String,
    email: String,
    subject: String,
    message: String,
    confirming_until: Option<Instant>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the submit control shows the sent confirmation.
    #[must_use]
    pub fn is_confirming(&self) -> bool {
        self.confirming_until.is_some()
    }

    #[must_use]
    pub fn field_values(&self) -> FormData {
        FormData {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }

    pub fn update(&mut self, message: Message, now: Instant) -> Event {
        match message {
            Message::NameChanged(value) => {
                self.name = value;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::SubjectChanged(value) => {
                self.subject = value;
                Event::None
            }
            Message::MessageChanged(value) => {
                self.message = value;
                Event::None
            }
            Message::Submit => {
                // The control is disabled while confirming; ignore repeats.
                if self.is_confirming() {
                    return Event::None;
                }
                let data = self.field_values();
                self.confirming_until = Some(now + CONFIRMATION_DURATION);
                Event::Submitted(data)
            }
        }
    }

    /// Restores the control and clears the fields once the confirmation
    /// window has passed. Returns true when that happened.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.confirming_until {
            Some(deadline) if now >= deadline => {
                self.confirming_until = None;
                self.name.clear();
                self.email.clear();
                self.subject.clear();
                self.message.clear();
                true
            }
            _ => false,
        }
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let submit: Element<'_, Message> = if self.is_confirming() {
            // Disabled control showing the confirmation text.
            button(Text::new(i18n.tr("form-sent")))
                .style(styles::submit_button)
                .into()
        } else {
            button(Text::new(i18n.tr("form-submit")))
                .style(styles::submit_button)
                .on_press(Message::Submit)
                .into()
        };

        Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .push(
                text_input(&i18n.tr("form-name"), &self.name).on_input(Message::NameChanged),
            )
            .push(
                text_input(&i18n.tr("form-email"), &self.email).on_input(Message::EmailChanged),
            )
            .push(
                text_input(&i18n.tr("form-subject"), &self.subject)
                    .on_input(Message::SubjectChanged),
            )
            .push(
                text_input(&i18n.tr("form-message"), &self.message)
                    .on_input(Message::MessageChanged),
            )
            .push(submit)
            .into()
    }
}
