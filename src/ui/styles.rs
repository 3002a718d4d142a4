// SPDX-License-Identifier: MPL-2.0
//! Centralized widget styles.
//!
//! Colors derive from the active Iced `Theme` palette where possible so
//! both schemes stay readable; the accent comes from the design tokens.

use crate::ui::design_tokens::{opacity, palette, radius, with_alpha};
use iced::widget::{button, container};
use iced::{Background, Border, Theme};

/// The fixed top bar; denser and opaque once the page has scrolled.
pub fn navbar_bar(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;
        let alpha = if scrolled { 0.98 } else { 0.85 };
        container::Style {
            background: Some(Background::Color(with_alpha(base, alpha))),
            ..container::Style::default()
        }
    }
}

/// Navigation link; the active section's link carries the accent.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();
        let text_color = if active {
            palette::ACCENT_500
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => palette::ACCENT_300,
                _ => palette_ext.background.base.text,
            }
        };
        button::Style {
            background: None,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// The contact form's submit control.
pub fn submit_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => palette::ACCENT_700,
        button::Status::Disabled => palette::SUCCESS_500,
        _ => palette::ACCENT_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette_ext.background.base.color,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Round floating back-to-top control.
pub fn back_to_top_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();
    let background = match status {
        button::Status::Hovered => palette::ACCENT_700,
        _ => palette::ACCENT_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette_ext.background.base.color,
        border: Border {
            radius: radius::PILL.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Raised card surface used for skills, experience, and project entries.
pub fn card(theme: &Theme) -> container::Style {
    let palette_ext = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette_ext.background.weak.color)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Near-opaque backdrop of the startup loading overlay.
pub fn loading_overlay(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;
    container::Style {
        background: Some(Background::Color(with_alpha(base, opacity::OVERLAY))),
        ..container::Style::default()
    }
}
