// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.
//!
//! The resolution rule is: an explicit stored choice always wins; without
//! one the OS signal applies, and the OS is assumed dark unless it
//! explicitly says light.

use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};

/// The two theme variants a user can choose between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Light,
    Dark,
}

impl ThemeChoice {
    /// The other variant.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::Light => ThemeChoice::Dark,
            ThemeChoice::Dark => ThemeChoice::Light,
        }
    }

    /// Maps onto the built-in Iced theme of the same polarity.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        match self {
            ThemeChoice::Light => iced::Theme::Light,
            ThemeChoice::Dark => iced::Theme::Dark,
        }
    }
}

/// Reads the OS light/dark signal. Dark unless the OS explicitly says light.
#[must_use]
pub fn detect_os_theme() -> ThemeChoice {
    if let Ok(dark_light::Mode::Light) = dark_light::detect() {
        ThemeChoice::Light
    } else {
        ThemeChoice::Dark
    }
}

/// Applies the stored-choice-over-OS-signal precedence rule.
#[must_use]
pub fn resolve(stored: Option<ThemeChoice>, os_signal: ThemeChoice) -> ThemeChoice {
    stored.unwrap_or(os_signal)
}

/// Explicit text and accent colors for a theme variant, for the places
/// the built-in Iced theme palette cannot reach (canvas programs, text
/// drawn over decorated sections).
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            accent: palette::ACCENT_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            text_primary: palette::GRAY_100,
            text_secondary: palette::GRAY_400,
            accent: palette::ACCENT_300,
        }
    }

    #[must_use]
    pub fn for_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Light => Self::light(),
            ThemeChoice::Dark => Self::dark(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_choice_wins_over_os_signal() {
        assert_eq!(
            resolve(Some(ThemeChoice::Dark), ThemeChoice::Light),
            ThemeChoice::Dark
        );
        assert_eq!(
            resolve(Some(ThemeChoice::Light), ThemeChoice::Dark),
            ThemeChoice::Light
        );
    }

    #[test]
    fn os_signal_applies_without_stored_choice() {
        assert_eq!(resolve(None, ThemeChoice::Light), ThemeChoice::Light);
        assert_eq!(resolve(None, ThemeChoice::Dark), ThemeChoice::Dark);
    }

    #[test]
    fn toggling_twice_returns_to_original() {
        assert_eq!(ThemeChoice::Light.toggled().toggled(), ThemeChoice::Light);
        assert_eq!(ThemeChoice::Dark.toggled().toggled(), ThemeChoice::Dark);
    }

    #[test]
    fn light_scheme_has_dark_text() {
        let scheme = ColorScheme::light();
        assert!(scheme.text_primary.r < 0.2);
    }

    #[test]
    fn dark_scheme_has_light_text() {
        let scheme = ColorScheme::dark();
        assert!(scheme.text_primary.r > 0.8);
    }

    #[test]
    fn schemes_pick_accents_readable_on_their_surface() {
        // The dark scheme uses the lighter end of the accent scale.
        assert!(ColorScheme::dark().accent.r > ColorScheme::light().accent.r);
    }
}
