// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! Everything visual that is shared between components lives here so the
//! light and dark schemes stay in step: the base palette, the spacing
//! scale (8px grid), and fixed component sizes.

use iced::Color;

pub mod palette {
    use super::Color;

    // Grayscale
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.09, 0.11);
    pub const GRAY_700: Color = Color::from_rgb(0.28, 0.30, 0.34);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.57, 0.60);
    pub const GRAY_100: Color = Color::from_rgb(0.93, 0.94, 0.95);

    // Accent (teal scale) - the portfolio's signature color
    pub const ACCENT_300: Color = Color::from_rgb(0.45, 0.88, 0.82);
    pub const ACCENT_500: Color = Color::from_rgb(0.10, 0.72, 0.65);
    pub const ACCENT_700: Color = Color::from_rgb(0.05, 0.52, 0.48);

    // Semantic
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

pub mod opacity {
    /// Loading overlay backdrop.
    pub const OVERLAY: f32 = 0.92;
    /// Decorative floating icons never exceed this.
    pub const DECORATIVE: f32 = 0.35;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

pub mod sizing {
    /// Loading spinner diameter.
    pub const SPINNER: f32 = 48.0;
    /// Back-to-top button height.
    pub const BACK_TO_TOP: f32 = 44.0;
    /// Stat counter value text.
    pub const COUNTER_TEXT: f32 = 40.0;
    /// Floating icon glyph size.
    pub const FLOATING_GLYPH: f32 = 28.0;
}

pub mod typography {
    pub const BODY: f32 = 16.0;
    pub const SMALL: f32 = 13.0;
    pub const LEAD: f32 = 20.0;
    pub const HEADING: f32 = 32.0;
    pub const HERO: f32 = 44.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const PILL: f32 = 22.0;
}

/// Returns a color with the given alpha applied.
pub fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}
