// SPDX-License-Identifier: MPL-2.0
//! Decorative floating tech glyphs behind the hero section.
//!
//! A fixed-size field of icons is generated once at startup with random
//! positions and timings, then drawn on a Canvas drifting along a gentle
//! loop. Purely decorative: no interaction, nothing is ever added or
//! removed after generation.

use crate::ui::design_tokens::{opacity, sizing, with_alpha};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Text};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use rand::Rng;
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

pub const ICON_COUNT: usize = 15;

/// Tooling glyphs, cycled by index when the field is larger than the list.
pub const GLYPHS: [&str; 14] = [
    "🐳", "☁", "⚙", "🌿", "🐙", "🐧", "🐍", "☸", "⎇", "🖥", "🛡", "🌩", "⌨", "🗄",
];

const DRIFT_RADIUS_X: f32 = 14.0;
const DRIFT_RADIUS_Y: f32 = 10.0;

/// One generated icon: glyph plus randomized placement and timing.
#[derive(Debug, Clone)]
pub struct FloatingIcon {
    pub glyph: &'static str,
    /// Horizontal position, percent of the field width.
    pub x_pct: f32,
    /// Vertical position, percent of the field height.
    pub y_pct: f32,
    /// Time before this icon starts drifting.
    pub delay: Duration,
    /// One full drift loop.
    pub duration: Duration,
}

/// The immutable set of generated icons.
#[derive(Debug, Clone)]
pub struct IconField {
    icons: Vec<FloatingIcon>,
    created_at: Instant,
}

impl IconField {
    /// Generates the field from the given randomness source.
    pub fn generate<R: Rng>(rng: &mut R, created_at: Instant) -> Self {
        let icons = (0..ICON_COUNT)
            .map(|i| FloatingIcon {
                glyph: GLYPHS[i % GLYPHS.len()],
                x_pct: rng.random_range(0.0..100.0),
                y_pct: rng.random_range(0.0..100.0),
                delay: Duration::from_secs_f32(rng.random_range(0.0..10.0)),
                duration: Duration::from_secs_f32(rng.random_range(15.0..30.0)),
            })
            .collect();
        Self { icons, created_at }
    }

    /// Startup task body: prepares the field off the update loop.
    pub async fn prepare() -> Self {
        Self::generate(&mut rand::rng(), Instant::now())
    }

    #[must_use]
    pub fn icons(&self) -> &[FloatingIcon] {
        &self.icons
    }

    pub fn view<'a, M: 'a>(&self, now: Instant, color: Color) -> Element<'a, M> {
        let program = DriftField {
            icons: self.icons.clone(),
            elapsed: now.saturating_duration_since(self.created_at),
            color: with_alpha(color, opacity::DECORATIVE),
        };
        Canvas::new(program)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

/// Canvas program drawing the drifting glyphs.
struct DriftField {
    icons: Vec<FloatingIcon>,
    elapsed: Duration,
    color: Color,
}

impl DriftField {
    /// Position of an icon inside `bounds` at the field's elapsed time.
    fn position(&self, icon: &FloatingIcon, bounds: Rectangle) -> Point {
        let base_x = bounds.width * icon.x_pct / 100.0;
        let base_y = bounds.height * icon.y_pct / 100.0;

        let active = self.elapsed.saturating_sub(icon.delay);
        if active.is_zero() {
            return Point::new(base_x, base_y);
        }
        let phase = (active.as_secs_f32() / icon.duration.as_secs_f32()).fract();
        let angle = phase * TAU;
        Point::new(
            base_x + angle.sin() * DRIFT_RADIUS_X,
            base_y + (angle * 2.0).cos() * DRIFT_RADIUS_Y,
        )
    }
}

impl<Message> canvas::Program<Message> for DriftField {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        for icon in &self.icons {
            frame.fill_text(Text {
                content: icon.glyph.to_owned(),
                position: self.position(icon, bounds),
                color: self.color,
                size: sizing::FLOATING_GLYPH.into(),
                ..Text::default()
            });
        }
        vec![frame.into_geometry()]
    }
}
