// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown on the loading overlay.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

const RING_WIDTH: f32 = 4.0;
/// Fraction of the circle covered by the moving arc.
const ARC_SWEEP: f32 = 0.75;

/// Rotating loading ring.
pub struct Spinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl Spinner {
    /// Creates a spinner with the given color and rotation angle in radians.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    /// Wraps the spinner in a fixed-size Canvas widget.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - RING_WIDTH;

                // Faint full ring under the moving arc.
                let track = Path::circle(center, radius);
                frame.stroke(
                    &track,
                    Stroke::default().with_width(RING_WIDTH).with_color(Color {
                        a: 0.2,
                        ..self.color
                    }),
                );

                // The arc starts at the top and sweeps three quarters of
                // the circle, traced with short line segments.
                let start_angle = self.rotation - PI / 2.0;
                let sweep = TAU * ARC_SWEEP;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));
                let segments = 32;
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=segments {
                    let angle = start_angle + sweep * (i as f32 / segments as f32);
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(RING_WIDTH)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
