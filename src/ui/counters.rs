// SPDX-License-Identifier: MPL-2.0
//! Animated statistic counters.
//!
//! Each counter runs from zero to its target exactly once, the first time
//! its row is at least half visible. Progress is eased (quartic ease-out)
//! over a fixed duration and the final sample snaps to the target so
//! floating-point drift never shows.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::easing::ease_out_quart;
use crate::ui::viewport::Viewport;
use iced::widget::{Column, Row, Text};
use iced::{Element, Length};
use std::time::{Duration, Instant};

pub const ANIMATION_DURATION: Duration = Duration::from_millis(2000);
/// A counter starts once its band is at least this visible.
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

/// One statistic: a target value and the label under it.
#[derive(Debug)]
pub struct Counter {
    label_key: &'static str,
    target: f64,
    started_at: Option<Instant>,
}

impl Counter {
    #[must_use]
    pub fn new(label_key: &'static str, target: f64) -> Self {
        Self {
            label_key,
            target,
            started_at: None,
        }
    }

    /// Starts the animation. At most once: later calls are ignored.
    pub fn trigger(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        match self.started_at {
            Some(start) => now.saturating_duration_since(start) < ANIMATION_DURATION,
            None => false,
        }
    }

    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    #[must_use]
    pub fn label_key(&self) -> &'static str {
        self.label_key
    }

    fn is_decimal(&self) -> bool {
        self.target.fract().abs() > f64::EPSILON
    }

    /// The eased value at `now`; exactly the target once finished.
    #[must_use]
    pub fn value_at(&self, now: Instant) -> f64 {
        let Some(start) = self.started_at else {
            return 0.0;
        };
        let elapsed = now.saturating_duration_since(start);
        if elapsed >= ANIMATION_DURATION {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / ANIMATION_DURATION.as_secs_f64();
        self.target * ease_out_quart(progress)
    }

    /// The display string at `now`: two decimals for fractional targets,
    /// floored integers otherwise.
    #[must_use]
    pub fn display(&self, now: Instant) -> String {
        let value = self.value_at(now);
        if self.is_decimal() {
            format!("{:.2}", value)
        } else {
            format!("{}", value.floor() as i64)
        }
    }
}

/// A counter plus the vertical band its row occupies on the page.
#[derive(Debug)]
struct StatEntry {
    counter: Counter,
    band_top: f32,
    band_height: f32,
}

/// The stats row of the about section.
#[derive(Debug, Default)]
pub struct CounterBoard {
    entries: Vec<StatEntry>,
}

impl CounterBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, counter: Counter, band_top: f32, band_height: f32) {
        self.entries.push(StatEntry {
            counter,
            band_top,
            band_height,
        });
    }

    /// The portfolio's four statistics, all sharing the stats row band.
    #[must_use]
    pub fn portfolio(band_top: f32, band_height: f32) -> Self {
        let mut board = Self::new();
        for (key, target) in [
            ("stat-years-label", 3.0),
            ("stat-projects-label", 50.0),
            ("stat-certs-label", 5.0),
            ("stat-uptime-label", 99.9),
        ] {
            board.add(Counter::new(key, target), band_top, band_height);
        }
        board
    }

    /// Triggers every counter whose band crosses the visibility threshold.
    /// Already-started counters are left alone.
    pub fn sync_visibility(&mut self, viewport: &Viewport, now: Instant) {
        for entry in &mut self.entries {
            let fraction = viewport.visible_fraction(entry.band_top, entry.band_height, 0.0);
            if fraction >= VISIBILITY_THRESHOLD {
                entry.counter.trigger(now);
            }
        }
    }

    #[must_use]
    pub fn any_animating(&self, now: Instant) -> bool {
        self.entries.iter().any(|e| e.counter.is_animating(now))
    }

    pub fn counters(&self) -> impl Iterator<Item = &Counter> {
        self.entries.iter().map(|e| &e.counter)
    }

    pub fn view<'a, M: 'a>(&'a self, i18n: &I18n, now: Instant) -> Element<'a, M> {
        let mut row = Row::new().spacing(spacing::XL).width(Length::Fill);
        for entry in &self.entries {
            let value = Text::new(entry.counter.display(now)).size(sizing::COUNTER_TEXT);
            let label = Text::new(i18n.tr(entry.counter.label_key())).size(typography::SMALL);
            row = row.push(
                Column::new()
                    .spacing(spacing::XXS)
                    .push(value)
                    .push(label)
                    .width(Length::FillPortion(1)),
            );
        }
        row.into()
    }
}
