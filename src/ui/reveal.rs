// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered reveal states.
//!
//! Page elements register a vertical band and an optional delay. Once the
//! band is 10% visible (judged against a viewport shrunk 50px at the
//! bottom, so elements reveal slightly before they fully enter), the delay
//! starts; when it elapses the element is revealed. Reveals are one-shot:
//! scrolling an element back out never un-reveals it.

use crate::ui::viewport::Viewport;
use std::time::{Duration, Instant};

pub const VISIBILITY_THRESHOLD: f32 = 0.10;
pub const BOTTOM_MARGIN: f32 = 50.0;

/// Identifies a registered reveal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealId(usize);

#[derive(Debug)]
struct Entry {
    band_top: f32,
    band_height: f32,
    delay: Duration,
    triggered_at: Option<Instant>,
    revealed: bool,
}

#[derive(Debug, Default)]
pub struct RevealSet {
    entries: Vec<Entry>,
}

impl RevealSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element band; `delay` defaults to zero for elements
    /// that should reveal the moment they become visible.
    pub fn add(&mut self, band_top: f32, band_height: f32, delay: Duration) -> RevealId {
        self.entries.push(Entry {
            band_top,
            band_height,
            delay,
            triggered_at: None,
            revealed: false,
        });
        RevealId(self.entries.len() - 1)
    }

    /// Arms the delay of every entry whose band crossed the threshold.
    pub fn sync_visibility(&mut self, viewport: &Viewport, now: Instant) {
        for entry in &mut self.entries {
            if entry.triggered_at.is_some() {
                continue;
            }
            let fraction =
                viewport.visible_fraction(entry.band_top, entry.band_height, BOTTOM_MARGIN);
            if fraction >= VISIBILITY_THRESHOLD {
                entry.triggered_at = Some(now);
            }
        }
    }

    /// Reveals every armed entry whose delay has elapsed. Returns true if
    /// anything newly revealed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for entry in &mut self.entries {
            if entry.revealed {
                continue;
            }
            if let Some(triggered) = entry.triggered_at {
                if now.saturating_duration_since(triggered) >= entry.delay {
                    entry.revealed = true;
                    changed = true;
                }
            }
        }
        changed
    }

    #[must_use]
    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.entries.get(id.0).is_some_and(|e| e.revealed)
    }

    /// True while any armed entry is still waiting out its delay; the app
    /// keeps the timeout tick alive while this holds.
    #[must_use]
    pub fn any_pending(&self) -> bool {
        self.entries
            .iter()
            .any(|e| e.triggered_at.is_some() && !e.revealed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_immediately_with_zero_delay() {
        let mut set = RevealSet::new();
        let id = set.add(100.0, 200.0, Duration::ZERO);
        let t0 = Instant::now();

        set.sync_visibility(&Viewport::new(0.0, 800.0), t0);
        set.tick(t0);
        assert!(set.is_revealed(id));
    }

    #[test]
    fn delay_postpones_the_reveal() {
        let mut set = RevealSet::new();
        let id = set.add(100.0, 200.0, Duration::from_millis(300));
        let t0 = Instant::now();

        set.sync_visibility(&Viewport::new(0.0, 800.0), t0);
        set.tick(t0 + Duration::from_millis(100));
        assert!(!set.is_revealed(id));
        assert!(set.any_pending());

        set.tick(t0 + Duration::from_millis(300));
        assert!(set.is_revealed(id));
        assert!(!set.any_pending());
    }

    #[test]
    fn off_screen_entries_stay_hidden() {
        let mut set = RevealSet::new();
        let id = set.add(5000.0, 200.0, Duration::ZERO);
        let t0 = Instant::now();

        set.sync_visibility(&Viewport::new(0.0, 800.0), t0);
        set.tick(t0);
        assert!(!set.is_revealed(id));
    }

    #[test]
    fn bottom_margin_delays_elements_near_the_fold() {
        let mut set = RevealSet::new();
        // Band sits entirely inside the bottom 50px of the window.
        let id = set.add(760.0, 40.0, Duration::ZERO);
        let t0 = Instant::now();

        set.sync_visibility(&Viewport::new(0.0, 800.0), t0);
        set.tick(t0);
        assert!(!set.is_revealed(id));

        // After scrolling past the margin it reveals.
        set.sync_visibility(&Viewport::new(100.0, 800.0), t0);
        set.tick(t0);
        assert!(set.is_revealed(id));
    }

    #[test]
    fn reveal_is_one_shot() {
        let mut set = RevealSet::new();
        let id = set.add(100.0, 200.0, Duration::ZERO);
        let t0 = Instant::now();

        set.sync_visibility(&Viewport::new(0.0, 800.0), t0);
        set.tick(t0);
        assert!(set.is_revealed(id));

        // Scrolled far away and back: still revealed.
        set.sync_visibility(&Viewport::new(10_000.0, 800.0), t0);
        set.tick(t0);
        assert!(set.is_revealed(id));
    }

    #[test]
    fn ten_percent_visibility_is_enough() {
        let mut set = RevealSet::new();
        // 800px band; window shows its first 80px (exactly 10%).
        let id = set.add(720.0, 800.0, Duration::ZERO);
        let t0 = Instant::now();

        set.sync_visibility(&Viewport::new(0.0, 850.0), t0);
        set.tick(t0);
        assert!(set.is_revealed(id));
    }
}
