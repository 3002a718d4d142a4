// SPDX-License-Identifier: MPL-2.0
//! Viewport model for scroll-driven behavior.
//!
//! Components never talk to the windowing system directly; they are handed
//! a `Viewport` snapshot (scroll offset plus visible height) and decide
//! from it whether an element band is visible. That keeps every
//! scroll-triggered component testable with synthetic viewports.

use crate::ui::easing::ease_out_quart;
use std::time::{Duration, Instant};

/// How long an animated (anchor or back-to-top) scroll takes.
pub const SMOOTH_SCROLL_DURATION: Duration = Duration::from_millis(600);

/// A snapshot of the page's visible window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Vertical scroll offset in pixels.
    pub offset: f32,
    /// Visible height in pixels.
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(offset: f32, height: f32) -> Self {
        Self { offset, height }
    }

    /// Fraction of the band `[top, top + height)` currently visible,
    /// with the visible window shrunk by `bottom_margin` pixels at its
    /// bottom edge. Returns `0.0` for degenerate bands.
    #[must_use]
    pub fn visible_fraction(&self, top: f32, height: f32, bottom_margin: f32) -> f32 {
        if height <= 0.0 {
            return 0.0;
        }
        let window_top = self.offset;
        let window_bottom = self.offset + (self.height - bottom_margin).max(0.0);

        let overlap_top = top.max(window_top);
        let overlap_bottom = (top + height).min(window_bottom);
        ((overlap_bottom - overlap_top) / height).clamp(0.0, 1.0)
    }
}

/// An in-flight eased scroll between two offsets.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant) -> Self {
        Self {
            from,
            to,
            started_at,
            duration: SMOOTH_SCROLL_DURATION,
        }
    }

    /// The eased offset at `now`. The final sample is exactly `to`.
    #[must_use]
    pub fn offset_at(&self, now: Instant) -> f32 {
        if self.is_finished(now) {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let eased = ease_out_quart(progress) as f32;
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }

    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}
