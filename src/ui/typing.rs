// SPDX-License-Identifier: MPL-2.0
//! Typed-text animation for the hero section.
//!
//! A small state machine cycles through a fixed phrase list, typing one
//! character per tick and deleting the phrase again before moving on. The
//! machine is advanced by deadline: the app's animation tick calls
//! [`TypingAnimation::tick`] and the machine steps whenever its next
//! deadline has passed. `halt()` stops it deterministically, which is what
//! the tests use instead of waiting on real timers.

use std::time::{Duration, Instant};

pub const TYPE_INTERVAL: Duration = Duration::from_millis(100);
pub const DELETE_INTERVAL: Duration = Duration::from_millis(50);
/// Pause with the full phrase on screen before deleting starts.
pub const HOLD_FULL: Duration = Duration::from_millis(2000);
/// Pause on the empty string before the next phrase starts typing.
pub const HOLD_EMPTY: Duration = Duration::from_millis(500);

/// The rotating hero taglines.
pub fn default_phrases() -> Vec<String> {
    [
        "DevSecOps Engineer",
        "DevOps Engineer",
        "Cloud Infrastructure Specialist",
        "CI/CD Architect",
        "Kubernetes Expert",
        "Automation Engineer",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
}

#[derive(Debug)]
pub struct TypingAnimation {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
    visible: String,
    next_step_at: Option<Instant>,
    running: bool,
}

impl TypingAnimation {
    /// Creates a stopped machine over the given phrase list.
    /// Empty phrase lists produce a machine that never runs.
    #[must_use]
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            deleting: false,
            visible: String::new(),
            next_step_at: None,
            running: false,
        }
    }

    /// Starts the loop; the first character appears immediately.
    pub fn start(&mut self, now: Instant) {
        if self.phrases.is_empty() || self.running {
            return;
        }
        self.running = true;
        self.next_step_at = Some(now);
        self.tick(now);
    }

    /// Stops the loop. There is no resume; the machine is single-shot
    /// per app lifetime, matching a page that never re-initializes.
    pub fn halt(&mut self) {
        self.running = false;
        self.next_step_at = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn visible_text(&self) -> &str {
        &self.visible
    }

    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Advances past every deadline that `now` has reached. Returns true
    /// if the visible text changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while self.running {
            let Some(deadline) = self.next_step_at else {
                break;
            };
            if now < deadline {
                break;
            }
            let delay = self.step();
            self.next_step_at = Some(deadline + delay);
            changed = true;
        }
        changed
    }

    /// One transition of the machine; returns the delay to the next step.
    fn step(&mut self) -> Duration {
        let phrase: Vec<char> = self.phrases[self.phrase_index].chars().collect();

        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(phrase.len());
        }
        self.visible = phrase[..self.char_index].iter().collect();

        let mut delay = if self.deleting {
            DELETE_INTERVAL
        } else {
            TYPE_INTERVAL
        };

        if !self.deleting && self.char_index == phrase.len() {
            delay = HOLD_FULL;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay = HOLD_EMPTY;
        }

        delay
    }
}
