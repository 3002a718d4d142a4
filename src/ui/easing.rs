// SPDX-License-Identifier: MPL-2.0
//! Easing curves shared by the animated components.

/// Quartic ease-out: fast start, decelerating approach to the target.
///
/// Input outside `0.0..=1.0` is clamped, so callers can feed raw
/// elapsed/duration ratios without worrying about overshoot.
pub fn ease_out_quart(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(4)
}
