// SPDX-License-Identifier: MPL-2.0
//! Integration tests for the timed animations: the typing loop, the eased
//! counters, the smooth scroll, the contact form confirmation window, and
//! the loading overlay settle period.

use iced_folio::ui::contact_form;
use iced_folio::ui::counters::{Counter, ANIMATION_DURATION};
use iced_folio::ui::loading::{LoadingScreen, HOLD};
use iced_folio::ui::typing::TypingAnimation;
use iced_folio::ui::viewport::{ScrollAnimation, SMOOTH_SCROLL_DURATION};
use std::time::{Duration, Instant};

#[test]
fn typing_loop_reaches_the_second_phrase() {
    let mut typing = TypingAnimation::new(vec!["ab".to_string(), "xy".to_string()]);
    let t0 = Instant::now();
    typing.start(t0);
    assert_eq!(typing.visible_text(), "a");

    // a (t0), ab (+100ms), hold 2s, a (+2100ms), "" (+2150ms), hold 500ms,
    // x (+2650ms). A single late tick catches up through all of it.
    typing.tick(t0 + Duration::from_millis(2650));
    assert_eq!(typing.visible_text(), "x");
    assert_eq!(typing.phrase_index(), 1);
}

#[test]
fn integer_counters_land_exactly_on_their_target() {
    let mut counter = Counter::new("stat-projects-label", 42.0);
    let t0 = Instant::now();
    counter.trigger(t0);

    assert_eq!(counter.display(t0 + ANIMATION_DURATION), "42");
    // Well past the end the value stays pinned.
    assert_eq!(counter.display(t0 + ANIMATION_DURATION * 3), "42");
}

#[test]
fn decimal_counters_keep_two_decimals_throughout() {
    let mut counter = Counter::new("stat-uptime-label", 99.9);
    let t0 = Instant::now();
    counter.trigger(t0);

    let midway = counter.display(t0 + ANIMATION_DURATION / 2);
    assert!(midway.contains('.'));
    assert_eq!(counter.display(t0 + ANIMATION_DURATION), "99.90");
}

#[test]
fn counter_easing_decelerates() {
    let mut counter = Counter::new("stat-projects-label", 100.0);
    let t0 = Instant::now();
    counter.trigger(t0);

    let early = counter.value_at(t0 + ANIMATION_DURATION / 4);
    let late = counter.value_at(t0 + ANIMATION_DURATION * 3 / 4);
    // Ease-out: most of the distance is covered in the first half.
    assert!(early > 100.0 - late);
}

#[test]
fn smooth_scroll_finishes_exactly_on_target() {
    let t0 = Instant::now();
    let animation = ScrollAnimation::new(1200.0, 80.0, t0);

    assert_eq!(animation.offset_at(t0), 1200.0);
    assert!(!animation.is_finished(t0 + SMOOTH_SCROLL_DURATION / 2));
    assert_eq!(animation.offset_at(t0 + SMOOTH_SCROLL_DURATION), 80.0);
}

#[test]
fn contact_form_confirmation_lasts_three_seconds() {
    let mut form = contact_form::State::new();
    let t0 = Instant::now();
    form.update(contact_form::Message::NameChanged("Ada".into()), t0);
    form.update(contact_form::Message::Submit, t0);
    assert!(form.is_confirming());

    assert!(!form.tick(t0 + Duration::from_millis(2999)));
    assert!(form.tick(t0 + contact_form::CONFIRMATION_DURATION));
    assert!(!form.is_confirming());
    assert!(form.field_values().name.is_empty());
}

#[test]
fn loading_overlay_settles_before_hiding() {
    let mut screen = LoadingScreen::new();
    let t0 = Instant::now();

    // Resources take a while; the overlay stays up the whole time.
    assert!(!screen.tick(t0 + Duration::from_secs(4)));
    screen.resources_ready(t0 + Duration::from_secs(4));

    assert!(!screen.tick(t0 + Duration::from_secs(4) + HOLD - Duration::from_millis(1)));
    assert!(screen.tick(t0 + Duration::from_secs(4) + HOLD));
    assert!(!screen.is_visible());
}
