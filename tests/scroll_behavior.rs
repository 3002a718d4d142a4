// SPDX-License-Identifier: MPL-2.0
//! Integration tests for scroll-position-driven behavior: active section
//! tracking, the navbar's scrolled style, the back-to-top control, and
//! visibility-triggered components.

use iced_folio::app::section::{Section, SectionMap, NAVBAR_ANCHOR_OFFSET};
use iced_folio::ui::counters::{Counter, CounterBoard};
use iced_folio::ui::reveal::RevealSet;
use iced_folio::ui::viewport::Viewport;
use iced_folio::ui::{back_to_top, navbar};
use std::time::{Duration, Instant};

#[test]
fn active_section_follows_the_reading_point() {
    // With a 300px section followed by a 500px one, scrolling to 350 puts
    // the reading point (scroll + 100) inside the second section.
    let map = SectionMap::from_heights([300.0, 500.0, 400.0, 400.0, 400.0, 400.0]);
    assert_eq!(map.active_at(350.0), Some(Section::About));
    assert_eq!(map.active_at(150.0), Some(Section::Home));
}

#[test]
fn navbar_switches_style_past_fifty_pixels() {
    let map = SectionMap::portfolio();
    let mut bar = navbar::State::new();

    bar.sync_scroll(0.0, &map);
    assert!(!bar.is_scrolled());
    bar.sync_scroll(50.0, &map);
    assert!(!bar.is_scrolled());
    bar.sync_scroll(51.0, &map);
    assert!(bar.is_scrolled());
}

#[test]
fn back_to_top_appears_past_five_hundred_pixels() {
    assert!(!back_to_top::visible(0.0));
    assert!(!back_to_top::visible(500.0));
    assert!(back_to_top::visible(500.5));
}

#[test]
fn anchor_jumps_leave_room_for_the_fixed_bar() {
    let map = SectionMap::portfolio();
    for section in Section::ALL {
        let target = map.anchor_target(section);
        assert!(target >= 0.0);
        if map.top(section) > NAVBAR_ANCHOR_OFFSET {
            assert_eq!(target, map.top(section) - NAVBAR_ANCHOR_OFFSET);
        }
    }
}

#[test]
fn counters_run_once_no_matter_how_often_their_row_passes_by() {
    let mut board = CounterBoard::new();
    board.add(Counter::new("stat-projects-label", 50.0), 1000.0, 100.0);
    let t0 = Instant::now();

    // Scroll the row into view, away, and back in.
    board.sync_visibility(&Viewport::new(900.0, 800.0), t0);
    board.sync_visibility(&Viewport::new(0.0, 800.0), t0 + Duration::from_secs(5));
    board.sync_visibility(&Viewport::new(900.0, 800.0), t0 + Duration::from_secs(10));

    // The animation finished long ago and never restarted.
    let counter = board.counters().next().expect("one counter registered");
    assert_eq!(counter.display(t0 + Duration::from_secs(10)), "50");
}

#[test]
fn reveals_survive_scrolling_away() {
    let mut set = RevealSet::new();
    let id = set.add(1000.0, 200.0, Duration::ZERO);
    let t0 = Instant::now();

    set.sync_visibility(&Viewport::new(900.0, 800.0), t0);
    set.tick(t0);
    assert!(set.is_revealed(id));

    set.sync_visibility(&Viewport::new(0.0, 800.0), t0);
    set.tick(t0 + Duration::from_secs(1));
    assert!(set.is_revealed(id));
}
