// SPDX-License-Identifier: MPL-2.0
//! Page sections and their vertical layout.
//!
//! The page is a fixed column of sections with design heights. The map
//! derived from those heights answers every scroll-position question: which
//! section is active, where an anchor jump should land, how tall the whole
//! page is.

use std::fmt;

/// Reading depth used when deciding the active section: a section counts
/// as active while this far below the scroll top falls inside it.
pub const ACTIVE_PROBE_OFFSET: f32 = 100.0;
/// Anchor jumps land this far above the section top, leaving room for the
/// fixed navigation bar.
pub const NAVBAR_ANCHOR_OFFSET: f32 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// Translation key of the navigation label.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Section::Home => "nav-home",
            Section::About => "nav-about",
            Section::Skills => "nav-skills",
            Section::Experience => "nav-experience",
            Section::Projects => "nav-projects",
            Section::Contact => "nav-contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy)]
struct Band {
    top: f32,
    height: f32,
}

/// Vertical layout of every section, in page order.
#[derive(Debug)]
pub struct SectionMap {
    bands: [Band; 6],
}

impl SectionMap {
    /// Builds the map by stacking the given heights in [`Section::ALL`]
    /// order.
    #[must_use]
    pub fn from_heights(heights: [f32; 6]) -> Self {
        let mut bands = [Band {
            top: 0.0,
            height: 0.0,
        }; 6];
        let mut top = 0.0;
        for (band, height) in bands.iter_mut().zip(heights) {
            *band = Band { top, height };
            top += height;
        }
        Self { bands }
    }

    /// The design layout of the portfolio page.
    #[must_use]
    pub fn portfolio() -> Self {
        Self::from_heights([760.0, 840.0, 900.0, 980.0, 1040.0, 720.0])
    }

    #[must_use]
    pub fn top(&self, section: Section) -> f32 {
        self.bands[index_of(section)].top
    }

    #[must_use]
    pub fn height(&self, section: Section) -> f32 {
        self.bands[index_of(section)].height
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.bands.iter().map(|b| b.height).sum()
    }

    /// The section whose band contains the probe point for `scroll_y`,
    /// or none when the probe falls past the last section.
    #[must_use]
    pub fn active_at(&self, scroll_y: f32) -> Option<Section> {
        let probe = scroll_y + ACTIVE_PROBE_OFFSET;
        Section::ALL.into_iter().find(|&section| {
            let band = self.bands[index_of(section)];
            probe >= band.top && probe < band.top + band.height
        })
    }

    /// Scroll offset an anchor jump to `section` should land on.
    #[must_use]
    pub fn anchor_target(&self, section: Section) -> f32 {
        (self.top(section) - NAVBAR_ANCHOR_OFFSET).max(0.0)
    }
}

fn index_of(section: Section) -> usize {
    match section {
        Section::Home => 0,
        Section::About => 1,
        Section::Skills => 2,
        Section::Experience => 3,
        Section::Projects => 4,
        Section::Contact => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_stack_in_page_order() {
        let map = SectionMap::from_heights([300.0, 500.0, 400.0, 400.0, 400.0, 400.0]);
        assert_eq!(map.top(Section::Home), 0.0);
        assert_eq!(map.top(Section::About), 300.0);
        assert_eq!(map.top(Section::Skills), 800.0);
        assert_eq!(map.total_height(), 2400.0);
    }

    #[test]
    fn probe_point_decides_the_active_section() {
        let map = SectionMap::from_heights([300.0, 500.0, 400.0, 400.0, 400.0, 400.0]);
        // Scroll 350 puts the probe at 450, inside the second band.
        assert_eq!(map.active_at(350.0), Some(Section::About));
        // Scroll 150 puts the probe at 250, still inside the first band.
        assert_eq!(map.active_at(150.0), Some(Section::Home));
    }

    #[test]
    fn band_edges_are_half_open() {
        let map = SectionMap::from_heights([300.0, 500.0, 400.0, 400.0, 400.0, 400.0]);
        // Probe exactly on the boundary belongs to the lower section.
        assert_eq!(map.active_at(200.0), Some(Section::About));
    }

    #[test]
    fn probe_past_the_last_section_finds_nothing() {
        let map = SectionMap::from_heights([100.0; 6]);
        assert_eq!(map.active_at(600.0), None);
    }

    #[test]
    fn anchor_targets_leave_room_for_the_bar() {
        let map = SectionMap::portfolio();
        assert_eq!(
            map.anchor_target(Section::About),
            map.top(Section::About) - NAVBAR_ANCHOR_OFFSET
        );
        // Never negative: the first section clamps to the very top.
        assert_eq!(map.anchor_target(Section::Home), 0.0);
    }
}
