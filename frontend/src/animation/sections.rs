#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Portfolio,
    Services,
    Contact,
}

impl SectionId {
    /// Document order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Portfolio,
        SectionId::Services,
        SectionId::Contact,
    ];

    pub fn dom_id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Portfolio => "portfolio",
            SectionId::Services => "services",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Portfolio => "Portfolio",
            SectionId::Services => "Services",
            SectionId::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub id: SectionId,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section, in iteration order, whose `[top, top + height)` holds `probe`.
pub fn locate<I>(sections: I, probe: f64) -> Option<SectionId>
where
    I: IntoIterator<Item = Section>,
{
    sections
        .into_iter()
        .find(|section| section.contains(probe))
        .map(|section| section.id)
}

/// Tracks which section the navigation should highlight.
///
/// The active value is sticky: a probe that lands in a gap between sections,
/// or past the last one, leaves the previous selection in place.
#[derive(Clone, Debug)]
pub struct ActiveSectionTracker {
    bias: f64,
    active: SectionId,
}

impl ActiveSectionTracker {
    pub fn new(bias: f64) -> Self {
        Self {
            bias,
            active: SectionId::Home,
        }
    }

    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Returns the new section only when the selection changed.
    pub fn update<I>(&mut self, scroll_y: f64, sections: I) -> Option<SectionId>
    where
        I: IntoIterator<Item = Section>,
    {
        let found = locate(sections, scroll_y + self.bias)?;
        if found == self.active {
            return None;
        }
        self.active = found;
        Some(found)
    }
}

pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<Section> {
        vec![
            Section { id: SectionId::Home, top: 0.0, height: 800.0 },
            Section { id: SectionId::About, top: 800.0, height: 800.0 },
            Section { id: SectionId::Portfolio, top: 1600.0, height: 800.0 },
        ]
    }

    #[test]
    fn test_lookahead_moves_into_next_section() {
        let mut tracker = ActiveSectionTracker::new(100.0);
        // 750 + 100 = 850 is already inside `about`
        assert_eq!(tracker.update(750.0, layout()), Some(SectionId::About));
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_starts_on_home() {
        let mut tracker = ActiveSectionTracker::new(100.0);
        assert_eq!(tracker.active(), SectionId::Home);
        assert_eq!(tracker.update(0.0, layout()), None);
        assert_eq!(tracker.active(), SectionId::Home);
    }

    #[test]
    fn test_gap_keeps_previous_selection() {
        let sections = vec![
            Section { id: SectionId::Home, top: 0.0, height: 800.0 },
            Section { id: SectionId::About, top: 1000.0, height: 800.0 },
        ];
        let mut tracker = ActiveSectionTracker::new(100.0);
        tracker.update(1000.0, sections.clone());
        assert_eq!(tracker.active(), SectionId::About);

        // 750 + 100 = 850 falls between home and about
        assert_eq!(tracker.update(750.0, sections.clone()), None);
        assert_eq!(tracker.active(), SectionId::About);

        // past the end of the document
        assert_eq!(tracker.update(5000.0, sections), None);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_boundaries_are_half_open() {
        let mut tracker = ActiveSectionTracker::new(0.0);
        assert_eq!(tracker.update(800.0, layout()), Some(SectionId::About));
        assert_eq!(tracker.update(799.0, layout()), Some(SectionId::Home));
    }

    #[test]
    fn test_first_match_wins_on_overlap() {
        let sections = vec![
            Section { id: SectionId::Services, top: 0.0, height: 500.0 },
            Section { id: SectionId::Contact, top: 100.0, height: 500.0 },
        ];
        assert_eq!(locate(sections, 200.0), Some(SectionId::Services));
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let sections = vec![Section { id: SectionId::Contact, top: 2000.0, height: 600.0 }];
        let mut tracker = ActiveSectionTracker::new(100.0);
        assert_eq!(tracker.update(1950.0, sections), Some(SectionId::Contact));
    }

    #[test]
    fn test_scroll_top_threshold_is_strict() {
        assert!(!scroll_top_visible(300.0, 300.0));
        assert!(scroll_top_visible(300.5, 300.0));
        assert!(!scroll_top_visible(0.0, 300.0));
    }
}
