//! 当前区块判定与导航高亮

use std::time::Instant;

use crate::config::PortfolioConfig;
use crate::traits::PageSurface;
use crate::types::{ElementId, NavEntry, PageLayout, SectionMeasurement};
use crate::utils::Throttle;

/// Class marking the active nav link and the active section
pub const ACTIVE_CLASS: &str = "active";

/// Pick the section containing `scroll`
///
/// Each section covers `[top - offset, top - offset + height)`. Sections are
/// scanned in document order and the last match wins. With no match the
/// previous section is kept.
pub fn select_active_section(
    scroll: f64,
    offset: f64,
    measurements: &[SectionMeasurement],
    previous: Option<&ElementId>,
) -> Option<ElementId> {
    measurements
        .iter()
        .rev()
        .find(|m| {
            let top = m.rect.top - offset;
            scroll >= top && scroll < top + m.rect.height
        })
        .map(|m| m.id.clone())
        .or_else(|| previous.cloned())
}

/// View activation controller
///
/// Owns the section and nav link references; keeps exactly one nav link
/// highlighted once any section has been entered.
pub struct ViewActivationController {
    sections: Vec<ElementId>,
    nav_entries: Vec<NavEntry>,
    highlight_offset: f64,
    throttle: Throttle,
    active: Option<ElementId>,
}

impl ViewActivationController {
    #[must_use]
    pub fn new(layout: &PageLayout, config: &PortfolioConfig) -> Self {
        Self {
            sections: layout.sections.clone(),
            nav_entries: layout.nav_entries.clone(),
            highlight_offset: config.highlight_offset,
            throttle: Throttle::new(config.motion_throttle()),
            active: None,
        }
    }

    /// Currently active section; `None` before the first measurement
    pub fn active_section(&self) -> Option<&ElementId> {
        self.active.as_ref()
    }

    /// Nav link paired with the active section
    pub fn active_link(&self) -> Option<&ElementId> {
        let active = self.active.as_ref()?;
        self.nav_entries
            .iter()
            .find(|e| &e.target == active)
            .map(|e| &e.link)
    }

    /// Geometry of every section present on the page, in document order
    pub fn measure(&self, surface: &dyn PageSurface) -> Vec<SectionMeasurement> {
        self.sections
            .iter()
            .filter_map(|id| {
                surface.rect(id).map(|rect| SectionMeasurement {
                    id: id.clone(),
                    rect,
                })
            })
            .collect()
    }

    /// Scroll handler; skipped inside the throttle window
    ///
    /// Returns whether a refresh ran.
    pub fn on_scroll(&mut self, surface: &mut dyn PageSurface, now: Instant) -> bool {
        if !self.throttle.ready(now) {
            return false;
        }
        self.refresh(surface);
        true
    }

    /// Trailing pass for a scroll dropped by the throttle
    ///
    /// Called from the frame tick; reads the current offset once the window
    /// has closed. Returns whether a refresh ran.
    pub fn flush(&mut self, surface: &mut dyn PageSurface, now: Instant) -> bool {
        if !self.throttle.trailing(now) {
            return false;
        }
        self.refresh(surface);
        true
    }

    /// Recompute the active section and mirror it into the nav links
    pub fn refresh(&mut self, surface: &mut dyn PageSurface) -> Option<&ElementId> {
        let measurements = self.measure(surface);
        let next = select_active_section(
            surface.scroll_offset(),
            self.highlight_offset,
            &measurements,
            self.active.as_ref(),
        );

        if next != self.active {
            log::debug!(
                "Active section: {} -> {}",
                self.active.as_ref().map_or("none", ElementId::as_str),
                next.as_ref().map_or("none", ElementId::as_str)
            );
            self.active = next;
        }

        self.sync(surface);
        self.active.as_ref()
    }

    fn sync(&self, surface: &mut dyn PageSurface) {
        for entry in &self.nav_entries {
            surface.remove_class(&entry.link, ACTIVE_CLASS);
        }
        for section in &self.sections {
            surface.remove_class(section, ACTIVE_CLASS);
        }

        let Some(active) = &self.active else {
            return;
        };
        surface.add_class(active, ACTIVE_CLASS);
        for entry in self.nav_entries.iter().filter(|e| &e.target == active) {
            surface.add_class(&entry.link, ACTIVE_CLASS);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::test_utils::{standard_document, SECTION_HEIGHT};
    use crate::types::Rect;

    fn controller() -> ViewActivationController {
        ViewActivationController::new(&PageLayout::default(), &PortfolioConfig::default())
    }

    fn active_links(doc: &crate::Document) -> Vec<String> {
        doc.query_class(ACTIVE_CLASS)
            .into_iter()
            .map(|id| id.to_string())
            .filter(|id| id.starts_with("nav-"))
            .collect()
    }

    fn m(id: &str, top: f64, height: f64) -> SectionMeasurement {
        SectionMeasurement {
            id: ElementId::new(id),
            rect: Rect::new(top, height),
        }
    }

    #[test]
    fn nothing_active_before_measurement() {
        let c = controller();
        assert!(c.active_section().is_none());
        assert!(c.active_link().is_none());
    }

    #[test]
    fn top_of_page_activates_first_section() {
        let mut doc = standard_document();
        let mut c = controller();

        c.refresh(&mut doc);

        assert_eq!(c.active_section().map(ElementId::as_str), Some("home"));
        assert_eq!(active_links(&doc), vec!["nav-home"]);
    }

    #[test]
    fn offset_margin_activates_section_early() {
        let mut doc = standard_document();
        let mut c = controller();

        // about 从 SECTION_HEIGHT 开始，提前 150 激活
        doc.set_scroll_offset(SECTION_HEIGHT - 150.0);
        c.refresh(&mut doc);
        assert_eq!(c.active_section().map(ElementId::as_str), Some("about"));

        doc.set_scroll_offset(SECTION_HEIGHT - 151.0);
        c.refresh(&mut doc);
        assert_eq!(c.active_section().map(ElementId::as_str), Some("home"));
    }

    #[test]
    fn exactly_one_link_is_active() {
        let mut doc = standard_document();
        let mut c = controller();

        for step in 0..20 {
            doc.set_scroll_offset(f64::from(step) * 230.0);
            c.refresh(&mut doc);
            let links = active_links(&doc);
            assert_eq!(links.len(), 1, "scroll {}", doc.scroll_offset());
            assert_eq!(
                Some(links[0].as_str()),
                c.active_link().map(ElementId::as_str)
            );
        }
    }

    #[test]
    fn refresh_is_idempotent() {
        let mut doc = standard_document();
        let mut c = controller();
        doc.set_scroll_offset(SECTION_HEIGHT * 2.5);

        c.refresh(&mut doc);
        let first: Vec<_> = doc.query_class(ACTIVE_CLASS);
        c.refresh(&mut doc);
        let second: Vec<_> = doc.query_class(ACTIVE_CLASS);

        assert_eq!(first, second);
    }

    #[test]
    fn last_match_wins_on_overlap() {
        let sections = [m("a", 0.0, 1000.0), m("b", 200.0, 1000.0)];
        let active = select_active_section(500.0, 0.0, &sections, None);
        assert_eq!(active, Some(ElementId::new("b")));
    }

    #[test]
    fn previous_section_kept_in_gaps() {
        let sections = [m("a", 0.0, 100.0), m("b", 500.0, 100.0)];
        let previous = ElementId::new("a");

        let active = select_active_section(300.0, 0.0, &sections, Some(&previous));
        assert_eq!(active, Some(previous));

        assert_eq!(select_active_section(300.0, 0.0, &sections, None), None);
    }

    #[test]
    fn scroll_events_are_throttled() {
        let mut doc = standard_document();
        let mut c = controller();
        let t0 = Instant::now();

        assert!(c.on_scroll(&mut doc, t0));
        doc.set_scroll_offset(SECTION_HEIGHT * 3.0);
        assert!(!c.on_scroll(&mut doc, t0 + Duration::from_millis(5)));
        assert_eq!(c.active_section().map(ElementId::as_str), Some("home"));

        assert!(c.on_scroll(&mut doc, t0 + Duration::from_millis(16)));
        assert_eq!(c.active_section().map(ElementId::as_str), Some("skills"));
    }

    #[test]
    fn dropped_scroll_is_applied_after_the_window() {
        let mut doc = standard_document();
        let mut c = controller();
        let t0 = Instant::now();

        assert!(c.on_scroll(&mut doc, t0));
        doc.set_scroll_offset(SECTION_HEIGHT * 3.0);
        assert!(!c.on_scroll(&mut doc, t0 + Duration::from_millis(5)));

        assert!(!c.flush(&mut doc, t0 + Duration::from_millis(10)));
        assert_eq!(c.active_section().map(ElementId::as_str), Some("home"));

        assert!(c.flush(&mut doc, t0 + Duration::from_millis(16)));
        assert_eq!(c.active_section().map(ElementId::as_str), Some("skills"));
        assert_eq!(active_links(&doc), vec!["nav-skills"]);

        assert!(!c.flush(&mut doc, t0 + Duration::from_millis(40)));
    }
}
