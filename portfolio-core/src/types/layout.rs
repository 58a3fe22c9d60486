//! Fixed page structure the controllers query
//!
//! The markup is hand-authored; this names the elements and classes in it.

use serde::{Deserialize, Serialize};

use super::{ElementId, NavEntry};

/// Names of the elements and classes on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    /// Sections in document order
    pub sections: Vec<ElementId>,
    pub nav_entries: Vec<NavEntry>,
    pub navbar: ElementId,
    pub hamburger: ElementId,
    pub nav_menu: ElementId,

    /// Classes whose members get an entrance reveal
    pub reveal_classes: Vec<String>,

    pub submit_button: ElementId,
    pub submit_label: ElementId,
    pub submit_loader: ElementId,
    pub subject_field: ElementId,

    pub scroll_to_top: ElementId,
    pub cursor: ElementId,
    pub preloader: ElementId,
    pub hero_title: ElementId,
    pub profile_image: ElementId,
    pub shape_class: String,
    pub orbit_icon_class: String,
    /// Classes that enlarge the cursor follower on hover
    pub interactive_classes: Vec<String>,
}

impl Default for PageLayout {
    fn default() -> Self {
        let sections = [
            "home",
            "about",
            "experience",
            "skills",
            "certifications",
            "contact",
        ];

        Self {
            sections: sections.iter().map(|s| ElementId::new(*s)).collect(),
            nav_entries: sections
                .iter()
                .map(|s| NavEntry::new(format!("nav-{s}"), *s))
                .collect(),
            navbar: ElementId::new("navbar"),
            hamburger: ElementId::new("hamburger"),
            nav_menu: ElementId::new("navMenu"),
            reveal_classes: [
                "skill-card",
                "experience-card",
                "cert-card",
                "timeline-item",
                "highlight-item",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            submit_button: ElementId::new("submitButton"),
            submit_label: ElementId::new("submitText"),
            submit_loader: ElementId::new("submitLoader"),
            subject_field: ElementId::new("subject"),
            scroll_to_top: ElementId::new("scrollToTop"),
            cursor: ElementId::new("customCursor"),
            preloader: ElementId::new("preloader"),
            hero_title: ElementId::new("heroTitle"),
            profile_image: ElementId::new("profileImage"),
            shape_class: "shape".to_string(),
            orbit_icon_class: "orbit-icon".to_string(),
            interactive_classes: ["nav-link", "btn", "orbit-icon", "skill-card", "cert-card"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_has_a_nav_entry() {
        let layout = PageLayout::default();
        assert_eq!(layout.sections.len(), layout.nav_entries.len());
        for (section, entry) in layout.sections.iter().zip(&layout.nav_entries) {
            assert_eq!(section, &entry.target);
        }
    }
}
