//! Entrance reveal for animatable elements

use std::collections::HashSet;
use std::time::Duration;

use crate::config::PortfolioConfig;
use crate::traits::PageSurface;
use crate::types::{ElementId, PageLayout, Rect};

/// Class added once an element has revealed
pub const REVEALED_CLASS: &str = "revealed";

/// Pre-reveal vertical offset
const HIDDEN_TRANSFORM: &str = "translateY(30px)";
const SHOWN_TRANSFORM: &str = "translateY(0)";

/// Visible proportion of `rect` inside `[band_top, band_bottom)`
///
/// A zero-height element counts as fully visible while its top lies in the band.
pub fn intersection_ratio(rect: Rect, band_top: f64, band_bottom: f64) -> f64 {
    if rect.height <= 0.0 {
        return if rect.top >= band_top && rect.top < band_bottom {
            1.0
        } else {
            0.0
        };
    }
    let visible = rect.bottom().min(band_bottom) - rect.top.max(band_top);
    (visible / rect.height).clamp(0.0, 1.0)
}

/// Visibility watcher for entrance animations
///
/// Each element reveals at most once; after that it is dropped from the
/// watch list and never touched again.
pub struct RevealWatcher {
    classes: Vec<String>,
    threshold: f64,
    bottom_margin: f64,
    transition: Duration,
    stagger: Duration,
    pending: Vec<ElementId>,
    revealed: HashSet<ElementId>,
}

impl RevealWatcher {
    #[must_use]
    pub fn new(layout: &PageLayout, config: &PortfolioConfig) -> Self {
        Self {
            classes: layout.reveal_classes.clone(),
            threshold: config.reveal_threshold,
            bottom_margin: config.reveal_bottom_margin,
            transition: config.reveal_transition(),
            stagger: config.reveal_stagger(),
            pending: Vec::new(),
            revealed: HashSet::new(),
        }
    }

    /// Put every animatable element into its pre-reveal state and watch it
    ///
    /// The stagger delay grows with the element's index inside its group.
    /// Elements already watched or revealed are skipped. Returns how many
    /// were newly registered.
    pub fn register(&mut self, surface: &mut dyn PageSurface) -> usize {
        let mut added = 0;

        for class in &self.classes {
            for (index, id) in surface.query_class(class).into_iter().enumerate() {
                if self.revealed.contains(&id) || self.pending.contains(&id) {
                    continue;
                }

                let delay = self
                    .stagger
                    .saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
                let t = self.transition.as_millis();
                let d = delay.as_millis();

                surface.set_style(&id, "opacity", "0");
                surface.set_style(&id, "transform", HIDDEN_TRANSFORM);
                surface.set_style(
                    &id,
                    "transition",
                    &format!("opacity {t}ms ease {d}ms, transform {t}ms ease {d}ms"),
                );
                self.pending.push(id);
                added += 1;
            }
        }

        log::debug!("Reveal watcher registered {added} elements");
        added
    }

    /// Intersection tick: reveal every watched element that crossed the threshold
    ///
    /// Returns the newly revealed elements in registration order.
    pub fn observe(&mut self, surface: &mut dyn PageSurface) -> Vec<ElementId> {
        let band_top = surface.scroll_offset();
        let band_bottom = band_top + surface.viewport().height - self.bottom_margin;

        let mut newly = Vec::new();
        let threshold = self.threshold;

        self.pending.retain(|id| {
            let Some(rect) = surface.rect(id) else {
                // 元素已被移除，不再观察
                return false;
            };
            let ratio = intersection_ratio(rect, band_top, band_bottom);
            if ratio > 0.0 && ratio >= threshold {
                newly.push(id.clone());
                false
            } else {
                true
            }
        });

        for id in &newly {
            surface.set_style(id, "opacity", "1");
            surface.set_style(id, "transform", SHOWN_TRANSFORM);
            surface.add_class(id, REVEALED_CLASS);
            self.revealed.insert(id.clone());
        }

        newly
    }

    pub fn is_revealed(&self, id: &ElementId) -> bool {
        self.revealed.contains(id)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
