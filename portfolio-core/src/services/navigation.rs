//! 导航：平滑滚动、移动端菜单、回到顶部

use std::time::{Duration, Instant};

use crate::config::PortfolioConfig;
use crate::error::{CoreError, CoreResult};
use crate::traits::PageSurface;
use crate::types::{ElementId, NavEntry, PageLayout};

/// Class toggled on the hamburger and the nav menu while the mobile menu is open
pub const MENU_OPEN_CLASS: &str = "active";

const NAVBAR_SCROLLED_BACKGROUND: &str = "rgba(26, 35, 126, 0.98)";
const NAVBAR_SCROLLED_SHADOW: &str = "0 2px 20px rgba(0, 0, 0, 0.1)";
const NAVBAR_RESTING_BACKGROUND: &str = "rgba(26, 35, 126, 0.95)";

/// Ease-in-out cubic over normalized time `t` in `[0, 1]`
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// One scroll animation from `from` to `to`
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    pub from: f64,
    pub to: f64,
    pub start: Instant,
    pub duration: Duration,
}

impl ScrollAnimation {
    /// Offset at `now`, and whether the animation is over
    ///
    /// Once elapsed time reaches the duration the exact target is returned.
    pub fn sample(&self, now: Instant) -> (f64, bool) {
        let elapsed = now.saturating_duration_since(self.start);
        if elapsed >= self.duration {
            return (self.to, true);
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        let progress = ease_in_out_cubic(t);
        (self.from + (self.to - self.from) * progress, false)
    }
}

/// Frame-stepped smooth scroller
///
/// Holds at most one animation. Starting a new one drops the old one, so a
/// superseded animation never writes another frame.
#[derive(Debug, Default)]
pub struct SmoothScroll {
    current: Option<ScrollAnimation>,
}

impl SmoothScroll {
    pub fn start(&mut self, from: f64, to: f64, now: Instant, duration: Duration) {
        self.current = Some(ScrollAnimation {
            from,
            to,
            start: now,
            duration,
        });
    }

    pub fn cancel(&mut self) {
        self.current = None;
    }

    pub fn is_running(&self) -> bool {
        self.current.is_some()
    }

    pub fn target(&self) -> Option<f64> {
        self.current.as_ref().map(|a| a.to)
    }

    /// Display-refresh tick: apply this frame's offset
    ///
    /// Returns the offset written, or `None` when idle.
    pub fn frame(&mut self, surface: &mut dyn PageSurface, now: Instant) -> Option<f64> {
        let animation = self.current.as_ref()?;
        let (offset, finished) = animation.sample(now);
        surface.set_scroll_offset(offset);
        if finished {
            self.current = None;
        }
        Some(offset)
    }
}

/// Navigation controller
///
/// Nav link clicks, the mobile menu and the scroll-to-top control.
pub struct NavigationController {
    entries: Vec<NavEntry>,
    navbar: ElementId,
    hamburger: ElementId,
    nav_menu: ElementId,
    scroll_to_top: ElementId,
    header_height: f64,
    navbar_threshold: f64,
    scroll_top_threshold: f64,
    duration: Duration,
    scroll: SmoothScroll,
}

impl NavigationController {
    #[must_use]
    pub fn new(layout: &PageLayout, config: &PortfolioConfig) -> Self {
        Self {
            entries: layout.nav_entries.clone(),
            navbar: layout.navbar.clone(),
            hamburger: layout.hamburger.clone(),
            nav_menu: layout.nav_menu.clone(),
            scroll_to_top: layout.scroll_to_top.clone(),
            header_height: config.header_height,
            navbar_threshold: config.navbar_scrolled_threshold,
            scroll_top_threshold: config.scroll_top_threshold,
            duration: config.scroll_duration(),
            scroll: SmoothScroll::default(),
        }
    }

    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    /// Section a nav link points at
    ///
    /// The link's `href` fragment wins; links without one fall back to the
    /// layout's pairing.
    pub fn resolve_target(&self, surface: &dyn PageSurface, link: &ElementId) -> Option<ElementId> {
        surface
            .attribute(link, "href")
            .and_then(|href| ElementId::from_fragment(&href))
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|e| &e.link == link)
                    .map(|e| e.target.clone())
            })
    }

    /// Nav link click: close the mobile menu and smooth scroll to the section
    ///
    /// Returns the scroll target.
    pub fn click_link(
        &mut self,
        surface: &mut dyn PageSurface,
        link: &ElementId,
        now: Instant,
    ) -> CoreResult<f64> {
        self.close_menu(surface);

        let target = self
            .resolve_target(surface, link)
            .ok_or_else(|| CoreError::ElementNotFound(link.to_string()))?;
        let rect = surface
            .rect(&target)
            .ok_or_else(|| CoreError::SectionNotFound(target.to_string()))?;

        let to = (rect.top - self.header_height).max(0.0);
        self.scroll_to(surface, to, now);
        log::debug!("Scrolling to section {target} at {to}");
        Ok(to)
    }

    /// Scroll-to-top control click
    pub fn scroll_to_top(&mut self, surface: &mut dyn PageSurface, now: Instant) {
        self.scroll_to(surface, 0.0, now);
    }

    fn scroll_to(&mut self, surface: &dyn PageSurface, to: f64, now: Instant) {
        self.scroll
            .start(surface.scroll_offset(), to, now, self.duration);
    }

    /// Frame tick; returns whether an animation is still running afterwards
    pub fn frame(&mut self, surface: &mut dyn PageSurface, now: Instant) -> bool {
        self.scroll.frame(surface, now);
        self.scroll.is_running()
    }

    /// User-driven scrolling takes over from any running animation
    pub fn interrupt(&mut self) {
        self.scroll.cancel();
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroll.is_running()
    }

    /// Scroll handler for the fixed chrome: navbar style and scroll-to-top visibility
    pub fn on_scroll(&self, surface: &mut dyn PageSurface) {
        let scroll = surface.scroll_offset();

        if scroll > self.navbar_threshold {
            surface.set_style(&self.navbar, "background", NAVBAR_SCROLLED_BACKGROUND);
            surface.set_style(&self.navbar, "box-shadow", NAVBAR_SCROLLED_SHADOW);
        } else {
            surface.set_style(&self.navbar, "background", NAVBAR_RESTING_BACKGROUND);
            surface.set_style(&self.navbar, "box-shadow", "none");
        }

        let (opacity, visibility) = if scroll > self.scroll_top_threshold {
            ("1", "visible")
        } else {
            ("0", "hidden")
        };
        surface.set_style(&self.scroll_to_top, "opacity", opacity);
        surface.set_style(&self.scroll_to_top, "visibility", visibility);
    }

    /// Hamburger click; returns whether the menu is open afterwards
    pub fn toggle_menu(&mut self, surface: &mut dyn PageSurface) -> bool {
        let open = surface.toggle_class(&self.hamburger, MENU_OPEN_CLASS);
        if open {
            surface.add_class(&self.nav_menu, MENU_OPEN_CLASS);
        } else {
            surface.remove_class(&self.nav_menu, MENU_OPEN_CLASS);
        }
        open
    }

    pub fn close_menu(&mut self, surface: &mut dyn PageSurface) {
        surface.remove_class(&self.hamburger, MENU_OPEN_CLASS);
        surface.remove_class(&self.nav_menu, MENU_OPEN_CLASS);
    }

    pub fn is_menu_open(&self, surface: &dyn PageSurface) -> bool {
        surface.has_class(&self.nav_menu, MENU_OPEN_CLASS)
    }
}
