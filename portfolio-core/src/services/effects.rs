//! 装饰效果：视差、光标跟随、轨道图标、打字机、预加载遮罩
//!
//! 每次写入都从基础状态重新计算完整的 transform，不在旧值上追加。

use std::time::{Duration, Instant};

use crate::config::PortfolioConfig;
use crate::traits::PageSurface;
use crate::types::{ElementId, PageLayout};
use crate::utils::{Debounce, Throttle, TimerSlot};

pub const CURSOR_CLASS: &str = "custom-cursor";
const CURSOR_BASE_TRANSFORM: &str = "translate(-50%, -50%)";
const CURSOR_HOVER_SCALE: f64 = 1.5;

/// Parallax transform for the shape at `index`
pub fn parallax_transform(scroll: f64, speed: f64, index: usize) -> String {
    // 装饰图形数量很少，转换不会丢精度
    #[allow(clippy::cast_precision_loss)]
    let factor = (index + 1) as f64;
    let y = 0.0 - scroll * speed * factor;
    format!("translateY({y}px)")
}

/// Cursor follower transform at `scale`
pub fn cursor_transform(scale: f64) -> String {
    format!("{CURSOR_BASE_TRANSFORM} scale({scale})")
}

/// Preloader lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloaderPhase {
    /// Page not loaded yet
    Shown,
    /// Load seen; holding before the fade
    Holding,
    Fading,
    Removed,
}

/// Character-by-character text reveal
#[derive(Debug, Clone)]
struct Typewriter {
    target: ElementId,
    chars: Vec<char>,
    shown: usize,
    timer: TimerSlot,
}

impl Typewriter {
    fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }
}

/// Decorative effects controller
///
/// Nothing here has invariants beyond mirroring scroll and pointer state
/// into styles.
pub struct EffectsController {
    shape_class: String,
    orbit_icon_class: String,
    interactive_classes: Vec<String>,
    cursor: ElementId,
    preloader: ElementId,

    parallax_speed: f64,
    cursor_breakpoint: f64,
    typewriter_step: Duration,
    preloader_delay: Duration,
    preloader_fade: Duration,

    scroll_throttle: Throttle,
    pointer_throttle: Throttle,
    resize: Debounce,

    typewriter: Option<Typewriter>,
    preloader_phase: PreloaderPhase,
    preloader_timer: TimerSlot,
}

impl EffectsController {
    #[must_use]
    pub fn new(layout: &PageLayout, config: &PortfolioConfig) -> Self {
        Self {
            shape_class: layout.shape_class.clone(),
            orbit_icon_class: layout.orbit_icon_class.clone(),
            interactive_classes: layout.interactive_classes.clone(),
            cursor: layout.cursor.clone(),
            preloader: layout.preloader.clone(),
            parallax_speed: config.parallax_speed,
            cursor_breakpoint: config.cursor_breakpoint,
            typewriter_step: config.typewriter_step(),
            preloader_delay: config.preloader_delay(),
            preloader_fade: config.preloader_fade(),
            scroll_throttle: Throttle::new(config.motion_throttle()),
            pointer_throttle: Throttle::new(config.motion_throttle()),
            resize: Debounce::new(config.resize_debounce()),
            typewriter: None,
            preloader_phase: PreloaderPhase::Shown,
            preloader_timer: TimerSlot::new(),
        }
    }

    /// Startup: create the cursor follower on wide viewports
    pub fn init(&mut self, surface: &mut dyn PageSurface) {
        self.sync_cursor(surface);
        self.apply_parallax(surface);
    }

    // === Parallax ===

    /// Throttled scroll handler; returns whether the shapes were updated
    pub fn on_scroll(&mut self, surface: &mut dyn PageSurface, now: Instant) -> bool {
        if !self.scroll_throttle.ready(now) {
            return false;
        }
        self.apply_parallax(surface);
        true
    }

    pub fn apply_parallax(&self, surface: &mut dyn PageSurface) {
        let scroll = surface.scroll_offset();
        for (index, shape) in surface.query_class(&self.shape_class).iter().enumerate() {
            let transform = parallax_transform(scroll, self.parallax_speed, index);
            surface.set_style(shape, "transform", &transform);
        }
    }

    // === Cursor follower ===

    pub fn has_cursor(&self, surface: &dyn PageSurface) -> bool {
        surface.contains(&self.cursor)
    }

    /// Throttled pointer move; mirrors the viewport position into the follower
    pub fn on_pointer_move(
        &mut self,
        surface: &mut dyn PageSurface,
        x: f64,
        y: f64,
        now: Instant,
    ) -> bool {
        if !self.has_cursor(surface) || !self.pointer_throttle.ready(now) {
            return false;
        }
        surface.set_style(&self.cursor, "left", &format!("{x}px"));
        surface.set_style(&self.cursor, "top", &format!("{y}px"));
        true
    }

    /// Pointer entered `target`
    pub fn on_pointer_enter(&mut self, surface: &mut dyn PageSurface, target: &ElementId) {
        if surface.has_class(target, &self.orbit_icon_class) {
            surface.set_style(target, "animation-play-state", "paused");
        }
        if self.is_interactive(surface, target) && self.has_cursor(surface) {
            surface.set_style(
                &self.cursor,
                "transform",
                &cursor_transform(CURSOR_HOVER_SCALE),
            );
        }
    }

    /// Pointer left `target`
    pub fn on_pointer_leave(&mut self, surface: &mut dyn PageSurface, target: &ElementId) {
        if surface.has_class(target, &self.orbit_icon_class) {
            surface.set_style(target, "animation-play-state", "running");
        }
        if self.is_interactive(surface, target) && self.has_cursor(surface) {
            surface.set_style(&self.cursor, "transform", &cursor_transform(1.0));
        }
    }

    fn is_interactive(&self, surface: &dyn PageSurface, target: &ElementId) -> bool {
        self.interactive_classes
            .iter()
            .any(|class| surface.has_class(target, class))
    }

    /// Viewport resized; the follower is re-checked once resizing settles
    pub fn on_resize(&mut self, now: Instant) {
        self.resize.touch(now);
    }

    /// Create or remove the follower to match the viewport width
    fn sync_cursor(&mut self, surface: &mut dyn PageSurface) {
        let wide = surface.viewport().width > self.cursor_breakpoint;
        let exists = self.has_cursor(surface);

        if wide && !exists {
            if surface.create_element(&self.cursor, CURSOR_CLASS) {
                surface.set_style(&self.cursor, "transform", &cursor_transform(1.0));
                log::debug!("Cursor follower created");
            }
        } else if !wide && exists {
            surface.remove_element(&self.cursor);
            log::debug!("Cursor follower removed");
        }
    }

    // === Typewriter ===

    /// Start typing `text` into `target`, replacing any running typewriter
    pub fn start_typewriter(
        &mut self,
        surface: &mut dyn PageSurface,
        target: &ElementId,
        text: &str,
        now: Instant,
    ) {
        surface.set_text(target, "");
        let mut timer = TimerSlot::new();
        timer.schedule(now, Duration::ZERO);
        self.typewriter = Some(Typewriter {
            target: target.clone(),
            chars: text.chars().collect(),
            shown: 0,
            timer,
        });
    }

    pub fn is_typing(&self) -> bool {
        self.typewriter.as_ref().is_some_and(|t| !t.is_done())
    }

    fn step_typewriter(&mut self, surface: &mut dyn PageSurface, now: Instant) {
        let step = self.typewriter_step;
        let Some(tw) = self.typewriter.as_mut() else {
            return;
        };
        if !tw.timer.fire_if_due(now) || tw.is_done() {
            return;
        }

        tw.shown += 1;
        let text: String = tw.chars[..tw.shown].iter().collect();
        surface.set_text(&tw.target, &text);

        if tw.is_done() {
            self.typewriter = None;
        } else {
            tw.timer.schedule(now, step);
        }
    }

    // === Preloader ===

    pub fn preloader_phase(&self) -> PreloaderPhase {
        self.preloader_phase
    }

    /// Page finished loading: hold, fade, then remove the preloader
    pub fn on_load(&mut self, now: Instant) {
        if self.preloader_phase != PreloaderPhase::Shown {
            return;
        }
        self.preloader_phase = PreloaderPhase::Holding;
        self.preloader_timer.schedule(now, self.preloader_delay);
    }

    fn step_preloader(&mut self, surface: &mut dyn PageSurface, now: Instant) {
        if !self.preloader_timer.fire_if_due(now) {
            return;
        }
        match self.preloader_phase {
            PreloaderPhase::Holding => {
                surface.set_style(&self.preloader, "opacity", "0");
                self.preloader_phase = PreloaderPhase::Fading;
                self.preloader_timer.schedule(now, self.preloader_fade);
            }
            PreloaderPhase::Fading => {
                surface.remove_element(&self.preloader);
                self.preloader_phase = PreloaderPhase::Removed;
                log::debug!("Preloader removed");
            }
            PreloaderPhase::Shown | PreloaderPhase::Removed => {}
        }
    }

    // === Timers ===

    /// Fire every due continuation
    pub fn tick(&mut self, surface: &mut dyn PageSurface, now: Instant) {
        if self.scroll_throttle.trailing(now) {
            self.apply_parallax(surface);
        }
        if self.resize.fire(now) {
            self.sync_cursor(surface);
        }
        self.step_typewriter(surface, now);
        self.step_preloader(surface, now);
    }

    /// Whether any timer is still pending
    pub fn is_busy(&self) -> bool {
        self.scroll_throttle.is_pending()
            || self.resize.is_pending()
            || self.is_typing()
            || self.preloader_timer.is_pending()
    }
}
