//! Controller configuration
//!
//! Every field has a default, so a config file only needs the keys it
//! overrides. Durations are stored in milliseconds.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Tunables shared by all controllers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioConfig {
    /// Margin subtracted from a section's top when picking the active section
    pub highlight_offset: f64,
    /// Fixed header height subtracted from smooth-scroll targets
    pub header_height: f64,

    /// Visible ratio at which an element reveals
    pub reveal_threshold: f64,
    /// Bottom margin shrinking the visible band, so reveals fire slightly early
    pub reveal_bottom_margin: f64,
    pub reveal_stagger_ms: u64,
    pub reveal_transition_ms: u64,

    pub scroll_duration_ms: u64,

    /// Latency of the simulated contact backend
    pub submit_latency_ms: u64,
    /// Upper bound on any backend call; past it the submission fails
    pub submit_timeout_ms: u64,
    /// Time the success label stays before the button returns to idle
    pub success_reset_ms: u64,
    pub notification_ms: u64,

    /// Rate limit for scroll and pointer driven handlers
    pub motion_throttle_ms: u64,
    pub resize_debounce_ms: u64,

    /// Viewport width above which the cursor follower exists
    pub cursor_breakpoint: f64,
    pub navbar_scrolled_threshold: f64,
    pub scroll_top_threshold: f64,
    pub parallax_speed: f64,
    pub typewriter_step_ms: u64,
    pub preloader_delay_ms: u64,
    pub preloader_fade_ms: u64,

    /// Seed for the fallback avatar
    pub owner_name: String,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            highlight_offset: 150.0,
            header_height: 80.0,
            reveal_threshold: 0.1,
            reveal_bottom_margin: 50.0,
            reveal_stagger_ms: 100,
            reveal_transition_ms: 600,
            scroll_duration_ms: 1000,
            submit_latency_ms: 2000,
            submit_timeout_ms: 10_000,
            success_reset_ms: 3000,
            notification_ms: 5000,
            motion_throttle_ms: 16,
            resize_debounce_ms: 250,
            cursor_breakpoint: 768.0,
            navbar_scrolled_threshold: 100.0,
            scroll_top_threshold: 300.0,
            parallax_speed: 0.5,
            typewriter_step_ms: 50,
            preloader_delay_ms: 1000,
            preloader_fade_ms: 500,
            owner_name: "Portfolio Owner".to_string(),
        }
    }
}

impl PortfolioConfig {
    /// Parse a JSON config and check it
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CoreError::SerializationError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file
    pub fn load_from_path(path: &Path) -> CoreResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CoreError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Reject values no controller can work with
    pub fn validate(&self) -> CoreResult<()> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(CoreError::ConfigError(format!(
                "revealThreshold must be within [0, 1], got {}",
                self.reveal_threshold
            )));
        }

        let lengths = [
            ("highlightOffset", self.highlight_offset),
            ("headerHeight", self.header_height),
            ("revealBottomMargin", self.reveal_bottom_margin),
            ("cursorBreakpoint", self.cursor_breakpoint),
            ("navbarScrolledThreshold", self.navbar_scrolled_threshold),
            ("scrollTopThreshold", self.scroll_top_threshold),
            ("parallaxSpeed", self.parallax_speed),
        ];
        if let Some((name, value)) = lengths
            .iter()
            .find(|(_, v)| !v.is_finite() || *v < 0.0)
        {
            return Err(CoreError::ConfigError(format!(
                "{name} must be a non-negative number, got {value}"
            )));
        }

        if self.submit_timeout_ms == 0 {
            return Err(CoreError::ConfigError(
                "submitTimeoutMs must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }

    pub fn reveal_transition(&self) -> Duration {
        Duration::from_millis(self.reveal_transition_ms)
    }

    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms)
    }

    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }

    pub fn success_reset(&self) -> Duration {
        Duration::from_millis(self.success_reset_ms)
    }

    pub fn notification(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn motion_throttle(&self) -> Duration {
        Duration::from_millis(self.motion_throttle_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn typewriter_step(&self) -> Duration {
        Duration::from_millis(self.typewriter_step_ms)
    }

    pub fn preloader_delay(&self) -> Duration {
        Duration::from_millis(self.preloader_delay_ms)
    }

    pub fn preloader_fade(&self) -> Duration {
        Duration::from_millis(self.preloader_fade_ms)
    }
}
