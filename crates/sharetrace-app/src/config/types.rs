//! Configuration types for sharetrace
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `UploadSettings`, `NarrativeSettings`, `UiSettings` - Sections

use serde::{Deserialize, Serialize};

/// Application settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub upload: UploadSettings,

    #[serde(default)]
    pub narrative: NarrativeSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Simulated upload behavior
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UploadSettings {
    /// Milliseconds between simulated progress ticks
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Upper bound (exclusive) of a single random progress increment
    #[serde(default = "default_max_increment")]
    pub max_increment: f64,

    /// Drive the phone's progress bar from the narrative scroll position
    /// instead of the timer
    #[serde(default = "default_true")]
    pub pace_with_narrative: bool,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            max_increment: default_max_increment(),
            pace_with_narrative: true,
        }
    }
}

/// Narrative scrolling behavior
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NarrativeSettings {
    /// Idle ticks after a manual scroll before snapping to the nearest slide
    #[serde(default = "default_snap_idle_ticks")]
    pub snap_idle_ticks: u32,

    /// Smooth scroll moves `remaining / divisor` rows per tick
    #[serde(default = "default_scroll_step_divisor")]
    pub scroll_step_divisor: u32,
}

impl Default for NarrativeSettings {
    fn default() -> Self {
        Self {
            snap_idle_ticks: default_snap_idle_ticks(),
            scroll_step_divisor: default_scroll_step_divisor(),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_key_hints: true,
        }
    }
}

fn default_tick_interval_ms() -> u64 {
    200
}

fn default_max_increment() -> f64 {
    15.0
}

fn default_snap_idle_ticks() -> u32 {
    6
}

fn default_scroll_step_divisor() -> u32 {
    3
}

fn default_true() -> bool {
    true
}
