//! Centralized theme for the sharetrace TUI.
//!
//! This module provides:
//! - `palette`: raw color constants
//! - `styles`: semantic style builder functions

pub mod palette;
pub mod styles;
