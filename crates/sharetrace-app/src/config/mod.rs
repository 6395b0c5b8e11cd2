//! Configuration file parsing for sharetrace
//!
//! Supports `<config_dir>/sharetrace/config.toml` or an explicit `--config`
//! path. Every field has a default, so an absent file is fine.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, load_settings, parse_settings, MIN_TICK_INTERVAL_MS};
pub use types::*;
