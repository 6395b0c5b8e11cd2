//! Settings loader for `config.toml`

use super::types::Settings;
use sharetrace_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "sharetrace";

/// Fastest ticker interval accepted from config
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Default config location: `<config_dir>/sharetrace/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, or the default location when `None`
///
/// A missing file, unreadable file or parse error falls back to defaults;
/// the problem is logged, never raised.
pub fn load_settings(path: Option<&Path>) -> Settings {
    let config_path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) => p,
            None => {
                debug!("No config directory on this platform, using defaults");
                return Settings::default();
            }
        },
    };

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Parse and sanitize settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings> {
    let settings: Settings =
        toml::from_str(content).map_err(|e| Error::config_invalid(e.to_string()))?;
    Ok(sanitize(settings))
}

/// Pull out-of-range values back into something the simulation can run with
fn sanitize(mut settings: Settings) -> Settings {
    if settings.upload.tick_interval_ms < MIN_TICK_INTERVAL_MS {
        warn!(
            "tick_interval_ms={} too small, using {}",
            settings.upload.tick_interval_ms, MIN_TICK_INTERVAL_MS
        );
        settings.upload.tick_interval_ms = MIN_TICK_INTERVAL_MS;
    }

    let inc = settings.upload.max_increment;
    if !inc.is_finite() || inc <= 0.0 || inc > 100.0 {
        warn!("max_increment={} out of range (0, 100], using 15", inc);
        settings.upload.max_increment = 15.0;
    }

    if settings.narrative.scroll_step_divisor == 0 {
        settings.narrative.scroll_step_divisor = 1;
    }

    settings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings(Some(&dir.path().join("nope.toml")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[upload]\npace_with_narrative = false\nmax_increment = 5.0\n\n[ui]\nshow_key_hints = false"
        )
        .unwrap();

        let settings = load_settings(Some(&path));
        assert!(!settings.upload.pace_with_narrative);
        assert_eq!(settings.upload.max_increment, 5.0);
        assert!(!settings.ui.show_key_hints);
    }

    #[test]
    fn test_load_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[upload\nbroken = ").unwrap();

        assert_eq!(load_settings(Some(&path)), Settings::default());
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        let err = parse_settings("upload = [").unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid { .. }));
    }

    #[test]
    fn test_sanitize_out_of_range_values() {
        let settings = parse_settings(
            "[upload]\ntick_interval_ms = 1\nmax_increment = -3.0\n[narrative]\nscroll_step_divisor = 0",
        )
        .unwrap();
        assert_eq!(settings.upload.tick_interval_ms, MIN_TICK_INTERVAL_MS);
        assert_eq!(settings.upload.max_increment, 15.0);
        assert_eq!(settings.narrative.scroll_step_divisor, 1);
    }

    #[test]
    fn test_default_config_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("sharetrace/config.toml"));
        }
    }
}
