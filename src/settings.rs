use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR_NAME: &str = "snake-classic";
const SETTINGS_FILE_NAME: &str = "settings.json";

/// Failure loading the user settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User-tunable presentation settings.
///
/// Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Theme id looked up against the built-in palettes.
    pub theme: String,
    /// Whether the background grid dots are drawn.
    pub show_grid: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: "classic".to_owned(),
            show_grid: true,
        }
    }
}

/// Returns the platform-correct settings file path.
#[must_use]
pub fn settings_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SETTINGS_FILE_NAME);
    base
}

/// Loads settings from the default path.
///
/// Returns defaults when the file does not yet exist (first run). Returns
/// `Err` when the file exists but cannot be read or parsed, so the caller
/// can surface a warning before entering raw terminal mode.
pub fn load_settings() -> Result<Settings, SettingsError> {
    load_settings_from_path(&settings_path())
}

fn load_settings_from_path(path: &Path) -> Result<Settings, SettingsError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => return Err(e.into()),
    };

    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{load_settings_from_path, Settings};

    #[test]
    fn missing_file_yields_defaults() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let settings = load_settings_from_path(&path).expect("missing file should yield defaults");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn full_file_is_parsed() {
        let path = unique_test_path("full");
        write_test_file(&path, r#"{ "theme": "ocean", "show_grid": false }"#);

        let settings = load_settings_from_path(&path).expect("valid file should parse");
        assert_eq!(settings.theme, "ocean");
        assert!(!settings.show_grid);

        cleanup_test_path(&path);
    }

    #[test]
    fn partial_file_keeps_field_defaults() {
        let path = unique_test_path("partial");
        write_test_file(&path, r#"{ "theme": "neon" }"#);

        let settings = load_settings_from_path(&path).expect("partial file should parse");
        assert_eq!(settings.theme, "neon");
        assert!(settings.show_grid);

        cleanup_test_path(&path);
    }

    #[test]
    fn malformed_file_returns_error() {
        let path = unique_test_path("malformed");
        write_test_file(&path, "not-json");

        assert!(
            load_settings_from_path(&path).is_err(),
            "malformed file should return Err"
        );

        cleanup_test_path(&path);
    }

    fn write_test_file(path: &PathBuf, contents: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(path, contents).expect("test file write should succeed");
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("snake-classic-settings-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
