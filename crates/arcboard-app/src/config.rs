//! Application configuration.

use kurbo::Point;
use std::path::PathBuf;

/// Environment variable overriding [`AppConfig::export_dir`].
pub const ENV_EXPORT_DIR: &str = "ARCBOARD_EXPORT_DIR";
/// Environment variable that switches the export to single-line JSON.
pub const ENV_COMPACT: &str = "ARCBOARD_COMPACT";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory the export artifact is written to.
    pub export_dir: PathBuf,
    /// Two-space indented JSON (the download format) or a single line.
    pub pretty: bool,
    /// Screen position of the drawing surface's top-left corner. Script
    /// coordinates are screen coordinates relative to this origin; `None`
    /// means no surface is attached.
    pub surface_origin: Option<Point>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from("."),
            pretty: true,
            surface_origin: Some(Point::ZERO),
        }
    }
}

impl AppConfig {
    /// Defaults overridden from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = lookup(ENV_EXPORT_DIR).filter(|d| !d.trim().is_empty()) {
            config.export_dir = PathBuf::from(dir);
        }
        if let Some(compact) = lookup(ENV_COMPACT) {
            config.pretty = !is_truthy(&compact);
        }
        config
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert!(config.pretty);
        assert_eq!(config.export_dir, PathBuf::from("."));
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_EXPORT_DIR, "/tmp/boards"),
            (ENV_COMPACT, "TRUE"),
        ]));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/boards"));
        assert!(!config.pretty);
    }

    #[test]
    fn test_blank_and_falsy_values() {
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_EXPORT_DIR, "  "), (ENV_COMPACT, "0")]));
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert!(config.pretty);
    }
}
