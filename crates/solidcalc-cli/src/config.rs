//! Optional TOML configuration for display defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use serde::Deserialize;
use solidcalc::TessellationParams;

/// File read from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "solidcalc.toml";

/// Display and export defaults. Command-line flags override these.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Decimal places for printed results.
    pub precision: usize,
    /// Length unit label appended to results (`cm` prints `cm³` and `cm²`).
    pub unit: String,
    /// Segments around circular features in exported meshes.
    pub segments: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: 2,
            unit: "cm".to_string(),
            segments: 64,
        }
    }
}

impl Config {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid configuration")?;
        let max = TessellationParams::MAX_SEGMENTS;
        ensure!(
            (3..=max).contains(&config.segments),
            "segments must be between 3 and {max}, got {}",
            config.segments
        );
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read if present and defaults are used otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        };

        if !required && !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("in config {}", path.display()))?;
        tracing::info!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.precision, 2);
        assert_eq!(config.unit, "cm");
        assert_eq!(config.segments, 64);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml("unit = \"m\"\n").unwrap();
        assert_eq!(config.unit, "m");
        assert_eq!(config.precision, 2);
    }

    #[test]
    fn test_full_file() {
        let config = Config::from_toml("precision = 4\nunit = \"mm\"\nsegments = 128\n").unwrap();
        assert_eq!(
            config,
            Config {
                precision: 4,
                unit: "mm".to_string(),
                segments: 128,
            }
        );
    }

    #[test]
    fn test_segments_out_of_range_is_rejected() {
        assert!(Config::from_toml("segments = 2\n").is_err());
        let err = Config::from_toml("segments = 100000\n").unwrap_err();
        assert!(err.to_string().contains("between 3 and 1024"));
        assert_eq!(Config::from_toml("segments = 1024\n").unwrap().segments, 1024);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Config::from_toml("precison = 3\n").is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let missing = std::env::temp_dir().join("solidcalc-does-not-exist.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let path = std::env::temp_dir().join(format!("solidcalc-config-{}.toml", std::process::id()));
        fs::write(&path, "precision = 3\n").unwrap();
        let config = Config::load(Some(&path)).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config.precision, 3);
    }
}
