//! Configuration file support for persistent settings.
//!
//! Settings are read from `~/.config/folder-size/config.toml` (or the
//! platform-specific equivalent). Values in the file act as defaults that
//! CLI arguments override.
//!
//! # Layering
//!
//! The precedence order is: **CLI argument > config file > hardcoded default**.
//!
//! # Example config
//!
//! ```toml
//! dir = "~/Projects"
//! unit = "GB"
//! detail = true
//!
//! [scanning]
//! verbose = false
//! skip = [".git", "node_modules"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{error::UnitError, utils::SizeUnit};

/// Top-level configuration file structure.
///
/// All fields are `Option<T>` so that absent keys fall through to the
/// hardcoded defaults instead of overriding them.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Default directory to analyze
    pub dir: Option<PathBuf>,

    /// Default display unit (`"B"`, `"KB"`, `"MB"`, `"GB"`, `"TB"`)
    pub unit: Option<String>,

    /// Whether to print the per-extension breakdown by default
    pub detail: Option<bool>,

    /// Scanning options
    #[serde(default)]
    pub scanning: FileScanConfig,
}

/// Scanning options from the configuration file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct FileScanConfig {
    /// Whether to report skipped entries
    pub verbose: Option<bool>,

    /// Directory names to leave out of the scan
    pub skip: Option<Vec<PathBuf>>,
}

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

impl FileConfig {
    /// Returns the path where the configuration file is expected.
    ///
    /// `None` when the platform has no discoverable config directory.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("folder-size").join("config.toml"))
    }

    /// Load configuration from the default config file location.
    ///
    /// A missing file yields the default (empty) configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file exists but cannot be read
    /// - The config file exists but contains invalid TOML or unexpected fields
    pub fn load() -> anyhow::Result<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&path)
    }

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Failed to read config file at {}: {e}", path.display())
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse config file at {}: {e}", path.display())
        })?;

        Ok(config)
    }

    /// The configured unit, parsed.
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::Unknown`] when `unit` is set to something other
    /// than a supported symbol.
    pub fn unit(&self) -> Result<Option<SizeUnit>, UnitError> {
        self.unit.as_deref().map(str::parse::<SizeUnit>).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_file_config() {
        let config = FileConfig::default();

        assert!(config.dir.is_none());
        assert!(config.unit.is_none());
        assert!(config.detail.is_none());
        assert!(config.scanning.verbose.is_none());
        assert!(config.scanning.skip.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
dir = "~/Projects"
unit = "GB"
detail = true

[scanning]
verbose = true
skip = [".git", "node_modules"]
"#;

        let config: FileConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(config.dir, Some(PathBuf::from("~/Projects")));
        assert_eq!(config.unit, Some("GB".to_string()));
        assert_eq!(config.detail, Some(true));
        assert_eq!(config.scanning.verbose, Some(true));
        assert_eq!(
            config.scanning.skip,
            Some(vec![PathBuf::from(".git"), PathBuf::from("node_modules")])
        );
    }

    #[test]
    fn test_parse_partial_config() {
        let config: FileConfig = toml::from_str("unit = \"kb\"\n").unwrap();

        assert!(config.dir.is_none());
        assert!(config.detail.is_none());
        assert_eq!(config.unit().unwrap(), Some(SizeUnit::Kilobyte));
    }

    #[test]
    fn test_parse_empty_config() {
        let config: FileConfig = toml::from_str("").unwrap();

        assert!(config.dir.is_none());
        assert_eq!(config.unit().unwrap(), None);
    }

    #[test]
    fn test_malformed_config_errors() {
        let toml_content = r#"
[scanning]
verbose = "not_a_bool"
"#;
        assert!(toml::from_str::<FileConfig>(toml_content).is_err());
    }

    #[test]
    fn test_unknown_key_errors() {
        assert!(toml::from_str::<FileConfig>("units = \"MB\"\n").is_err());
    }

    #[test]
    fn test_invalid_unit_is_reported() {
        let config: FileConfig = toml::from_str("unit = \"PB\"\n").unwrap();
        assert_eq!(config.unit(), Err(UnitError::Unknown("PB".to_string())));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "detail = true\n[scanning]\nskip = [\"target\"]\n").unwrap();

        let config = FileConfig::load_from(&path).unwrap();

        assert_eq!(config.detail, Some(true));
        assert_eq!(config.scanning.skip, Some(vec![PathBuf::from("target")]));
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileConfig::load_from(&temp_dir.path().join("absent.toml"));

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .starts_with("Failed to read config file")
        );
    }

    #[test]
    fn test_config_path_returns_expected_suffix() {
        if let Some(p) = FileConfig::config_path() {
            assert!(p.ends_with(Path::new("folder-size").join("config.toml")));
        }
    }

    #[test]
    fn test_expand_tilde_with_home() {
        let expanded = expand_tilde(&PathBuf::from("~/Projects"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("Projects"));
        }
    }

    #[test]
    fn test_expand_tilde_bare() {
        let expanded = expand_tilde(&PathBuf::from("~"));

        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home);
        }
    }

    #[test]
    fn test_expand_tilde_no_effect_on_non_tilde() {
        let relative = PathBuf::from("some/relative/path");
        assert_eq!(expand_tilde(&relative), relative);

        let absolute = PathBuf::from("/usr/local/bin");
        assert_eq!(expand_tilde(&absolute), absolute);
    }
}
