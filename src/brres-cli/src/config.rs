//! Configuration management for brres CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Sort into category folders when neither --organize nor --flat is given
    pub organize: Option<bool>,
    /// Output directory used when --output is not given
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("brres");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Organize flag after applying command-line overrides
    ///
    /// Plain extraction is the default since classification costs an extra
    /// pass over every archive.
    pub fn resolve_organize(&self, organize: bool, flat: bool) -> bool {
        if organize {
            true
        } else if flat {
            false
        } else {
            self.organize.unwrap_or(false)
        }
    }

    /// Output directory after applying the command-line override
    ///
    /// Falls back to `<input stem>_extracted` beside the input.
    pub fn resolve_output_dir(&self, output: Option<&Path>, input: &Path) -> PathBuf {
        if let Some(dir) = output {
            return dir.to_path_buf();
        }
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }

        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "container".to_string());
        input.with_file_name(format!("{stem}_extracted"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            organize: Some(true),
            output_dir: Some(PathBuf::from("/data/brres")),
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_is_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "organize = \"maybe\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_resolve_organize() {
        let config = Config {
            organize: Some(true),
            output_dir: None,
        };
        assert!(config.resolve_organize(false, false));
        assert!(!config.resolve_organize(false, true));
        assert!(Config::default().resolve_organize(true, false));
        assert!(!Config::default().resolve_organize(false, false));
    }

    #[test]
    fn test_resolve_output_dir() {
        let input = Path::new("/games/stage01.bin");
        let config = Config::default();
        assert_eq!(
            config.resolve_output_dir(None, input),
            PathBuf::from("/games/stage01_extracted")
        );
        assert_eq!(
            config.resolve_output_dir(Some(Path::new("out")), input),
            PathBuf::from("out")
        );

        let config = Config {
            organize: None,
            output_dir: Some(PathBuf::from("/exports")),
        };
        assert_eq!(
            config.resolve_output_dir(None, input),
            PathBuf::from("/exports")
        );
    }
}
