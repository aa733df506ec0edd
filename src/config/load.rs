//! The main config loading module for rfd.
//!
//! Handles loading and deserializing settings from `rfd.toml`.
//!
//! Provides the main [Config] struct and the internal [RawConfig] used for parsing.
//! Also writes the default config file when `rfd --init` is run.

use crate::config::{Display, General, Theme};
use crate::utils::get_home;

use serde::Deserialize;
use tracing::{info, warn};

use std::{fs, io, path::Path, path::PathBuf};

/// Raw configuration as read from the toml file.
/// It is converted into the main [Config] struct after parsing.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct RawConfig {
    general: General,
    display: Display,
    theme: Theme,
}

/// Main configuration struct for rfd
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    general: General,
    display: Display,
    theme: Theme,
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            general: raw.general,
            display: raw.display,
            theme: raw.theme,
        }
    }
}

const DEFAULT_TOML: &str = r##"# rfd.toml - default configuration for rfd

# Note:
# Commented values are the internal defaults of rfd
# Use hex codes (eg. "#RRGGBB") or terminal colors ("cyan")

[general]
# show_hidden = true

[display]
# mode = true
# time = "modified"    # "modified", "accessed", "changed" or "none"
# color = true
# footer = true

[theme]
# symlink = "magenta"
# hidden = "green"
# directory = "cyan"
# executable = "red"
# regular = "white"
"##;

/// Public methods for loading and accessing the configuration
impl Config {
    /// Load configuration from the default path.
    /// If the file does not exist or fails to parse, returns the default configuration.
    pub fn load() -> Self {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from `path`, falling back to defaults on any problem.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            info!(
                path = %path.display(),
                "no rfd.toml found, using internal defaults (run 'rfd --init' to generate one)"
            );
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<RawConfig>(&content) {
                Ok(raw) => raw.into(),
                Err(e) => {
                    warn!(path = %path.display(), "error parsing config: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = %path.display(), "error reading config: {}", e);
                Self::default()
            }
        }
    }

    // Getters

    #[inline]
    pub fn general(&self) -> &General {
        &self.general
    }

    #[inline]
    pub fn display(&self) -> &Display {
        &self.display
    }

    #[inline]
    pub fn display_mut(&mut self) -> &mut Display {
        &mut self.display
    }

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Determine the default configuration file path.
    /// Checks the RFD_CONFIG environment variable first,
    /// Checks for XDG_CONFIG_HOME after,
    /// then defaults to ~/.config/rfd/rfd.toml,
    pub fn default_path() -> PathBuf {
        if let Ok(path) = std::env::var("RFD_CONFIG") {
            return PathBuf::from(path);
        }

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg_config).join("rfd/rfd.toml");
        }

        if let Some(home) = get_home() {
            return home.join(".config/rfd/rfd.toml");
        }
        PathBuf::from("rfd.toml")
    }

    /// Generate a default configuration file at the specified path.
    /// If the file already exists, returns an error.
    pub fn generate_default(path: &Path) -> io::Result<()> {
        if path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Config file already exists at {:?}", path),
            ));
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_TOML)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TimeColumn;
    use crate::core::Classification;

    use crossterm::style::Color;
    use tempfile::tempdir;

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::load_from(Path::new("/path/does/not/exist/rfd.toml"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn invalid_file_gives_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("rfd.toml");
        fs::write(&path, "[display\nmode = ")?;
        assert_eq!(Config::load_from(&path), Config::default());
        Ok(())
    }

    #[test]
    fn parses_all_sections() -> Result<(), Box<dyn std::error::Error>> {
        let raw: RawConfig = toml::from_str(
            r#"
            [general]
            show_hidden = false

            [display]
            time = "changed"
            color = false

            [theme]
            hidden = "gray"
            "#,
        )?;
        let config = Config::from(raw);
        assert!(!config.general().show_hidden());
        assert_eq!(config.display().time(), TimeColumn::Changed);
        assert!(!config.display().color());
        assert!(config.display().footer());
        assert_eq!(config.theme().color_for(Classification::Hidden), Color::Grey);
        Ok(())
    }

    #[test]
    fn generated_default_round_trips() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("nested/rfd.toml");
        Config::generate_default(&path)?;
        assert_eq!(Config::load_from(&path), Config::default());

        let err = Config::generate_default(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
        Ok(())
    }
}
