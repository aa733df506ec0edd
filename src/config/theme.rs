//! Theme configuration options for rfd
//!
//! This module defines the `[theme]` table of the rfd.toml configuration file: one color
//! per entry [Classification]. The entry model only classifies, the theme decides the color.

use crate::core::Classification;
use crate::utils::parse_color;

use crossterm::style::Color;
use serde::Deserialize;

/// Theme configuration options
/// # Examples
/// ```toml
/// [theme]
/// directory = "blue"
/// executable = "#ff5f5f"
/// ```
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    #[serde(deserialize_with = "deserialize_color_field")]
    symlink: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    hidden: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    directory: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    executable: Color,
    #[serde(deserialize_with = "deserialize_color_field")]
    regular: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            symlink: Color::Magenta,
            hidden: Color::Green,
            directory: Color::Cyan,
            executable: Color::Red,
            regular: Color::White,
        }
    }
}

impl Theme {
    /// Color used for rows of the given classification.
    pub fn color_for(&self, class: Classification) -> Color {
        match class {
            Classification::Symlink => self.symlink,
            Classification::Hidden => self.hidden,
            Classification::Directory => self.directory,
            Classification::Executable => self.executable,
            Classification::Regular => self.regular,
        }
    }
}

fn deserialize_color_field<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(parse_color(&s))
}
