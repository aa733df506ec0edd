//! Display configuration options for rfd
//!
//! This module defines the display configuration options which are read from the rfd.toml
//! configuration file.

use serde::Deserialize;

/// Display configuration options
///
/// Controls the optional columns printed in front of each entry row, whether rows are
/// colored by their classification, and whether the summary footer is printed.
/// Default values are provided for all options so a partial `[display]` table is valid.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Display {
    mode: bool,
    time: TimeColumn,
    color: bool,
    footer: bool,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            mode: true,
            time: TimeColumn::Modified,
            color: true,
            footer: true,
        }
    }
}

/// Public methods for accessing display configuration options
impl Display {
    pub fn mode(&self) -> bool {
        self.mode
    }

    pub fn time(&self) -> TimeColumn {
        self.time
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn footer(&self) -> bool {
        self.footer
    }

    /// Turns off coloring, e.g. when stdout is not a terminal.
    pub fn disable_color(&mut self) {
        self.color = false;
    }
}

/// Which timestamp, if any, is shown in the time column.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TimeColumn {
    Accessed,
    Changed,
    #[default]
    Modified,
    None,
}
