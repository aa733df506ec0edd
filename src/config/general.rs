//! The general configuration settings for rfd.
//!
//! This module defines the [General] struct for deserializing
//! the `[general]` table of the rfd.toml configuration file.

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
}

impl Default for General {
    fn default() -> Self {
        General { show_hidden: true }
    }
}

impl General {
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }
}
