//! Miscellaneous utility functions for rfd.
//!
//! This module holds the [cli] submodule for argument handling, the [logging] submodule
//! that installs the stderr log subscriber, and the [helpers] submodule, which provides
//! commonly used utilities such as:
//! - Color parsing for the theme
//! - Locating the home directory
//! - Shortening the home directory path to "~"

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{get_home, parse_color, shorten_home_path};
pub use logging::init_logging;
