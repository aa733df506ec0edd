//! Configuration module for rfd.
//!
//! Holds the sub-modules for the `rfd.toml` sections and the loader:
//! - [general]: which entries the listing includes
//! - [display]: which columns are rendered and how
//! - [theme]: palette mapping for each entry [Classification](crate::core::Classification)
//! - [load]: locating, parsing and generating `rfd.toml`

pub mod display;
pub mod general;
pub mod load;
pub mod theme;

pub use display::{Display, TimeColumn};
pub use general::General;
pub use load::Config;
pub use theme::Theme;
