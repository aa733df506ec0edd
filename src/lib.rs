//! Library crate for rfd.
//!
//! The core of the crate is [core::Entry]: a cached snapshot of one filesystem object that
//! renders itself as a fixed-width, multi-byte aware row of a terminal file listing and
//! knows how it sorts against other entries.
//!
//! The `rfd` binary (`src/main.rs`) wires the entry model to a directory listing driven by
//! the [config] and [utils] modules.

pub mod app;
pub mod config;
pub mod core;
pub mod utils;
