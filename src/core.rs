//! Core entry model for rfd.
//!
//! This module contains the non-UI pieces the listing is built from:
//! - [entry]: the [Entry] snapshot of one filesystem object, its [Classification] and ordering.
//! - [width]: cell-width arithmetic used to lay names out in a fixed-column grid.
//! - [formatter]: mode strings, timestamps, size labels, and entry filtering/sorting.
//! - [fs]: the [FileSystem] boundary entries resolve their attributes through.
//! - [error]: [FilesystemError], returned when one of those calls fails.
//!
//! Most callers will import [Entry], [Classification], and [FilesystemError] from this module.

pub mod entry;
pub mod error;
pub mod formatter;
pub mod fs;
pub mod width;

pub use entry::{Classification, Entry};
pub use error::{FilesystemError, Result};
pub use formatter::{
    Formatter, format_file_time, format_human_size, format_mode, format_size_label,
    split_extension,
};
pub use fs::{FileSystem, LocalFs, Stat};
pub use width::{
    ELLIPSIS, LINE_WIDTH, NAME_WIDTH, SIZE_WIDTH, char_width, display_width, pad_to_width,
    truncate_to_width,
};
