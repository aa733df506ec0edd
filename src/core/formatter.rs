//! Sorting, filtering, and attribute formatting for file entries in rfd.
//!
//! The [Formatter] struct holds the filtering rules read from the rfd.toml configuration
//! and prepares entry lists for the listing.
//!
//! The free functions format the individual attributes of an entry: the `ls -l` style
//! mode string, timestamps, the size column, and the name split into base name and extension.

use crate::core::Entry;
use crate::core::fs::FileSystem;

use chrono::{DateTime, Local};
use humansize::{DECIMAL, format_size};

use std::time::SystemTime;

const SETUID: u32 = 0o4000;
const SETGID: u32 = 0o2000;
const STICKY: u32 = 0o1000;

/// Placeholder for timestamps the platform did not report.
const MISSING: &str = "-";

/// Formatter struct to filter and sort entries based on user preferences.
pub struct Formatter {
    show_hidden: bool,
}

impl Formatter {
    pub fn new(show_hidden: bool) -> Self {
        Self { show_hidden }
    }

    /// Sorts the given entries in place: directories first, then by name.
    ///
    /// The sort is stable, so entries that compare equal keep their listing order.
    pub fn sort_entries<F: FileSystem>(&self, entries: &mut [Entry<F>]) {
        entries.sort();
    }

    /// Filters the given entries in place according to the formatter's settings, then sorts them.
    pub fn filter_entries<F: FileSystem>(&self, entries: &mut Vec<Entry<F>>) {
        entries.retain(|e| self.show_hidden || !e.is_hidden());
        self.sort_entries(entries);
    }
}

/// Formats permission bits in the classic `ls -l` layout, e.g. `drwxr-xr-x`.
///
/// Setuid and setgid overwrite the owner and group execute slots with `s` (directories)
/// or `S` (everything else), and the sticky bit overwrites the last slot with `t` or `T`.
/// The overwrite happens whether or not the execute bit underneath is set.
pub fn format_mode(mode: u32, is_dir: bool, is_symlink: bool) -> String {
    let first = if is_dir {
        'd'
    } else if is_symlink {
        'l'
    } else {
        '-'
    };
    let mut chars = [first, '-', '-', '-', '-', '-', '-', '-', '-', '-'];
    let shifts = [6, 3, 0];
    for (i, &shift) in shifts.iter().enumerate() {
        let base = 1 + i * 3;
        if (mode >> (shift + 2)) & 1 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1 != 0 {
            chars[base + 1] = 'w';
        }
        if (mode >> shift) & 1 != 0 {
            chars[base + 2] = 'x';
        }
    }

    let special = if is_dir { 's' } else { 'S' };
    if mode & SETUID != 0 {
        chars[3] = special;
    }
    if mode & SETGID != 0 {
        chars[6] = special;
    }
    if mode & STICKY != 0 {
        chars[9] = if is_dir { 't' } else { 'T' };
    }
    chars.iter().collect()
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS` in local time, or "-" if unknown.
pub fn format_file_time(time: Option<SystemTime>) -> String {
    time.map(|t| {
        let dt: DateTime<Local> = DateTime::from(t);
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    })
    .unwrap_or_else(|| MISSING.to_string())
}

/// Size column text: `<DIR>` for directories, the decimal byte count otherwise.
pub fn format_size_label(size: u64, is_dir: bool) -> String {
    if is_dir {
        "<DIR>".to_string()
    } else {
        size.to_string()
    }
}

/// Human readable decimal size, e.g. `1.50 kB`.
pub fn format_human_size(size: u64) -> String {
    format_size(size, DECIMAL)
}

/// Splits a file name into base name and extension.
///
/// The extension starts at the last dot and keeps it (`"a.tar.gz"` -> `("a.tar", ".gz")`).
/// Leading dots never start an extension, so `.bashrc`, `.` and `..` have none.
/// A trailing dot is an extension of its own: `"notes."` -> `("notes", ".")`.
pub fn split_extension(name: &str) -> (&str, &str) {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    match name[stem_start..].rfind('.') {
        Some(pos) => name.split_at(stem_start + pos),
        None => (name, ""),
    }
}
