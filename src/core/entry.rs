//! A single filesystem object as shown in one row of the listing.
//!
//! [Entry] is a point-in-time snapshot: the lstat result and the symlink target are fetched on
//! first use and cached for the lifetime of the value, failures included. Re-listing a
//! directory means constructing fresh entries.
//!
//! Memoization goes through [once_cell::unsync::OnceCell], so an entry can be moved to another
//! thread but not shared between threads. Build and query entries on as many threads as needed,
//! one thread per entry at a time.

use crate::core::error::{FilesystemError, Result};
use crate::core::formatter::{format_file_time, format_mode, format_size_label, split_extension};
use crate::core::fs::{FileSystem, LocalFs, Stat};
use crate::core::width::{
    ELLIPSIS, NAME_WIDTH, SIZE_WIDTH, display_width, pad_to_width, rjust, truncate_to_width,
};

use once_cell::unsync::OnceCell;
use tracing::{debug, trace};

use std::cmp::Ordering;
use std::fmt;
use std::path::{Path, PathBuf};

const MARKED: &str = "*";
const UNMARKED: &str = " ";

/// Highlight class of an entry. The renderer maps each class to a palette color.
///
/// Variants are listed in priority order: a hidden symlink is a [Classification::Symlink],
/// a hidden directory is [Classification::Hidden], and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    Symlink,
    Hidden,
    Directory,
    Executable,
    Regular,
}

/// One filesystem object in a directory listing.
#[derive(Debug, Clone)]
pub struct Entry<F: FileSystem = LocalFs> {
    dir: PathBuf,
    name: String,
    path: PathBuf,
    marked: bool,
    index: Option<usize>,
    fs: F,
    stat: OnceCell<Result<Stat>>,
    target: OnceCell<Result<Option<PathBuf>>>,
}

impl Entry<LocalFs> {
    /// Creates an entry for `name` inside `dir` without touching the disk.
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self::with_fs(dir, name, LocalFs)
    }

    /// Creates an entry and stats it right away.
    ///
    /// # Errors
    /// Returns [FilesystemError::Stat] if the entry is missing or cannot be stat'ed.
    pub fn open(dir: impl Into<PathBuf>, name: impl Into<String>) -> Result<Self> {
        let entry = Self::new(dir, name);
        entry.stat()?;
        Ok(entry)
    }
}

impl<F: FileSystem> Entry<F> {
    /// Creates an entry that resolves its attributes through `fs`.
    pub fn with_fs(dir: impl Into<PathBuf>, name: impl Into<String>, fs: F) -> Self {
        let dir = dir.into();
        let name = name.into();
        let path = dir.join(&name);
        Entry {
            dir,
            name,
            path,
            marked: false,
            index: None,
            fs,
            stat: OnceCell::new(),
            target: OnceCell::new(),
        }
    }

    // Accessors

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name without its extension.
    #[inline]
    pub fn basename(&self) -> &str {
        split_extension(&self.name).0
    }

    /// Extension including the leading dot, or "" if the name has none.
    #[inline]
    pub fn extension(&self) -> &str {
        split_extension(&self.name).1
    }

    /// Position of the entry in the caller's view, if one was assigned.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    #[inline]
    pub fn set_index(&mut self, index: usize) {
        self.index = Some(index);
    }

    /// Cached lstat snapshot, fetched on first call.
    ///
    /// # Errors
    /// Returns [FilesystemError::Stat] when the stat failed. The failure is cached as well.
    pub fn stat(&self) -> Result<&Stat> {
        self.stat
            .get_or_init(|| {
                trace!(path = %self.path.display(), "stat entry");
                self.fs.lstat(&self.path).map_err(|e| {
                    debug!(path = %self.path.display(), error = %e, "stat failed");
                    FilesystemError::stat(&self.path, e)
                })
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    // Classification

    pub fn is_dir(&self) -> Result<bool> {
        Ok(self.stat()?.is_dir)
    }

    pub fn is_symlink(&self) -> Result<bool> {
        Ok(self.stat()?.is_symlink)
    }

    pub fn is_executable(&self) -> Result<bool> {
        Ok(self.stat()?.is_executable)
    }

    /// Dot-files are hidden, except for `.` and `..`.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.') && self.name != "." && self.name != ".."
    }

    /// Byte size, 0 for directories.
    pub fn size(&self) -> Result<u64> {
        let stat = self.stat()?;
        Ok(if stat.is_dir { 0 } else { stat.size })
    }

    pub fn size_label(&self) -> Result<String> {
        Ok(format_size_label(self.size()?, self.is_dir()?))
    }

    /// Ten character `ls -l` style type and permission string.
    pub fn mode_string(&self) -> Result<String> {
        let stat = self.stat()?;
        Ok(format_mode(stat.mode, stat.is_dir, stat.is_symlink))
    }

    pub fn classification(&self) -> Result<Classification> {
        let stat = self.stat()?;
        Ok(if stat.is_symlink {
            Classification::Symlink
        } else if self.is_hidden() {
            Classification::Hidden
        } else if stat.is_dir {
            Classification::Directory
        } else if stat.is_executable {
            Classification::Executable
        } else {
            Classification::Regular
        })
    }

    /// Raw link text for symlinks, `None` for everything else.
    ///
    /// The target is not canonicalized and does not need to exist.
    ///
    /// # Errors
    /// Returns [FilesystemError::ReadLink] when the link cannot be read, or the cached stat
    /// failure.
    pub fn symlink_target(&self) -> Result<Option<&Path>> {
        if !self.is_symlink()? {
            return Ok(None);
        }
        self.target
            .get_or_init(|| match self.fs.read_link(&self.path) {
                Ok(target) => Ok(Some(target)),
                Err(e) => {
                    debug!(path = %self.path.display(), error = %e, "read_link failed");
                    Err(FilesystemError::read_link(&self.path, e))
                }
            })
            .as_ref()
            .map(Option::as_deref)
            .map_err(Clone::clone)
    }

    // Name rendering

    /// The name, followed by ` -> target` for symlinks.
    pub fn full_display_name(&self) -> Result<String> {
        match self.symlink_target()? {
            Some(target) => Ok(format!("{} -> {}", self.name, target.display())),
            None => Ok(self.name.clone()),
        }
    }

    /// The name as shown in the name column.
    ///
    /// Names wider than the column are cut down. Symlinks keep the head of
    /// `name -> target` at one cell less than the column. Other entries keep the head of the
    /// base name, an ellipsis, and the complete extension.
    pub fn display_name(&self) -> Result<String> {
        let full = self.full_display_name()?;
        if display_width(&full) <= NAME_WIDTH {
            return Ok(full);
        }

        let budget = NAME_WIDTH - 1;
        if self.is_symlink()? {
            return Ok(truncate_to_width(&full, budget).to_string());
        }

        let (base, ext) = split_extension(&self.name);
        // The extension is budgeted by character count, not by cells.
        let shortened = match budget.checked_sub(ext.chars().count()) {
            Some(base_budget) => {
                format!("{}{ELLIPSIS}{ext}", truncate_to_width(base, base_budget))
            }
            None => format!("{}{ELLIPSIS}", truncate_to_width(&self.name, budget)),
        };
        Ok(shortened)
    }

    /// Mark glyph, padded name column and right-justified size column.
    pub fn to_line(&self) -> Result<String> {
        let name = self.display_name()?;
        let size = self.size_label()?;
        Ok(format!(
            "{}{}{}",
            self.current_mark(),
            pad_to_width(&name, NAME_WIDTH),
            rjust(&size, SIZE_WIDTH)
        ))
    }

    /// Row used in place of [Entry::to_line] when the entry's attributes cannot be read.
    ///
    /// Renders the bare name and a `?` in the size column, without touching the disk.
    pub fn placeholder_line(&self) -> String {
        format!(
            "{}{}{}",
            self.current_mark(),
            pad_to_width(truncate_to_width(&self.name, NAME_WIDTH), NAME_WIDTH),
            rjust("?", SIZE_WIDTH)
        )
    }

    // Timestamps

    pub fn access_time_string(&self) -> Result<String> {
        Ok(format_file_time(self.stat()?.accessed))
    }

    pub fn change_time_string(&self) -> Result<String> {
        Ok(format_file_time(self.stat()?.changed))
    }

    pub fn modify_time_string(&self) -> Result<String> {
        Ok(format_file_time(self.stat()?.modified))
    }

    /// Reads the file contents. Not cached, every call goes to the filesystem.
    pub fn read_contents(&self) -> Result<Vec<u8>> {
        self.fs
            .read(&self.path)
            .map_err(|e| FilesystemError::read(&self.path, e))
    }

    // Marking

    /// Flips the mark and returns the new mark glyph.
    pub fn toggle_mark(&mut self) -> &'static str {
        self.marked = !self.marked;
        self.current_mark()
    }

    #[inline]
    pub fn is_marked(&self) -> bool {
        self.marked
    }

    /// `*` when marked, a space otherwise.
    #[inline]
    pub fn current_mark(&self) -> &'static str {
        if self.marked { MARKED } else { UNMARKED }
    }

    // Ordering

    /// Directories before everything else, then by name in code point order.
    ///
    /// # Errors
    /// Returns the stat failure of either entry.
    pub fn try_compare<G: FileSystem>(&self, other: &Entry<G>) -> Result<Ordering> {
        Ok(order(
            self.is_dir()?,
            &self.name,
            other.is_dir()?,
            &other.name,
        ))
    }

    /// Directory flag used by the infallible ordering. Entries that cannot be stat'ed sort as
    /// files; the cached failure keeps this stable across comparisons.
    fn sorts_as_dir(&self) -> bool {
        self.is_dir().unwrap_or(false)
    }
}

fn order(a_dir: bool, a_name: &str, b_dir: bool, b_name: &str) -> Ordering {
    match (a_dir, b_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a_name.cmp(b_name),
    }
}

impl<F: FileSystem> Ord for Entry<F> {
    fn cmp(&self, other: &Self) -> Ordering {
        order(
            self.sorts_as_dir(),
            &self.name,
            other.sorts_as_dir(),
            &other.name,
        )
    }
}

impl<F: FileSystem> PartialOrd for Entry<F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<F: FileSystem> PartialEq for Entry<F> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<F: FileSystem> Eq for Entry<F> {}

impl<F: FileSystem> fmt::Display for Entry<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_line() {
            Ok(line) => f.write_str(&line),
            Err(_) => f.write_str(&self.placeholder_line()),
        }
    }
}
