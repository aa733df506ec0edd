//! Directory listing for the rfd binary.
//!
//! [Listing] is the collaborator the entry model is built for: it reads the children of one
//! directory, builds an [Entry] per child, filters and sorts them, and renders the rows,
//! optionally prefixed with the mode and time columns and colored by classification.

use crate::config::{Config, TimeColumn};
use crate::core::{Entry, Formatter, Result as EntryResult, format_human_size};
use crate::utils::shorten_home_path;

use crossterm::style::{Stylize, style};
use tracing::warn;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Width of the mode column.
const MODE_WIDTH: usize = 10;
/// Width of a `YYYY-MM-DD HH:MM:SS` timestamp.
const TIME_WIDTH: usize = 19;

/// The sorted entries of one directory.
pub struct Listing {
    dir: PathBuf,
    entries: Vec<Entry>,
}

impl Listing {
    /// Reads `dir` and builds the filtered, sorted entry list.
    ///
    /// Children that vanish or cannot be stat'ed are kept and render as placeholder rows.
    ///
    /// # Errors
    /// Fails only if the directory itself cannot be read.
    pub fn load(dir: &Path, config: &Config) -> io::Result<Self> {
        let mut entries = Vec::with_capacity(256);

        for dir_entry in fs::read_dir(dir)? {
            let dir_entry = match dir_entry {
                Ok(e) => e,
                Err(e) => {
                    warn!(dir = %dir.display(), error = %e, "skipping unreadable directory entry");
                    continue;
                }
            };

            let name = match dir_entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    let lossy = raw.to_string_lossy().into_owned();
                    warn!(name = %lossy, "file name is not valid UTF-8");
                    lossy
                }
            };
            entries.push(Entry::new(dir, name));
        }

        let formatter = Formatter::new(config.general().show_hidden());
        formatter.filter_entries(&mut entries);
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.set_index(i);
        }

        Ok(Listing {
            dir: dir.to_path_buf(),
            entries,
        })
    }

    // Accessors

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Toggles the mark of the entry at `index` and returns its new mark glyph.
    pub fn toggle_mark(&mut self, index: usize) -> Option<&'static str> {
        self.entries.get_mut(index).map(Entry::toggle_mark)
    }

    pub fn marked(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_marked())
    }

    /// Sum of the byte sizes of all entries that could be stat'ed.
    pub fn total_size(&self) -> u64 {
        self.entries.iter().filter_map(|e| e.size().ok()).sum()
    }

    /// Writes the header, one row per entry, and the optional footer.
    pub fn render<W: Write>(&self, out: &mut W, config: &Config) -> io::Result<()> {
        writeln!(out, "{}:", shorten_home_path(&self.dir))?;

        for entry in &self.entries {
            let row = match render_row(entry, config) {
                Ok(row) => row,
                Err(e) => {
                    warn!(error = %e, "rendering placeholder row");
                    placeholder_row(entry, config)
                }
            };
            writeln!(out, "{}", row)?;
        }

        if config.display().footer() {
            writeln!(
                out,
                "{} entries, {} total",
                self.entries.len(),
                format_human_size(self.total_size())
            )?;
        }
        Ok(())
    }
}

fn time_of(entry: &Entry, column: TimeColumn) -> EntryResult<Option<String>> {
    Ok(match column {
        TimeColumn::Accessed => Some(entry.access_time_string()?),
        TimeColumn::Changed => Some(entry.change_time_string()?),
        TimeColumn::Modified => Some(entry.modify_time_string()?),
        TimeColumn::None => None,
    })
}

fn render_row(entry: &Entry, config: &Config) -> EntryResult<String> {
    let display = config.display();
    let mut row = String::new();

    if display.mode() {
        row.push_str(&entry.mode_string()?);
        row.push(' ');
    }
    if let Some(time) = time_of(entry, display.time())? {
        row.push_str(&format!("{:<TIME_WIDTH$} ", time));
    }
    row.push_str(&entry.to_line()?);

    if display.color() {
        let color = config.theme().color_for(entry.classification()?);
        Ok(style(row).with(color).to_string())
    } else {
        Ok(row)
    }
}

fn placeholder_row(entry: &Entry, config: &Config) -> String {
    let display = config.display();
    let mut row = String::new();

    if display.mode() {
        row.push_str(&"?".repeat(MODE_WIDTH));
        row.push(' ');
    }
    if display.time() != TimeColumn::None {
        row.push_str(&format!("{:<TIME_WIDTH$} ", "-"));
    }
    row.push_str(&entry.placeholder_line());
    row
}
