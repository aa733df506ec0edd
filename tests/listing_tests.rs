//! Listing tests for rfd
//!
//! These tests drive the directory listing the `rfd` binary prints:
//! configuration-driven filtering, column layout, and placeholder rows.
//!
//! These tests create temporary directories and files which are cleaned up afterwards.

use rfd::app::Listing;
use rfd::config::{Config, load::RawConfig};
use rfd::core::{Entry, LINE_WIDTH, display_width};
use std::error;
use std::fs::{self, File};
use tempfile::tempdir;

fn config_from(toml_content: &str) -> Result<Config, Box<dyn error::Error>> {
    let raw: RawConfig = toml::from_str(toml_content)?;
    Ok(Config::from(raw))
}

#[test]
fn test_listing_hides_dotfiles_when_configured() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    File::create(dir.path().join(".secret"))?;
    File::create(dir.path().join("visible"))?;
    fs::create_dir(dir.path().join(".git"))?;

    let shown = Listing::load(dir.path(), &Config::default())?;
    assert_eq!(shown.len(), 3);

    let config = config_from(
        r#"
        [general]
        show_hidden = false
        "#,
    )?;
    let filtered = Listing::load(dir.path(), &config)?;
    let names: Vec<_> = filtered.entries().iter().map(Entry::name).collect();
    assert_eq!(names, ["visible"]);
    Ok(())
}

#[test]
fn test_listing_empty_dir() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    let config = config_from("[display]\ncolor = false\n")?;
    let listing = Listing::load(dir.path(), &config)?;
    assert!(listing.is_empty());

    let mut out = Vec::new();
    listing.render(&mut out, &config)?;
    let text = String::from_utf8(out)?;
    assert_eq!(text.lines().count(), 2);
    assert!(text.ends_with("0 entries, 0 B total\n"));
    Ok(())
}

#[test]
fn test_listing_row_layout_with_columns() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.txt"), "12345")?;

    let config = config_from(
        r#"
        [display]
        color = false
        footer = false
        mode = true
        time = "modified"
        "#,
    )?;
    let listing = Listing::load(dir.path(), &config)?;
    let mut out = Vec::new();
    listing.render(&mut out, &config)?;
    let text = String::from_utf8(out)?;

    let row = text.lines().nth(1).ok_or("missing row")?;
    // mode (10) + space + time (19) + space + entry line
    assert_eq!(display_width(row), 10 + 1 + 19 + 1 + LINE_WIDTH);
    assert!(row.ends_with("            5"));
    assert_eq!(&row[30..33], "  a");
    Ok(())
}

#[test]
fn test_listing_colors_rows() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    fs::create_dir(dir.path().join("sub"))?;

    let config = config_from(
        r#"
        [display]
        color = true
        footer = false
        "#,
    )?;
    let listing = Listing::load(dir.path(), &config)?;
    let mut out = Vec::new();
    listing.render(&mut out, &config)?;
    let text = String::from_utf8(out)?;
    // crossterm honors NO_COLOR and drops the escape codes.
    if std::env::var_os("NO_COLOR").is_some() {
        return Ok(());
    }
    assert!(text.contains('\u{1b}'), "expected ANSI color codes: {:?}", text);
    assert!(text.contains("<DIR>"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_listing_keeps_broken_symlinks() -> Result<(), Box<dyn error::Error>> {
    let dir = tempdir()?;
    std::os::unix::fs::symlink("missing-target", dir.path().join("dangling"))?;

    let config = config_from("[display]\ncolor = false\nfooter = false\n")?;
    let listing = Listing::load(dir.path(), &config)?;
    let mut out = Vec::new();
    listing.render(&mut out, &config)?;
    let text = String::from_utf8(out)?;
    assert!(text.contains("dangling -> missing-target"));
    assert!(text.contains("lrwx"));
    Ok(())
}

#[test]
fn test_listing_missing_dir() {
    let result = Listing::load(
        std::path::Path::new("/path/does/not/exist"),
        &Config::default(),
    );
    assert!(result.is_err());
}
