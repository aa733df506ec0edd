//! Filesystem boundary for entries.
//!
//! [Entry](crate::core::Entry) never touches `std::fs` directly. It asks a [FileSystem]
//! for an lstat snapshot, a link target, or file contents. Production code uses [LocalFs];
//! tests inject in-memory fakes to cover special bits and failures that are awkward to
//! reproduce on disk.

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Mask for the owner, group and other execute bits.
pub const EXEC_BITS: u32 = 0o111;
/// Mask for the permission and special (setuid, setgid, sticky) bits.
pub const PERMISSION_BITS: u32 = 0o7777;

/// Point-in-time lstat snapshot of a filesystem object.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stat {
    pub is_dir: bool,
    pub is_symlink: bool,
    pub is_executable: bool,
    pub size: u64,
    pub accessed: Option<SystemTime>,
    pub changed: Option<SystemTime>,
    pub modified: Option<SystemTime>,
    /// Low 12 mode bits. Zero on platforms without unix permissions.
    pub mode: u32,
}

impl Stat {
    /// Builds a snapshot from metadata obtained without following symlinks.
    pub fn from_metadata(md: &Metadata) -> Self {
        let file_type = md.file_type();
        let mode = permission_bits(md);

        Stat {
            is_dir: file_type.is_dir(),
            is_symlink: file_type.is_symlink(),
            is_executable: mode & EXEC_BITS != 0,
            size: md.len(),
            accessed: md.accessed().ok(),
            changed: change_time(md),
            modified: md.modified().ok(),
            mode,
        }
    }
}

/// The filesystem calls an entry depends on.
pub trait FileSystem {
    /// Stats `path` without following a trailing symlink.
    fn lstat(&self, path: &Path) -> io::Result<Stat>;

    /// Reads the raw target text of the symlink at `path`.
    fn read_link(&self, path: &Path) -> io::Result<PathBuf>;

    /// Reads the full contents of the file at `path`.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// [FileSystem] backed by the local disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn lstat(&self, path: &Path) -> io::Result<Stat> {
        fs::symlink_metadata(path).map(|md| Stat::from_metadata(&md))
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        fs::read_link(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn lstat(&self, path: &Path) -> io::Result<Stat> {
        (**self).lstat(path)
    }

    fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
        (**self).read_link(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

#[cfg(unix)]
fn permission_bits(md: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    md.permissions().mode() & PERMISSION_BITS
}

#[cfg(not(unix))]
fn permission_bits(md: &Metadata) -> u32 {
    // No unix mode bits here, approximate them from the read-only flag.
    if md.permissions().readonly() {
        0o444
    } else {
        0o666
    }
}

#[cfg(unix)]
fn change_time(md: &Metadata) -> Option<SystemTime> {
    use std::os::unix::fs::MetadataExt;
    use std::time::Duration;

    let secs = md.ctime();
    let nanos = u32::try_from(md.ctime_nsec()).ok()?;
    if secs >= 0 {
        SystemTime::UNIX_EPOCH.checked_add(Duration::new(secs.unsigned_abs(), nanos))
    } else {
        SystemTime::UNIX_EPOCH
            .checked_sub(Duration::from_secs(secs.unsigned_abs()))?
            .checked_add(Duration::from_nanos(u64::from(nanos)))
    }
}

#[cfg(not(unix))]
fn change_time(md: &Metadata) -> Option<SystemTime> {
    md.created().ok()
}
