//! Error type for failures of the filesystem calls an [Entry](crate::core::Entry) delegates to.
//!
//! Sources are held behind an [Arc] because a failed stat or readlink is cached along with the
//! rest of the entry snapshot and handed out again on every later access.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FilesystemError>;

#[derive(Debug, Clone, Error)]
pub enum FilesystemError {
    #[error("cannot stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },
    #[error("cannot read link {}: {source}", .path.display())]
    ReadLink {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },
}

impl FilesystemError {
    pub(crate) fn stat(path: &Path, source: io::Error) -> Self {
        Self::Stat {
            path: path.to_path_buf(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn read_link(path: &Path, source: io::Error) -> Self {
        Self::ReadLink {
            path: path.to_path_buf(),
            source: Arc::new(source),
        }
    }

    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source: Arc::new(source),
        }
    }

    /// Path of the entry the failing call was made for.
    pub fn path(&self) -> &Path {
        match self {
            Self::Stat { path, .. } | Self::ReadLink { path, .. } | Self::Read { path, .. } => path,
        }
    }

    /// Kind of the underlying io error, e.g. to tell a vanished entry from a permission problem.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Stat { source, .. }
            | Self::ReadLink { source, .. }
            | Self::Read { source, .. } => source.kind(),
        }
    }
}
