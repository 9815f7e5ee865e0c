//! Error taxonomy for lsr.
//!
//! Every failure in the listing core is one of these variants. None of them
//! are recovered from locally: the core propagates with `?` and `main.rs`
//! prints the message as an `error: ...` diagnostic and exits with status 1.

use std::io;
use std::path::Path;

use thiserror::Error;

/// Result alias used throughout the listing core.
pub type Result<T, E = ListError> = std::result::Result<T, E>;

/// Represents all fatal conditions in the lsr core.
#[derive(Error, Debug)]
pub enum ListError {
    /// The path handed to the resolver does not exist.
    #[error("unable to open {path}: {source}")]
    NotFound {
        /// The path that failed to resolve.
        path: String,
        /// The underlying stat failure.
        source: io::Error,
    },

    /// The resolver was denied access to the path.
    #[error("unable to open {path}: {source}")]
    PermissionDenied {
        /// The path that failed to resolve.
        path: String,
        /// The underlying stat failure.
        source: io::Error,
    },

    /// Any other metadata or enumeration failure for a path.
    #[error("unable to read {path}: {source}")]
    Io {
        /// The path being read when the failure occurred.
        path: String,
        /// The underlying I/O failure.
        source: io::Error,
    },

    /// The identity database has no record for this owner id.
    #[error("failed to read uid {0}")]
    UnknownUser(u32),

    /// The identity database has no record for this group id.
    #[error("failed to read gid {0}")]
    UnknownGroup(u32),

    /// The modification timestamp cannot be represented in local time.
    #[error("cannot render timestamp {seconds}.{nanos:09}")]
    TimeFormat {
        /// Seconds since the epoch.
        seconds: i64,
        /// Sub-second component.
        nanos: u32,
    },

    /// Writing a rendered line to the output stream failed.
    #[error("unable to write listing: {0}")]
    Output(#[from] io::Error),
}

impl ListError {
    /// Classifies a stat/readdir failure for `path` into the taxonomy.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.display().to_string();
        match source.kind() {
            io::ErrorKind::NotFound => ListError::NotFound { path, source },
            io::ErrorKind::PermissionDenied => ListError::PermissionDenied { path, source },
            _ => ListError::Io { path, source },
        }
    }
}
