//! Entry resolution and directory enumeration for lsr.
//!
//! Provides the Entry struct, the one-stat-per-path resolver, and
//! [browse_dir], which enumerates a directory and resolves every child.
//! Entries are created here and owned by the listing orchestrator until
//! they have been rendered.

use crate::core::error::{ListError, Result};

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs::{self, Metadata};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

/// One resolved filesystem object's display-relevant metadata.
///
/// Immutable once built. All fields come from a single stat query; the
/// hidden flag is derived from the name (leading `.`).
#[derive(Debug, Clone)]
pub struct Entry {
    name: Box<OsStr>,
    hidden: bool,
    size: u64,
    hard_links: u64,
    uid: u32,
    gid: u32,
    mtime_secs: i64,
    mtime_nsecs: u32,
}

impl Entry {
    pub fn new(
        name: OsString,
        size: u64,
        hard_links: u64,
        uid: u32,
        gid: u32,
        mtime_secs: i64,
        mtime_nsecs: u32,
    ) -> Self {
        let hidden = name.as_bytes().first() == Some(&b'.');
        Entry {
            name: name.into_boxed_os_str(),
            hidden,
            size,
            hard_links,
            uid,
            gid,
            mtime_secs,
            mtime_nsecs,
        }
    }

    /// Builds an Entry from an already-fetched metadata record.
    pub fn from_metadata(name: OsString, meta: &Metadata) -> Self {
        Entry::new(
            name,
            meta.size(),
            meta.nlink(),
            meta.uid(),
            meta.gid(),
            meta.mtime(),
            meta.mtime_nsec() as u32,
        )
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn hard_links(&self) -> u64 {
        self.hard_links
    }

    #[inline]
    pub fn uid(&self) -> u32 {
        self.uid
    }

    #[inline]
    pub fn gid(&self) -> u32 {
        self.gid
    }

    #[inline]
    pub fn mtime_secs(&self) -> i64 {
        self.mtime_secs
    }

    #[inline]
    pub fn mtime_nsecs(&self) -> u32 {
        self.mtime_nsecs
    }
}

/// Resolves `path` into an Entry named `name` with one metadata query.
///
/// Symlinks are followed, matching the platform stat default. The returned
/// error distinguishes missing paths from denied ones.
pub fn resolve_entry(path: &Path, name: OsString) -> Result<Entry> {
    let meta = fs::metadata(path).map_err(|e| ListError::from_io(path, e))?;
    Ok(Entry::from_metadata(name, &meta))
}

/// Reads the contents of the provided directory and resolves each child
/// into an Entry. The returned vector is unsorted and unfiltered.
///
/// A child that fails to resolve aborts the enumeration; the caller treats
/// that as fatal for the listing.
pub fn browse_dir(root: &Path) -> Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(64);

    let dir = fs::read_dir(root).map_err(|e| ListError::from_io(root, e))?;
    for child in dir {
        let child = child.map_err(|e| ListError::from_io(root, e))?;
        let name = child.file_name();
        entries.push(resolve_entry(&root.join(&name), name)?);
    }
    Ok(entries)
}
