//! The listing orchestrator for lsr.
//!
//! [list_path] is the composition root: it stats the argument, enumerates a
//! directory (or resolves a single non-directory entry), sorts the full set
//! by name, and drives the renderer over it. The enumeration root is passed
//! down explicitly, so nothing here mutates the process working directory
//! and calls are safe to repeat in a loop over multiple arguments.

use crate::core::error::{ListError, Result};
use crate::core::fm::{Entry, browse_dir};
use crate::core::formatter::{Renderer, sort_entries};

use std::fs;
use std::io::Write;
use std::path::Path;

/// The per-invocation listing options, supplied once and never mutated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    human: bool,
    long: bool,
    all: bool,
}

impl Options {
    pub fn new(human: bool, long: bool, all: bool) -> Self {
        Options { human, long, all }
    }

    /// Human-readable sizes (`-h`).
    #[inline]
    pub fn human(&self) -> bool {
        self.human
    }

    /// Long-format output (`-l`).
    #[inline]
    pub fn long(&self) -> bool {
        self.long
    }

    /// Include hidden entries (`-a`).
    #[inline]
    pub fn all(&self) -> bool {
        self.all
    }
}

/// Lists `path` to `out`.
///
/// A non-directory argument is rendered as a single entry named by the
/// argument text as given. A directory is enumerated, every child resolved,
/// the full unfiltered set sorted byte-wise by name, and each entry handed
/// to the renderer (which applies the hidden filter per entry).
pub fn list_path(path: &Path, renderer: &Renderer, out: &mut impl Write) -> Result<()> {
    let meta = fs::metadata(path).map_err(|e| ListError::from_io(path, e))?;

    if !meta.is_dir() {
        let entry = Entry::from_metadata(path.as_os_str().to_os_string(), &meta);
        write_entry(renderer, &entry, out)?;
        return Ok(());
    }

    let mut entries = browse_dir(path)?;
    sort_entries(&mut entries);

    for entry in &entries {
        write_entry(renderer, entry, out)?;
    }
    Ok(())
}

fn write_entry(renderer: &Renderer, entry: &Entry, out: &mut impl Write) -> Result<()> {
    if let Some(line) = renderer.render_line(entry)? {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
