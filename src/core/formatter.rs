//! Sorting and display formatting for directory entries in lsr.
//!
//! The [Renderer] struct holds the per-invocation listing options and turns
//! a resolved [Entry] into one output line (or filters it, for hidden
//! entries). Also provides the field formatters for sizes, modification
//! times, and center-padded columns.

use crate::core::error::{ListError, Result};
use crate::core::fm::Entry;
use crate::core::identity;
use crate::core::listing::Options;

use chrono::{Local, TimeZone};
use unicode_width::UnicodeWidthStr;

use std::os::unix::ffi::OsStrExt;

/// Field width for the hard-link count (right-aligned).
pub const LINKS_WIDTH: usize = 5;
/// Field width for owner and group names (center-padded).
pub const OWNER_WIDTH: usize = identity::NAME_WIDTH;
/// Field width for the size column (center-padded).
pub const SIZE_WIDTH: usize = 11;
/// Field width for the modification-time column (center-padded).
pub const TIME_WIDTH: usize = 12;

/// Cutoff for the recency-dependent time format. Six months, the same
/// constant `ls` uses.
pub const SIX_MONTHS_SECS: i64 = 15_780_000;

// Unit ladder for human-readable sizes, one step per division by 1024.
const SIZE_UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Renderer for listing lines, configured once per invocation.
pub struct Renderer {
    human: bool,
    long: bool,
    all: bool,
}

impl Renderer {
    pub fn new(options: &Options) -> Self {
        Renderer {
            human: options.human(),
            long: options.long(),
            all: options.all(),
        }
    }

    /// Renders one entry into an output line, without the terminator.
    ///
    /// Returns `None` when the entry is hidden and hidden entries are not
    /// being shown. The hidden filter lives here, at render time, so the
    /// caller always sorts the full enumeration first.
    pub fn render_line(&self, entry: &Entry) -> Result<Option<String>> {
        if entry.is_hidden() && !self.all {
            return Ok(None);
        }

        if !self.long {
            return Ok(Some(entry.name_str().into_owned()));
        }

        let owner = identity::owner_name(entry.uid())?;
        let group = identity::group_name(entry.gid())?;
        let size = format_size(entry.size(), self.human);
        let mtime = format_mtime(entry.mtime_secs(), entry.mtime_nsecs())?;

        let mut line = format!("{:>LINKS_WIDTH$} ", entry.hard_links());
        line.push_str(&center_to_width(&owner, OWNER_WIDTH));
        line.push(' ');
        line.push_str(&center_to_width(&group, OWNER_WIDTH));
        line.push(' ');
        line.push_str(&center_to_width(&size, SIZE_WIDTH));
        line.push(' ');
        line.push_str(&center_to_width(&mtime, TIME_WIDTH));
        line.push(' ');
        line.push_str(&entry.name_str());
        Ok(Some(line))
    }
}

/// Sorts entries in place by byte-wise lexicographic name order.
pub fn sort_entries(entries: &mut [Entry]) {
    entries.sort_by(|a, b| a.name().as_bytes().cmp(b.name().as_bytes()));
}

/// Formats a byte count for the size column.
///
/// Non-human mode is the plain decimal count. Human mode scales by powers
/// of 1024 through `B kB MB ... YB`, rendered as width-5 fixed point with
/// one fractional digit. The unit index is clamped at the last unit, so
/// values beyond the ladder stay in `YB` rather than indexing past it.
pub fn format_size(bytes: u64, human: bool) -> String {
    if !human {
        return bytes.to_string();
    }
    if bytes < 1024 {
        return format!("{bytes}B");
    }

    let mut scaled = bytes as f64;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }
    format!("{scaled:>5.1}{}", SIZE_UNITS[unit])
}

/// Formats a modification timestamp for the time column.
///
/// Timestamps within six months of now use `%b %d %R` (month, day, time);
/// anything older or further in the future uses `%Y %R` (year, time).
/// Conversion is to the local time zone; a timestamp outside the
/// representable range is a fatal error.
pub fn format_mtime(secs: i64, nsecs: u32) -> Result<String> {
    let stamp = Local
        .timestamp_opt(secs, nsecs)
        .earliest()
        .ok_or(ListError::TimeFormat {
            seconds: secs,
            nanos: nsecs,
        })?;

    let now = Local::now().timestamp();
    let pattern = if secs < now - SIX_MONTHS_SECS || secs > now + SIX_MONTHS_SECS {
        "%Y %R"
    } else {
        "%b %d %R"
    };
    Ok(stamp.format(pattern).to_string())
}

/// Center-pads `text` into a field of `width` display columns.
///
/// Left padding is half the slack; the right side gets the same, plus one
/// extra space when the width is odd. Over-wide text degrades to the
/// unpadded string (padding never goes negative).
pub fn center_to_width(text: &str, width: usize) -> String {
    let len = UnicodeWidthStr::width(text);
    let pad = (width as isize - len as isize) / 2;
    let left = pad.max(0) as usize;
    let right = (pad + (width % 2) as isize).max(0) as usize;

    let mut out = String::with_capacity(left + text.len() + right);
    out.push_str(&" ".repeat(left));
    out.push_str(text);
    out.push_str(&" ".repeat(right));
    out
}
