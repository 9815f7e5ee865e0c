//! Core listing logic for lsr.
//!
//! This module contains the non-CLI "engine" pieces of the utility:
//! - [fm]: entry resolution and directory enumeration (see [Entry], [browse_dir]).
//! - [identity]: owner/group id to display-name resolution.
//! - [formatter]: size/time/column formatting and the line [Renderer].
//! - [listing]: the [list_path] orchestrator that ties the pipeline together.
//! - [error]: the fatal-error taxonomy shared by all of the above.
//!
//! Most callers will import [list_path], [Options], and [Renderer] from
//! this module.

pub mod error;
pub mod fm;
pub mod formatter;
pub mod identity;
pub mod listing;

pub use error::{ListError, Result};
pub use fm::{Entry, browse_dir, resolve_entry};
pub use formatter::{Renderer, center_to_width, format_mtime, format_size, sort_entries};
pub use identity::{group_name, owner_name};
pub use listing::{Options, list_path};
