//! Owner and group name resolution for lsr.
//!
//! Maps the numeric ids carried on an [Entry](crate::core::Entry) to the
//! display names in the platform identity database. A missing database
//! record is fatal for the invocation; a present record with an empty name
//! falls back to the bare numeric id.

use crate::core::error::{ListError, Result};

use uzers::{get_group_by_gid, get_user_by_uid};

use std::ffi::OsStr;

/// Maximum display width for owner and group names. Longer names are
/// truncated, not escaped or wrapped.
pub const NAME_WIDTH: usize = 25;

/// Looks up the display name for an owner id.
pub fn owner_name(uid: u32) -> Result<String> {
    let user = get_user_by_uid(uid).ok_or(ListError::UnknownUser(uid))?;
    Ok(bounded_name(user.name(), uid))
}

/// Looks up the display name for a group id.
pub fn group_name(gid: u32) -> Result<String> {
    let group = get_group_by_gid(gid).ok_or(ListError::UnknownGroup(gid))?;
    Ok(bounded_name(group.name(), gid))
}

/// Bounds a raw database name to [NAME_WIDTH] characters, substituting the
/// decimal id when the record carries an empty name.
fn bounded_name(name: &OsStr, id: u32) -> String {
    if name.is_empty() {
        return id.to_string();
    }
    name.to_string_lossy().chars().take(NAME_WIDTH).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn empty_name_falls_back_to_numeric_id() {
        assert_eq!(bounded_name(OsStr::new(""), 1042), "1042");
    }

    #[test]
    fn long_names_are_truncated() {
        let name = OsString::from("a".repeat(40));
        let bounded = bounded_name(&name, 0);
        assert_eq!(bounded.chars().count(), NAME_WIDTH);
    }

    #[test]
    fn short_names_pass_through() {
        assert_eq!(bounded_name(OsStr::new("daemon"), 1), "daemon");
    }

    #[test]
    fn current_user_resolves() -> Result<(), Box<dyn std::error::Error>> {
        let uid = uzers::get_current_uid();
        let name = owner_name(uid)?;
        assert!(!name.is_empty());
        Ok(())
    }
}
