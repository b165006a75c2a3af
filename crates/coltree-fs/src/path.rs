//! Item name to directory segment codec
//!
//! Item names are free text; directory names are not. [`sanitize`] maps a
//! name onto a single safe path segment and [`resolve_collision`] keeps
//! sibling segments unique. The escaped form is the canonical on-disk name:
//! nothing is unescaped on import.

use crate::{Error, Result};
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Escape written in place of `/`.
pub const SLASH_ESCAPE: &str = "_slash_";

/// Escape written in place of `\`.
pub const BACKSLASH_ESCAPE: &str = "_backslash_";

/// Suffix appended to the first duplicate sibling name.
pub const COPY_SUFFIX: &str = "-copy";

/// Turn an item name into a single filesystem segment.
///
/// Names containing a path separator are rejected with [`Error::UnsafeName`]
/// unless `substitute_slashes` is set, in which case each separator is
/// replaced with its escape sequence.
pub fn sanitize(name: &str, substitute_slashes: bool) -> Result<String> {
    validate_segment(name)?;

    if !name.contains(['/', '\\']) {
        return Ok(name.to_string());
    }
    if !substitute_slashes {
        return Err(Error::UnsafeName {
            name: name.to_string(),
        });
    }

    Ok(name
        .replace('/', SLASH_ESCAPE)
        .replace('\\', BACKSLASH_ESCAPE))
}

/// Pick a name for `candidate` that does not occur in `existing`.
///
/// The first duplicate becomes `<name>-copy`; later ones `<name>-copy-2`,
/// `<name>-copy-3` and so on.
pub fn resolve_collision<S: BuildHasher>(existing: &HashSet<String, S>, candidate: &str) -> String {
    if !existing.contains(candidate) {
        return candidate.to_string();
    }

    let mut resolved = format!("{candidate}{COPY_SUFFIX}");
    let mut counter = 2;
    while existing.contains(&resolved) {
        resolved = format!("{candidate}{COPY_SUFFIX}-{counter}");
        counter += 1;
    }
    resolved
}

/// Reject names that can never be one directory entry, whatever the escaping.
pub fn validate_segment(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "name is empty"
    } else if name == "." || name == ".." {
        "name refers to a relative directory"
    } else if name.contains('\0') {
        "name contains a NUL byte"
    } else {
        return Ok(());
    };

    Err(Error::InvalidName {
        name: name.to_string(),
        reason,
    })
}
