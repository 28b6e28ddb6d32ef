//! The decode engine.
//!
//! [`analyze`] is the single entry point that classifies an input string
//! into one of the four location shapes. Every codec in the crate is built
//! on it: the typed `decode` functions run the analyzer and then reject any
//! shape they do not admit.
//!
//! # Classification
//!
//! 1. Absolute ⇔ the input starts with `/`.
//! 2. Directory ⇔ the input is `/`, ends with `/`, or (relative only)
//!    equals `.` or `./`; otherwise the input is a file candidate.
//! 3. A file candidate's last segment is split at its last qualifying dot
//!    (neither first nor last character). When no dot qualifies the input
//!    is reclassified as a directory: `/home` and `.gitignore` decode as
//!    directories, never as extensionless files. Extensionless files remain
//!    constructible through [`File::new`]; only the decode surface refuses
//!    to produce them.
//!
//! The accepted surface is looser than the canonical grammar: the leading
//! `./` on relative inputs is optional, the trailing `/` on directories is
//! optional (when the last segment is extensionless), and repeated slashes
//! are tolerated. `encode` always reproduces the canonical form.

use crate::error::{Error, Result, Shape};
use crate::file::File;
use crate::location::groups::Location;
use crate::location::types::{AbsDir, AbsFile, RelDir, RelFile};
use crate::path::{PathAbs, PathRel};
use crate::segment::Segment;

/// Classifies and parses a string into one of the four location shapes.
///
/// # Errors
///
/// Returns [`Error::EmptyInput`] for the empty string and
/// [`Error::InvalidSegment`] if a segment fails validation.
///
/// # Examples
///
/// ```
/// use fsloc::{analyze, Location};
///
/// assert!(matches!(analyze("/a/b.txt").unwrap(), Location::AbsFile(_)));
/// assert!(matches!(analyze("/a/b/").unwrap(), Location::AbsDir(_)));
/// assert!(matches!(analyze("a/b.txt").unwrap(), Location::RelFile(_)));
/// assert!(matches!(analyze(".").unwrap(), Location::RelDir(_)));
/// ```
pub fn analyze(input: &str) -> Result<Location> {
    if input.is_empty() {
        return Err(Error::EmptyInput);
    }

    let absolute = input.starts_with('/');
    let dir_marked = if absolute {
        input.ends_with('/')
    } else {
        input == "." || input.ends_with('/')
    };

    let mut body = input;
    if absolute {
        body = &body[1..];
    } else if body == "." {
        body = "";
    } else {
        body = body.strip_prefix("./").unwrap_or(body);
    }
    body = body.strip_suffix('/').unwrap_or(body);

    let mut segments = Vec::new();
    for raw in body.split('/') {
        if raw.is_empty() {
            // Tolerate repeated slashes on the decode surface.
            continue;
        }
        segments.push(Segment::new(raw)?);
    }

    let file = if dir_marked {
        None
    } else {
        // A file candidate without a qualifying dot in its last segment is
        // reclassified as a directory.
        let parsed = segments.last().and_then(File::from_segment);
        if parsed.is_some() {
            segments.pop();
        }
        parsed
    };

    let location = match (absolute, file) {
        (true, Some(file)) => Location::AbsFile(AbsFile::new(PathAbs::new(segments), file)),
        (true, None) => Location::AbsDir(AbsDir::new(PathAbs::new(segments))),
        (false, Some(file)) => Location::RelFile(RelFile::new(PathRel::new(segments), file)),
        (false, None) => Location::RelDir(RelDir::new(PathRel::new(segments))),
    };
    log::trace!("classified {input:?} as {}", location.shape());
    Ok(location)
}

/// Builds the error for a codec rejecting an analyzed shape.
pub(crate) fn shape_mismatch(input: &str, expected: Shape, actual: &Location) -> Error {
    Error::ShapeMismatch {
        input: input.to_string(),
        expected,
        reason: format!("input decodes as {}", actual.shape()),
    }
}
