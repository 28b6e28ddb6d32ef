//! Error types for the fsloc library.
//!
//! This module provides the error hierarchy for decode and resolution
//! failures, using `thiserror` for ergonomic error handling. The pure
//! algebra functions never fail; only the decode family and the
//! working-directory accessor can.

use std::fmt;

use thiserror::Error;

/// Result type alias for operations that may fail with an fsloc error.
///
/// # Examples
///
/// ```
/// use fsloc::{AbsFile, Result};
///
/// fn parse_config_path(input: &str) -> Result<AbsFile> {
///     AbsFile::decode(input)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The location shape a codec expected.
///
/// Used by [`Error::ShapeMismatch`] to name which codec rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// An absolute file location.
    AbsFile,
    /// An absolute directory location.
    AbsDir,
    /// A relative file location.
    RelFile,
    /// A relative directory location.
    RelDir,
    /// Any absolute location (file or directory).
    Abs,
    /// Any relative location (file or directory).
    Rel,
    /// Any file location (absolute or relative).
    File,
    /// Any directory location (absolute or relative).
    Dir,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AbsFile => write!(f, "absolute file"),
            Self::AbsDir => write!(f, "absolute directory"),
            Self::RelFile => write!(f, "relative file"),
            Self::RelDir => write!(f, "relative directory"),
            Self::Abs => write!(f, "absolute location"),
            Self::Rel => write!(f, "relative location"),
            Self::File => write!(f, "file location"),
            Self::Dir => write!(f, "directory location"),
        }
    }
}

/// The main error type for the fsloc library.
#[derive(Debug, Error)]
pub enum Error {
    /// A string's shape does not match the requested codec.
    #[error("cannot decode {input:?} as {expected}: {reason}")]
    ShapeMismatch {
        /// The offending input string.
        input: String,
        /// The shape the codec required.
        expected: Shape,
        /// A human-readable description of the mismatch.
        reason: String,
    },

    /// An empty string was given where a name or segment is required.
    #[error("empty input where a path is required")]
    EmptyInput,

    /// An invalid path segment was encountered.
    #[error("invalid segment {value:?}: {reason}")]
    InvalidSegment {
        /// The invalid segment value.
        value: String,
        /// The reason the segment is invalid.
        reason: String,
    },

    /// An invalid file extension was encountered.
    #[error("invalid extension {value:?}: {reason}")]
    InvalidExtension {
        /// The invalid extension value.
        value: String,
        /// The reason the extension is invalid.
        reason: String,
    },

    /// The current working directory could not be read.
    #[error("cannot determine current working directory: {source}")]
    EnvironmentUnavailable {
        /// The underlying error from the environment accessor.
        #[source]
        source: std::io::Error,
    },
}

impl From<crate::segment::InvalidSegmentError> for Error {
    fn from(err: crate::segment::InvalidSegmentError) -> Self {
        Self::InvalidSegment {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl From<crate::segment::InvalidExtensionError> for Error {
    fn from(err: crate::segment::InvalidExtensionError) -> Self {
        Self::InvalidExtension {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if the error is a shape mismatch.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::RelFile;
    ///
    /// let err = RelFile::decode("/etc/hosts").unwrap_err();
    /// assert!(err.is_shape_mismatch());
    /// ```
    #[must_use]
    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, Self::ShapeMismatch { .. })
    }

    /// Check if the error came from the environment accessor.
    #[must_use]
    pub fn is_environment(&self) -> bool {
        matches!(self, Self::EnvironmentUnavailable { .. })
    }
}
