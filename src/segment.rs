//! Path segment and extension primitives.
//!
//! This module provides the validated string primitives the rest of the
//! crate is built from: a [`Segment`] is one `/`-delimited path component,
//! and an [`Extension`] is a leading-dot file suffix.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One `/`-delimited path component.
///
/// A segment is a non-empty string that contains no `/`. The literal
/// parent-directory component `..` is a valid segment; relative paths may
/// carry it.
///
/// # Examples
///
/// ```
/// use fsloc::Segment;
///
/// let seg = Segment::new("home").unwrap();
/// assert_eq!(seg.as_str(), "home");
///
/// // Empty segments and segments containing '/' are rejected
/// assert!(Segment::new("").is_err());
/// assert!(Segment::new("a/b").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Segment(String);

impl Segment {
    /// The literal parent-directory segment (`..`).
    #[must_use]
    pub fn parent() -> Self {
        Self("..".to_string())
    }

    /// Creates a segment from a string, validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or contains `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::Segment;
    ///
    /// assert!(Segment::new("src").is_ok());
    /// assert!(Segment::new("..").is_ok());
    /// assert!(Segment::new("a/b").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidSegmentError> {
        let value = value.into();
        if value.is_empty() {
            return Err(InvalidSegmentError {
                value,
                reason: "segment must be non-empty".into(),
            });
        }
        if value.contains('/') {
            return Err(InvalidSegmentError {
                value,
                reason: "segment must not contain '/'".into(),
            });
        }
        Ok(Self(value))
    }

    /// Returns the segment as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the literal parent-directory segment `..`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::Segment;
    ///
    /// assert!(Segment::new("..").unwrap().is_parent());
    /// assert!(!Segment::new("up").unwrap().is_parent());
    /// ```
    #[must_use]
    pub fn is_parent(&self) -> bool {
        self.0 == ".."
    }

    /// Returns `true` if this is the literal current-directory segment `.`.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.0 == "."
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Segment {
    type Error = InvalidSegmentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Segment {
    type Error = InvalidSegmentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Segment> for String {
    fn from(segment: Segment) -> Self {
        segment.0
    }
}

/// Error type for invalid path segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSegmentError {
    /// The invalid segment value.
    pub value: String,
    /// The reason the segment is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidSegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid segment {:?}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidSegmentError {}

/// A file extension, stored with its leading dot.
///
/// An extension is at least two characters (`.` plus one), starts with `.`,
/// and contains no `/`.
///
/// # Examples
///
/// ```
/// use fsloc::Extension;
///
/// let ext = Extension::new(".txt").unwrap();
/// assert_eq!(ext.as_str(), ".txt");
/// assert_eq!(ext.without_dot(), "txt");
///
/// assert!(Extension::new("txt").is_err());
/// assert!(Extension::new(".").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Extension(String);

impl Extension {
    /// Creates an extension from a string, validating it.
    ///
    /// The string must include the leading dot.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not start with `.`, is shorter
    /// than two characters, or contains `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::Extension;
    ///
    /// assert!(Extension::new(".rs").is_ok());
    /// assert!(Extension::new(".tar.gz").is_ok());
    /// assert!(Extension::new("rs").is_err());
    /// ```
    pub fn new(value: impl Into<String>) -> Result<Self, InvalidExtensionError> {
        let value = value.into();
        if !value.starts_with('.') {
            return Err(InvalidExtensionError {
                value,
                reason: "extension must start with '.'".into(),
            });
        }
        if value.len() < 2 {
            return Err(InvalidExtensionError {
                value,
                reason: "extension must have at least one character after the dot".into(),
            });
        }
        if value.contains('/') {
            return Err(InvalidExtensionError {
                value,
                reason: "extension must not contain '/'".into(),
            });
        }
        Ok(Self(value))
    }

    /// Returns the extension as a string slice, including the leading dot.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the extension without its leading dot.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::Extension;
    ///
    /// let ext = Extension::new(".json").unwrap();
    /// assert_eq!(ext.without_dot(), "json");
    /// ```
    #[must_use]
    pub fn without_dot(&self) -> &str {
        &self.0[1..]
    }
}

impl fmt::Display for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Extension {
    type Error = InvalidExtensionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Extension {
    type Error = InvalidExtensionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Extension> for String {
    fn from(extension: Extension) -> Self {
        extension.0
    }
}

/// Error type for invalid file extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidExtensionError {
    /// The invalid extension value.
    pub value: String,
    /// The reason the extension is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidExtensionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid extension {:?}: {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidExtensionError {}
