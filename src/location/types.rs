//! The four concrete location variants.
//!
//! Each variant pairs a path with, for the file variants, a [`File`], and
//! owns one side of the codec: `decode` runs the analyzer and fails closed
//! on any other shape, `encode` produces the canonical string form.
//! `FromStr` and `Display` delegate to the two.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result, Shape};
use crate::file::File;
use crate::location::analyzer;
use crate::location::groups::Location;
use crate::path::{PathAbs, PathRel};

/// An absolute file location, e.g. `/home/user/doc.pdf`.
///
/// Encodes with a leading `/` and never a trailing `/`.
///
/// # Examples
///
/// ```
/// use fsloc::AbsFile;
///
/// let file = AbsFile::decode("/home/user/doc.pdf").unwrap();
/// assert_eq!(file.file().name(), "doc");
/// assert_eq!(file.encode(), "/home/user/doc.pdf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsFile {
    path: PathAbs,
    file: File,
}

impl AbsFile {
    /// Creates an absolute file location from a directory path and a file.
    #[must_use]
    pub fn new(path: PathAbs, file: File) -> Self {
        Self { path, file }
    }

    /// Returns the directory path holding the file.
    #[must_use]
    pub fn path(&self) -> &PathAbs {
        &self.path
    }

    /// Returns the file at the end of the location.
    #[must_use]
    pub fn file(&self) -> &File {
        &self.file
    }

    /// Consumes the location, returning its path and file.
    #[must_use]
    pub fn into_parts(self) -> (PathAbs, File) {
        (self.path, self.file)
    }

    /// Decodes an absolute file location from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the input is relative or
    /// directory-shaped, and [`Error::EmptyInput`] for the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::AbsFile;
    ///
    /// assert!(AbsFile::decode("/srv/app.log").is_ok());
    /// assert!(AbsFile::decode("./app.log").is_err());
    /// assert!(AbsFile::decode("/srv/").is_err());
    /// ```
    pub fn decode(input: &str) -> Result<Self> {
        match analyzer::analyze(input)? {
            Location::AbsFile(loc) => Ok(loc),
            other => Err(analyzer::shape_mismatch(input, Shape::AbsFile, &other)),
        }
    }

    /// Encodes as the canonical string form.
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{}{}", self.path, self.file.full_name())
    }
}

impl fmt::Display for AbsFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl FromStr for AbsFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

/// An absolute directory location, e.g. `/home/user/`.
///
/// Encodes with a leading and a trailing `/`; the root is `/`.
///
/// # Examples
///
/// ```
/// use fsloc::AbsDir;
///
/// // The trailing slash is optional on the decode surface...
/// let dir = AbsDir::decode("/home").unwrap();
/// // ...but canonical on the encode side.
/// assert_eq!(dir.encode(), "/home/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbsDir {
    path: PathAbs,
}

impl AbsDir {
    /// The root directory, `/`.
    #[must_use]
    pub fn root() -> Self {
        Self {
            path: PathAbs::root(),
        }
    }

    /// Creates an absolute directory location from a path.
    #[must_use]
    pub fn new(path: PathAbs) -> Self {
        Self { path }
    }

    /// Returns the directory path.
    #[must_use]
    pub fn path(&self) -> &PathAbs {
        &self.path
    }

    /// Consumes the location, returning its path.
    #[must_use]
    pub fn into_path(self) -> PathAbs {
        self.path
    }

    /// Decodes an absolute directory location from a string.
    ///
    /// Accepts `/`, any `/`-prefixed string ending in `/`, and any
    /// `/`-prefixed string whose last segment has no extension (which the
    /// analyzer classifies as a directory).
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the input is relative or
    /// file-shaped, and [`Error::EmptyInput`] for the empty string.
    pub fn decode(input: &str) -> Result<Self> {
        match analyzer::analyze(input)? {
            Location::AbsDir(loc) => Ok(loc),
            other => Err(analyzer::shape_mismatch(input, Shape::AbsDir, &other)),
        }
    }

    /// Encodes as the canonical string form.
    #[must_use]
    pub fn encode(&self) -> String {
        self.path.to_string()
    }
}

impl fmt::Display for AbsDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl FromStr for AbsDir {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

/// A relative file location, e.g. `./../lib/util.js`.
///
/// Encodes with a leading `./` and never a trailing `/`.
///
/// # Examples
///
/// ```
/// use fsloc::RelFile;
///
/// let file = RelFile::decode("../../lib/util.js").unwrap();
/// assert_eq!(file.encode(), "./../../lib/util.js");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelFile {
    path: PathRel,
    file: File,
}

impl RelFile {
    /// Creates a relative file location from a directory path and a file.
    #[must_use]
    pub fn new(path: PathRel, file: File) -> Self {
        Self { path, file }
    }

    /// Returns the directory path holding the file.
    #[must_use]
    pub fn path(&self) -> &PathRel {
        &self.path
    }

    /// Returns the file at the end of the location.
    #[must_use]
    pub fn file(&self) -> &File {
        &self.file
    }

    /// Consumes the location, returning its path and file.
    #[must_use]
    pub fn into_parts(self) -> (PathRel, File) {
        (self.path, self.file)
    }

    /// Decodes a relative file location from a string.
    ///
    /// The leading `./` is optional on the decode surface.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the input is absolute or
    /// directory-shaped, and [`Error::EmptyInput`] for the empty string.
    pub fn decode(input: &str) -> Result<Self> {
        match analyzer::analyze(input)? {
            Location::RelFile(loc) => Ok(loc),
            other => Err(analyzer::shape_mismatch(input, Shape::RelFile, &other)),
        }
    }

    /// Encodes as the canonical string form.
    #[must_use]
    pub fn encode(&self) -> String {
        format!("{}{}", self.path, self.file.full_name())
    }
}

impl fmt::Display for RelFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl FromStr for RelFile {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

/// A relative directory location, e.g. `./documents/`.
///
/// Encodes with a leading `./` and a trailing `/`; the current directory
/// is `./`.
///
/// # Examples
///
/// ```
/// use fsloc::RelDir;
///
/// let dir = RelDir::decode("documents/").unwrap();
/// assert_eq!(dir.encode(), "./documents/");
/// assert_eq!(RelDir::current().encode(), "./");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelDir {
    path: PathRel,
}

impl RelDir {
    /// The current directory, `./`.
    #[must_use]
    pub fn current() -> Self {
        Self {
            path: PathRel::current(),
        }
    }

    /// Creates a relative directory location from a path.
    #[must_use]
    pub fn new(path: PathRel) -> Self {
        Self { path }
    }

    /// Returns the directory path.
    #[must_use]
    pub fn path(&self) -> &PathRel {
        &self.path
    }

    /// Consumes the location, returning its path.
    #[must_use]
    pub fn into_path(self) -> PathRel {
        self.path
    }

    /// Decodes a relative directory location from a string.
    ///
    /// Accepts `.`, `./`, and any non-`/`-prefixed string that either ends
    /// in `/` or whose last segment has no extension.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] if the input is absolute or
    /// file-shaped, and [`Error::EmptyInput`] for the empty string.
    pub fn decode(input: &str) -> Result<Self> {
        match analyzer::analyze(input)? {
            Location::RelDir(loc) => Ok(loc),
            other => Err(analyzer::shape_mismatch(input, Shape::RelDir, &other)),
        }
    }

    /// Encodes as the canonical string form.
    #[must_use]
    pub fn encode(&self) -> String {
        self.path.to_string()
    }
}

impl fmt::Display for RelDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl FromStr for RelDir {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}
