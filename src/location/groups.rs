//! The location sum type and its derived unions.
//!
//! [`Location`] covers all four shapes; the derived unions pair them along
//! one axis each: anchoring ([`AbsLocation`], [`RelLocation`]) or kind
//! ([`FileLocation`], [`DirLocation`]). All of them are closed enums, so
//! dispatching over the tags is compiler-checked for exhaustiveness.
//! [`LooseLocation`] is the permissive shape used before the file/dir
//! distinction is committed.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result, Shape};
use crate::file::File;
use crate::location::analyzer;
use crate::location::types::{AbsDir, AbsFile, RelDir, RelFile};
use crate::path::{PathAbs, PathRel};

/// Any of the four location shapes.
///
/// # Examples
///
/// ```
/// use fsloc::Location;
///
/// let loc = Location::decode("/home/user/").unwrap();
/// assert!(loc.is_absolute());
/// assert!(loc.is_dir());
/// assert_eq!(loc.encode(), "/home/user/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    /// An absolute file location.
    AbsFile(AbsFile),
    /// An absolute directory location.
    AbsDir(AbsDir),
    /// A relative file location.
    RelFile(RelFile),
    /// A relative directory location.
    RelDir(RelDir),
}

impl Location {
    /// Decodes any location shape from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for the empty string.
    pub fn decode(input: &str) -> Result<Self> {
        analyzer::analyze(input)
    }

    /// Encodes as the canonical string form of the held variant.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::AbsFile(loc) => loc.encode(),
            Self::AbsDir(loc) => loc.encode(),
            Self::RelFile(loc) => loc.encode(),
            Self::RelDir(loc) => loc.encode(),
        }
    }

    /// Returns the shape tag of the held variant.
    #[must_use]
    pub fn shape(&self) -> Shape {
        match self {
            Self::AbsFile(_) => Shape::AbsFile,
            Self::AbsDir(_) => Shape::AbsDir,
            Self::RelFile(_) => Shape::RelFile,
            Self::RelDir(_) => Shape::RelDir,
        }
    }

    /// Returns `true` for the absolute variants.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        matches!(self, Self::AbsFile(_) | Self::AbsDir(_))
    }

    /// Returns `true` for the relative variants.
    #[must_use]
    pub fn is_relative(&self) -> bool {
        !self.is_absolute()
    }

    /// Returns `true` for the file variants.
    #[must_use]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::AbsFile(_) | Self::RelFile(_))
    }

    /// Returns `true` for the directory variants.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        !self.is_file()
    }

    /// Returns the path segments of the held variant.
    #[must_use]
    pub fn segments(&self) -> &[crate::segment::Segment] {
        match self {
            Self::AbsFile(loc) => loc.path().segments(),
            Self::AbsDir(loc) => loc.path().segments(),
            Self::RelFile(loc) => loc.path().segments(),
            Self::RelDir(loc) => loc.path().segments(),
        }
    }

    /// Returns the file of the held variant, if it is a file variant.
    #[must_use]
    pub fn file(&self) -> Option<&File> {
        match self {
            Self::AbsFile(loc) => Some(loc.file()),
            Self::RelFile(loc) => Some(loc.file()),
            Self::AbsDir(_) | Self::RelDir(_) => None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl From<AbsFile> for Location {
    fn from(loc: AbsFile) -> Self {
        Self::AbsFile(loc)
    }
}

impl From<AbsDir> for Location {
    fn from(loc: AbsDir) -> Self {
        Self::AbsDir(loc)
    }
}

impl From<RelFile> for Location {
    fn from(loc: RelFile) -> Self {
        Self::RelFile(loc)
    }
}

impl From<RelDir> for Location {
    fn from(loc: RelDir) -> Self {
        Self::RelDir(loc)
    }
}

/// An absolute location: file or directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AbsLocation {
    /// An absolute file.
    File(AbsFile),
    /// An absolute directory.
    Dir(AbsDir),
}

impl AbsLocation {
    /// Decodes either absolute shape from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] for relative inputs.
    pub fn decode(input: &str) -> Result<Self> {
        match analyzer::analyze(input)? {
            Location::AbsFile(loc) => Ok(Self::File(loc)),
            Location::AbsDir(loc) => Ok(Self::Dir(loc)),
            other => Err(analyzer::shape_mismatch(input, Shape::Abs, &other)),
        }
    }

    /// Encodes as the canonical string form.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::File(loc) => loc.encode(),
            Self::Dir(loc) => loc.encode(),
        }
    }
}

impl fmt::Display for AbsLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl From<AbsLocation> for Location {
    fn from(loc: AbsLocation) -> Self {
        match loc {
            AbsLocation::File(loc) => Self::AbsFile(loc),
            AbsLocation::Dir(loc) => Self::AbsDir(loc),
        }
    }
}

/// A relative location: file or directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RelLocation {
    /// A relative file.
    File(RelFile),
    /// A relative directory.
    Dir(RelDir),
}

impl RelLocation {
    /// Decodes either relative shape from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] for absolute inputs.
    pub fn decode(input: &str) -> Result<Self> {
        match analyzer::analyze(input)? {
            Location::RelFile(loc) => Ok(Self::File(loc)),
            Location::RelDir(loc) => Ok(Self::Dir(loc)),
            other => Err(analyzer::shape_mismatch(input, Shape::Rel, &other)),
        }
    }

    /// Encodes as the canonical string form.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::File(loc) => loc.encode(),
            Self::Dir(loc) => loc.encode(),
        }
    }
}

impl fmt::Display for RelLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl From<RelLocation> for Location {
    fn from(loc: RelLocation) -> Self {
        match loc {
            RelLocation::File(loc) => Self::RelFile(loc),
            RelLocation::Dir(loc) => Self::RelDir(loc),
        }
    }
}

/// A file location: absolute or relative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FileLocation {
    /// An absolute file.
    Abs(AbsFile),
    /// A relative file.
    Rel(RelFile),
}

impl FileLocation {
    /// Decodes either file shape from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] for directory-shaped inputs.
    pub fn decode(input: &str) -> Result<Self> {
        match analyzer::analyze(input)? {
            Location::AbsFile(loc) => Ok(Self::Abs(loc)),
            Location::RelFile(loc) => Ok(Self::Rel(loc)),
            other => Err(analyzer::shape_mismatch(input, Shape::File, &other)),
        }
    }

    /// Encodes as the canonical string form.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Abs(loc) => loc.encode(),
            Self::Rel(loc) => loc.encode(),
        }
    }

    /// Returns the file at the end of the location.
    #[must_use]
    pub fn file(&self) -> &File {
        match self {
            Self::Abs(loc) => loc.file(),
            Self::Rel(loc) => loc.file(),
        }
    }
}

impl fmt::Display for FileLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl From<FileLocation> for Location {
    fn from(loc: FileLocation) -> Self {
        match loc {
            FileLocation::Abs(loc) => Self::AbsFile(loc),
            FileLocation::Rel(loc) => Self::RelFile(loc),
        }
    }
}

/// A directory location: absolute or relative.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DirLocation {
    /// An absolute directory.
    Abs(AbsDir),
    /// A relative directory.
    Rel(RelDir),
}

impl DirLocation {
    /// Decodes either directory shape from a string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] for file-shaped inputs.
    pub fn decode(input: &str) -> Result<Self> {
        match analyzer::analyze(input)? {
            Location::AbsDir(loc) => Ok(Self::Abs(loc)),
            Location::RelDir(loc) => Ok(Self::Rel(loc)),
            other => Err(analyzer::shape_mismatch(input, Shape::Dir, &other)),
        }
    }

    /// Encodes as the canonical string form.
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Abs(loc) => loc.encode(),
            Self::Rel(loc) => loc.encode(),
        }
    }
}

impl fmt::Display for DirLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl From<DirLocation> for Location {
    fn from(loc: DirLocation) -> Self {
        match loc {
            DirLocation::Abs(loc) => Self::AbsDir(loc),
            DirLocation::Rel(loc) => Self::RelDir(loc),
        }
    }
}

/// A path of either anchoring, used by [`LooseLocation`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnyPath {
    /// An absolute path.
    Abs(PathAbs),
    /// A relative path.
    Rel(PathRel),
}

/// A permissive location shape with no static file/dir commitment.
///
/// Useful when a path and an optional file are assembled before it is known
/// whether the result denotes a file or a directory. [`LooseLocation::commit`]
/// resolves the shape: the presence of a file makes it a file location.
///
/// # Examples
///
/// ```
/// use fsloc::{Location, LooseLocation};
///
/// let loose = LooseLocation::decode("/var/log/app.log").unwrap();
/// assert!(loose.file().is_some());
/// assert!(matches!(loose.commit(), Location::AbsFile(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LooseLocation {
    path: AnyPath,
    file: Option<File>,
}

impl LooseLocation {
    /// Creates a loose location from a path and an optional file.
    #[must_use]
    pub fn new(path: AnyPath, file: Option<File>) -> Self {
        Self { path, file }
    }

    /// Decodes any location shape and loosens it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyInput`] for the empty string.
    pub fn decode(input: &str) -> Result<Self> {
        Ok(Location::decode(input)?.into())
    }

    /// Returns the path of either anchoring.
    #[must_use]
    pub fn path(&self) -> &AnyPath {
        &self.path
    }

    /// Returns the uncommitted file, if any.
    #[must_use]
    pub fn file(&self) -> Option<&File> {
        self.file.as_ref()
    }

    /// Commits to a concrete shape: file if a file is present, else dir.
    #[must_use]
    pub fn commit(self) -> Location {
        match (self.path, self.file) {
            (AnyPath::Abs(path), Some(file)) => Location::AbsFile(AbsFile::new(path, file)),
            (AnyPath::Abs(path), None) => Location::AbsDir(AbsDir::new(path)),
            (AnyPath::Rel(path), Some(file)) => Location::RelFile(RelFile::new(path, file)),
            (AnyPath::Rel(path), None) => Location::RelDir(RelDir::new(path)),
        }
    }
}

impl From<Location> for LooseLocation {
    fn from(loc: Location) -> Self {
        match loc {
            Location::AbsFile(loc) => {
                let (path, file) = loc.into_parts();
                Self::new(AnyPath::Abs(path), Some(file))
            }
            Location::AbsDir(loc) => Self::new(AnyPath::Abs(loc.into_path()), None),
            Location::RelFile(loc) => {
                let (path, file) = loc.into_parts();
                Self::new(AnyPath::Rel(path), Some(file))
            }
            Location::RelDir(loc) => Self::new(AnyPath::Rel(loc.into_path()), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_decode_dispatch() {
        assert_eq!(Location::decode("/a.txt").unwrap().shape(), Shape::AbsFile);
        assert_eq!(Location::decode("/a/").unwrap().shape(), Shape::AbsDir);
        assert_eq!(Location::decode("a.txt").unwrap().shape(), Shape::RelFile);
        assert_eq!(Location::decode("a/").unwrap().shape(), Shape::RelDir);
    }

    #[test]
    fn test_location_predicates() {
        let loc = Location::decode("/a/b.txt").unwrap();
        assert!(loc.is_absolute());
        assert!(!loc.is_relative());
        assert!(loc.is_file());
        assert!(!loc.is_dir());
    }

    #[test]
    fn test_abs_location_accepts_both_abs_shapes() {
        assert!(matches!(
            AbsLocation::decode("/a.txt").unwrap(),
            AbsLocation::File(_)
        ));
        assert!(matches!(
            AbsLocation::decode("/a/").unwrap(),
            AbsLocation::Dir(_)
        ));
    }

    #[test]
    fn test_abs_location_rejects_relative() {
        let err = AbsLocation::decode("a/").unwrap_err();
        assert!(err.is_shape_mismatch());
        assert!(format!("{err}").contains("absolute location"));
    }

    #[test]
    fn test_rel_location_rejects_absolute() {
        assert!(RelLocation::decode("/a/").unwrap_err().is_shape_mismatch());
        assert!(matches!(
            RelLocation::decode("./a/").unwrap(),
            RelLocation::Dir(_)
        ));
    }

    #[test]
    fn test_file_location_rejects_dir_shaped() {
        assert!(FileLocation::decode("/a/").unwrap_err().is_shape_mismatch());
        assert!(matches!(
            FileLocation::decode("a/b.txt").unwrap(),
            FileLocation::Rel(_)
        ));
    }

    #[test]
    fn test_dir_location_rejects_file_shaped() {
        assert!(DirLocation::decode("b.txt").unwrap_err().is_shape_mismatch());
        assert!(matches!(
            DirLocation::decode("/a/").unwrap(),
            DirLocation::Abs(_)
        ));
    }

    #[test]
    fn test_loose_round_trips_through_commit() {
        for input in ["/a/b.txt", "/a/b/", "a/b.txt", "a/b/"] {
            let committed = LooseLocation::decode(input).unwrap().commit();
            assert_eq!(committed, Location::decode(input).unwrap());
        }
    }

    #[test]
    fn test_loose_exposes_parts() {
        let loose = LooseLocation::decode("./src/main.rs").unwrap();
        assert!(matches!(loose.path(), AnyPath::Rel(_)));
        assert_eq!(loose.file().unwrap().full_name(), "main.rs");

        let loose = LooseLocation::decode("/etc/").unwrap();
        assert!(loose.file().is_none());
    }

    #[test]
    fn test_group_display_is_canonical() {
        assert_eq!(AbsLocation::decode("/home").unwrap().to_string(), "/home/");
        assert_eq!(
            FileLocation::decode("lib/a.js").unwrap().to_string(),
            "./lib/a.js"
        );
    }
}
