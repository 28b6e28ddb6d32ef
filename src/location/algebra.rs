//! The path algebra over location types.
//!
//! Pure operations: join, up, file↔dir conversion, make-absolute and
//! make-relative, ancestor checks, and naming. None of them fail; the only
//! fallible entry points are the decode family and the no-base
//! `ensure_absolute`, which reads the injected working directory.

use crate::cwd::CurrentDir;
use crate::error::Result;
use crate::location::groups::{AbsLocation, Location, RelLocation};
use crate::location::types::{AbsDir, AbsFile, RelDir, RelFile};
use crate::path::{common_prefix_len, PathAbs, PathRel};
use crate::segment::Segment;

/// The minimal relative segment path leading from `base` to `target`.
///
/// Longest common prefix, one `..` per remaining base segment, then the
/// remaining target segments.
fn relative_between(base: &PathAbs, target: &PathAbs) -> PathRel {
    let shared = common_prefix_len(base.segments(), target.segments());
    let mut segments: Vec<Segment> = Vec::with_capacity(base.len() - shared + target.len() - shared);
    for _ in shared..base.len() {
        segments.push(Segment::parent());
    }
    segments.extend(target.segments()[shared..].iter().cloned());
    PathRel::new(segments)
}

impl AbsDir {
    /// Returns `true` if this is the literal root directory `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::AbsDir;
    ///
    /// assert!(AbsDir::root().is_root());
    /// assert!(!AbsDir::decode("/home/").unwrap().is_root());
    /// ```
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path().is_empty()
    }

    /// Returns the last segment's name, or the empty string at the root.
    #[must_use]
    pub fn name(&self) -> String {
        self.path()
            .last()
            .map(|s| s.as_str().to_string())
            .unwrap_or_default()
    }

    /// Returns the parent directory; the root is its own parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::AbsDir;
    ///
    /// let dir = AbsDir::decode("/a/b/").unwrap();
    /// assert_eq!(dir.up().encode(), "/a/");
    /// assert_eq!(AbsDir::root().up(), AbsDir::root());
    /// ```
    #[must_use]
    pub fn up(&self) -> Self {
        Self::new(self.path().parent())
    }

    /// Joins a relative directory under this directory.
    ///
    /// `..` segments in the relative path pop into this directory's
    /// segments, never past the root. Joining `RelDir::current()` is an
    /// identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::{AbsDir, RelDir};
    ///
    /// let home = AbsDir::decode("/home/").unwrap();
    /// let docs = RelDir::decode("documents/").unwrap();
    /// assert_eq!(home.join_dir(&docs).encode(), "/home/documents/");
    /// ```
    #[must_use]
    pub fn join_dir(&self, rel: &RelDir) -> Self {
        Self::new(self.path().join(rel.path()))
    }

    /// Joins a relative file under this directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::{AbsDir, RelFile};
    ///
    /// let home = AbsDir::decode("/home/").unwrap();
    /// let file = RelFile::decode("notes.txt").unwrap();
    /// assert_eq!(home.join_file(&file).encode(), "/home/notes.txt");
    /// ```
    #[must_use]
    pub fn join_file(&self, rel: &RelFile) -> AbsFile {
        AbsFile::new(self.path().join(rel.path()), rel.file().clone())
    }

    /// Joins either relative shape; the result is a file or directory
    /// according to the argument.
    #[must_use]
    pub fn join(&self, rel: &RelLocation) -> AbsLocation {
        match rel {
            RelLocation::File(file) => AbsLocation::File(self.join_file(file)),
            RelLocation::Dir(dir) => AbsLocation::Dir(self.join_dir(dir)),
        }
    }

    /// Computes the minimal relative directory path from `base` to here.
    ///
    /// `dir.to_rel(&dir)` is the current directory, `./`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::AbsDir;
    ///
    /// let target = AbsDir::decode("/a/b/").unwrap();
    /// let base = AbsDir::decode("/a/c/").unwrap();
    /// assert_eq!(target.to_rel(&base).encode(), "./../b/");
    /// ```
    #[must_use]
    pub fn to_rel(&self, base: &Self) -> RelDir {
        RelDir::new(relative_between(base.path(), self.path()))
    }

    /// Returns `true` if this directory is a strict descendant of `parent`.
    ///
    /// A directory is never under itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::AbsDir;
    ///
    /// let parent = AbsDir::decode("/a/").unwrap();
    /// let child = AbsDir::decode("/a/b/").unwrap();
    /// assert!(child.is_under(&parent));
    /// assert!(!parent.is_under(&child));
    /// assert!(!parent.is_under(&parent));
    /// ```
    #[must_use]
    pub fn is_under(&self, parent: &Self) -> bool {
        self.path().starts_with(parent.path()) && self.path().len() > parent.path().len()
    }

    /// Returns `true` if `child` lives below this directory.
    ///
    /// The mirror of [`is_under`](Self::is_under): strict for directory
    /// children, non-strict for files sitting directly in this directory.
    #[must_use]
    pub fn is_above(&self, child: &AbsLocation) -> bool {
        match child {
            AbsLocation::File(file) => file.is_under(self),
            AbsLocation::Dir(dir) => dir.is_under(self),
        }
    }
}

impl AbsFile {
    /// Returns the file's full name.
    #[must_use]
    pub fn name(&self) -> String {
        self.file().full_name()
    }

    /// Moves the file one directory up; a no-op for a file in the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::AbsFile;
    ///
    /// let file = AbsFile::decode("/a/b/c.txt").unwrap();
    /// assert_eq!(file.up().encode(), "/a/c.txt");
    ///
    /// let rooted = AbsFile::decode("/c.txt").unwrap();
    /// assert_eq!(rooted.up(), rooted);
    /// ```
    #[must_use]
    pub fn up(&self) -> Self {
        Self::new(self.path().parent(), self.file().clone())
    }

    /// Reinterprets the file as a directory named after itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::AbsFile;
    ///
    /// let file = AbsFile::decode("/a/archive.tar").unwrap();
    /// assert_eq!(file.to_dir().encode(), "/a/archive.tar/");
    /// ```
    #[must_use]
    pub fn to_dir(&self) -> AbsDir {
        let mut segments = self.path().segments().to_vec();
        segments.push(self.file().to_segment());
        AbsDir::new(PathAbs::new(segments))
    }

    /// Computes the minimal relative file path from `base` to here.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::{AbsDir, AbsFile};
    ///
    /// let file = AbsFile::decode("/home/file.txt").unwrap();
    /// let base = AbsDir::decode("/home/user/").unwrap();
    /// assert_eq!(file.to_rel(&base).encode(), "./../file.txt");
    /// ```
    #[must_use]
    pub fn to_rel(&self, base: &AbsDir) -> RelFile {
        RelFile::new(relative_between(base.path(), self.path()), self.file().clone())
    }

    /// Returns `true` if this file lives in or below `parent`.
    ///
    /// Unlike directories, a file whose directory segments equal the
    /// parent's is under it: files live inside their containing directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::{AbsDir, AbsFile};
    ///
    /// let file = AbsFile::decode("/file.txt").unwrap();
    /// assert!(file.is_under(&AbsDir::root()));
    /// ```
    #[must_use]
    pub fn is_under(&self, parent: &AbsDir) -> bool {
        self.path().starts_with(parent.path())
    }
}

impl RelDir {
    /// Returns the last segment's name, or the empty string for `./`.
    #[must_use]
    pub fn name(&self) -> String {
        self.path()
            .last()
            .map(|s| s.as_str().to_string())
            .unwrap_or_default()
    }

    /// Drops the last segment; a no-op for `./` rather than prepending `..`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::RelDir;
    ///
    /// let dir = RelDir::decode("a/b/").unwrap();
    /// assert_eq!(dir.up().encode(), "./a/");
    /// assert_eq!(RelDir::current().up(), RelDir::current());
    /// ```
    #[must_use]
    pub fn up(&self) -> Self {
        Self::new(self.path().parent())
    }

    /// Joins a relative directory under this one.
    #[must_use]
    pub fn join_dir(&self, rel: &Self) -> Self {
        Self::new(self.path().join(rel.path()))
    }

    /// Joins a relative file under this directory.
    #[must_use]
    pub fn join_file(&self, rel: &RelFile) -> RelFile {
        RelFile::new(self.path().join(rel.path()), rel.file().clone())
    }

    /// Joins either relative shape; the result is a file or directory
    /// according to the argument.
    #[must_use]
    pub fn join(&self, rel: &RelLocation) -> RelLocation {
        match rel {
            RelLocation::File(file) => RelLocation::File(self.join_file(file)),
            RelLocation::Dir(dir) => RelLocation::Dir(self.join_dir(dir)),
        }
    }

    /// Re-tags the directory as anchored at the root.
    ///
    /// A textual re-tag, not a resolution: only valid when the relative
    /// path is meant to be read from the true root. Leading `..` segments
    /// are dropped at the root boundary. To resolve against a real base,
    /// use [`AbsDir::join_dir`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::RelDir;
    ///
    /// let dir = RelDir::decode("etc/apt/").unwrap();
    /// assert_eq!(dir.to_abs().encode(), "/etc/apt/");
    /// ```
    #[must_use]
    pub fn to_abs(&self) -> AbsDir {
        AbsDir::new(self.path().assume_from_root())
    }

    /// Returns `true` if this directory is a strict descendant of `parent`.
    #[must_use]
    pub fn is_under(&self, parent: &Self) -> bool {
        self.path().starts_with(parent.path()) && self.path().len() > parent.path().len()
    }

    /// Returns `true` if `child` lives below this directory.
    #[must_use]
    pub fn is_above(&self, child: &RelLocation) -> bool {
        match child {
            RelLocation::File(file) => file.is_under(self),
            RelLocation::Dir(dir) => dir.is_under(self),
        }
    }
}

impl RelFile {
    /// Returns the file's full name.
    #[must_use]
    pub fn name(&self) -> String {
        self.file().full_name()
    }

    /// Moves the file one directory up; a no-op when no segments remain.
    #[must_use]
    pub fn up(&self) -> Self {
        Self::new(self.path().parent(), self.file().clone())
    }

    /// Reinterprets the file as a directory named after itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::RelFile;
    ///
    /// let file = RelFile::decode("a/b.txt").unwrap();
    /// assert_eq!(file.to_dir().encode(), "./a/b.txt/");
    /// ```
    #[must_use]
    pub fn to_dir(&self) -> RelDir {
        let mut segments = self.path().segments().to_vec();
        segments.push(self.file().to_segment());
        RelDir::new(PathRel::new(segments))
    }

    /// Re-tags the file as anchored at the root.
    ///
    /// See [`RelDir::to_abs`] for the caveats; to resolve against a real
    /// base, use [`AbsDir::join_file`].
    #[must_use]
    pub fn to_abs(&self) -> AbsFile {
        AbsFile::new(self.path().assume_from_root(), self.file().clone())
    }

    /// Returns `true` if this file lives in or below `parent`.
    #[must_use]
    pub fn is_under(&self, parent: &RelDir) -> bool {
        self.path().starts_with(parent.path())
    }
}

impl AbsLocation {
    /// Computes the minimal relative location from `base` to here,
    /// preserving the file/dir tag.
    #[must_use]
    pub fn to_rel(&self, base: &AbsDir) -> RelLocation {
        match self {
            Self::File(file) => RelLocation::File(file.to_rel(base)),
            Self::Dir(dir) => RelLocation::Dir(dir.to_rel(base)),
        }
    }
}

impl RelLocation {
    /// Re-tags the location as anchored at the root, preserving the
    /// file/dir tag. See [`RelDir::to_abs`] for the caveats.
    #[must_use]
    pub fn to_abs(&self) -> AbsLocation {
        match self {
            Self::File(file) => AbsLocation::File(file.to_abs()),
            Self::Dir(dir) => AbsLocation::Dir(dir.to_abs()),
        }
    }
}

impl Location {
    /// Returns `true` if the path's segment list is empty.
    ///
    /// This deliberately conflates two cases from the source semantics: the
    /// literal root (or current) directory, and a file with no directory
    /// segments. Use [`AbsDir::is_root`] when only the literal root is
    /// meant.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::Location;
    ///
    /// assert!(Location::decode("/").unwrap().is_root());
    /// assert!(Location::decode("/file.txt").unwrap().is_root());
    /// assert!(!Location::decode("/home/").unwrap().is_root());
    /// ```
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments().is_empty()
    }

    /// Returns the location's name: the file's full name, the last
    /// directory segment, or the empty string at the root.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::AbsFile(loc) => loc.name(),
            Self::AbsDir(loc) => loc.name(),
            Self::RelFile(loc) => loc.name(),
            Self::RelDir(loc) => loc.name(),
        }
    }

    /// Drops the last path segment, preserving all tags; a no-op at an
    /// empty path.
    #[must_use]
    pub fn up(&self) -> Self {
        match self {
            Self::AbsFile(loc) => Self::AbsFile(loc.up()),
            Self::AbsDir(loc) => Self::AbsDir(loc.up()),
            Self::RelFile(loc) => Self::RelFile(loc.up()),
            Self::RelDir(loc) => Self::RelDir(loc.up()),
        }
    }

    /// Makes the location absolute against `base`: an identity for the
    /// absolute variants, a join for the relative ones. The file/dir tag
    /// is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::{AbsDir, AbsLocation, Location};
    ///
    /// let base = AbsDir::decode("/home/user/").unwrap();
    /// let loc = Location::decode("notes.txt").unwrap();
    /// let abs = loc.ensure_absolute(&base);
    /// assert_eq!(abs.encode(), "/home/user/notes.txt");
    /// ```
    #[must_use]
    pub fn ensure_absolute(&self, base: &AbsDir) -> AbsLocation {
        match self {
            Self::AbsFile(loc) => AbsLocation::File(loc.clone()),
            Self::AbsDir(loc) => AbsLocation::Dir(loc.clone()),
            Self::RelFile(loc) => AbsLocation::File(base.join_file(loc)),
            Self::RelDir(loc) => AbsLocation::Dir(base.join_dir(loc)),
        }
    }

    /// Makes the location absolute against the current working directory,
    /// read from `cwd` at call time.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EnvironmentUnavailable`] when the accessor
    /// fails. Absolute inputs never consult the accessor.
    pub fn ensure_absolute_via(&self, cwd: &dyn CurrentDir) -> Result<AbsLocation> {
        match self {
            Self::AbsFile(loc) => Ok(AbsLocation::File(loc.clone())),
            Self::AbsDir(loc) => Ok(AbsLocation::Dir(loc.clone())),
            Self::RelFile(_) | Self::RelDir(_) => Ok(self.ensure_absolute(&cwd.current_dir()?)),
        }
    }

    /// Returns `true` if this location lives under `parent`.
    ///
    /// `parent` must be a directory of the same anchoring; mixed
    /// absolute/relative pairs and file parents are always `false`.
    /// Directory children must be strict descendants; file children may sit
    /// directly in `parent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::Location;
    ///
    /// let file = Location::decode("/file.txt").unwrap();
    /// let root = Location::decode("/").unwrap();
    /// assert!(file.is_under(&root));
    /// assert!(!root.is_under(&root));
    ///
    /// // Mixed anchoring never relates.
    /// let rel = Location::decode("file.txt").unwrap();
    /// assert!(!rel.is_under(&root));
    /// ```
    #[must_use]
    pub fn is_under(&self, parent: &Self) -> bool {
        match (self, parent) {
            (Self::AbsFile(child), Self::AbsDir(dir)) => child.is_under(dir),
            (Self::AbsDir(child), Self::AbsDir(dir)) => child.is_under(dir),
            (Self::RelFile(child), Self::RelDir(dir)) => child.is_under(dir),
            (Self::RelDir(child), Self::RelDir(dir)) => child.is_under(dir),
            _ => false,
        }
    }

    /// Returns `true` if `child` lives under this location.
    #[must_use]
    pub fn is_above(&self, child: &Self) -> bool {
        child.is_under(self)
    }
}
