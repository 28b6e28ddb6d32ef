//! File names with optional extensions.
//!
//! A [`File`] is the leaf of a file location: a name plus an optional
//! [`Extension`], derived by splitting a path segment at its last
//! qualifying dot.

use std::fmt;

use crate::segment::{Extension, InvalidSegmentError, Segment};

/// A file name with an optional extension.
///
/// # Examples
///
/// ```
/// use fsloc::{File, Segment};
///
/// let file = File::from_segment(&Segment::new("doc.pdf").unwrap()).unwrap();
/// assert_eq!(file.name(), "doc");
/// assert_eq!(file.extension().unwrap().as_str(), ".pdf");
/// assert_eq!(file.full_name(), "doc.pdf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
    name: String,
    extension: Option<Extension>,
}

impl File {
    /// Creates a file from a name and an optional extension.
    ///
    /// The name is validated like a segment: non-empty, no `/`. This is the
    /// only way to obtain an extensionless file; the decode surface never
    /// produces one (see [`File::from_segment`]).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or contains `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::{Extension, File};
    ///
    /// let readme = File::new("README", None).unwrap();
    /// assert_eq!(readme.full_name(), "README");
    ///
    /// let ext = Extension::new(".md").unwrap();
    /// let readme_md = File::new("README", Some(ext)).unwrap();
    /// assert_eq!(readme_md.full_name(), "README.md");
    /// ```
    pub fn new(
        name: impl Into<String>,
        extension: Option<Extension>,
    ) -> Result<Self, InvalidSegmentError> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidSegmentError {
                value: name,
                reason: "file name must be non-empty".into(),
            });
        }
        if name.contains('/') {
            return Err(InvalidSegmentError {
                value: name,
                reason: "file name must not contain '/'".into(),
            });
        }
        Ok(Self { name, extension })
    }

    /// Splits a segment into a file at its last qualifying dot.
    ///
    /// A dot qualifies when it is neither the first nor the last character
    /// of the segment. Returns `None` when no dot qualifies — the analyzer
    /// reclassifies such inputs as directories, so `/home` and `.gitignore`
    /// decode as dirs rather than extensionless files.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::{File, Segment};
    ///
    /// let seg = Segment::new("archive.tar.gz").unwrap();
    /// let file = File::from_segment(&seg).unwrap();
    /// assert_eq!(file.name(), "archive.tar");
    /// assert_eq!(file.extension().unwrap().as_str(), ".gz");
    ///
    /// // Dotfiles have their only dot at index 0: no qualifying dot.
    /// assert!(File::from_segment(&Segment::new(".gitignore").unwrap()).is_none());
    /// assert!(File::from_segment(&Segment::new("Makefile").unwrap()).is_none());
    /// ```
    #[must_use]
    pub fn from_segment(segment: &Segment) -> Option<Self> {
        let raw = segment.as_str();
        let dot = raw.rfind('.')?;
        if dot == 0 || dot == raw.len() - 1 {
            return None;
        }
        // Both halves are non-empty and slash-free because the segment is.
        let extension = Extension::new(&raw[dot..]).ok()?;
        Some(Self {
            name: raw[..dot].to_string(),
            extension: Some(extension),
        })
    }

    /// Returns the file name without its extension.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the extension, if any.
    #[must_use]
    pub fn extension(&self) -> Option<&Extension> {
        self.extension.as_ref()
    }

    /// Returns the full name: the name with its extension appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::{File, Segment};
    ///
    /// let file = File::from_segment(&Segment::new("util.js").unwrap()).unwrap();
    /// assert_eq!(file.full_name(), "util.js");
    /// ```
    #[must_use]
    pub fn full_name(&self) -> String {
        match &self.extension {
            Some(ext) => format!("{}{ext}", self.name),
            None => self.name.clone(),
        }
    }

    /// Returns the full name as a validated segment.
    ///
    /// Used when a file becomes the trailing segment of a directory path.
    #[must_use]
    pub fn to_segment(&self) -> Segment {
        // A file name plus extension is non-empty and slash-free.
        Segment::new(self.full_name()).expect("file full name is a valid segment")
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
