#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fsloc
//!
//! A typed filesystem-location algebra.
//!
//! Locations are classified into four shapes along two axes — absolute vs.
//! relative, file vs. directory — with strict codecs between each shape and
//! its canonical string encoding, and a small pure algebra over them: join,
//! up, file↔dir conversion, make-absolute/relative, ancestor checks.
//!
//! Everything operates on strings and in-memory values; the crate performs
//! no filesystem I/O. Its single environmental dependency, the current
//! working directory, is injected through the [`CurrentDir`] trait.
//!
//! ## Core Types
//!
//! - [`Segment`], [`Extension`], [`File`]: validated primitives
//! - [`PathAbs`], [`PathRel`]: normalized segment sequences
//! - [`AbsFile`], [`AbsDir`], [`RelFile`], [`RelDir`]: the four shapes
//! - [`Location`] and the axis unions: generic dispatch over the shapes
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use fsloc::{AbsDir, AbsFile, Location};
//!
//! // Decode classifies; encode is canonical.
//! let file = AbsFile::decode("/home/user/doc.pdf").unwrap();
//! assert_eq!(file.encode(), "/home/user/doc.pdf");
//!
//! // A missing trailing slash still decodes as a directory.
//! let dir = AbsDir::decode("/home").unwrap();
//! assert_eq!(dir.encode(), "/home/");
//!
//! // The algebra is pure and total.
//! let rel = file.to_rel(&dir);
//! assert_eq!(rel.encode(), "./user/doc.pdf");
//! assert!(file.is_under(&dir));
//! ```

pub mod cwd;
pub mod error;
pub mod file;
pub mod location;
pub mod path;
pub mod segment;

// Re-export key types at crate root for convenience
pub use cwd::{CurrentDir, EnvCurrentDir};
pub use error::{Error, Result, Shape};
pub use file::File;
pub use location::{
    analyze, AbsDir, AbsFile, AbsLocation, AnyPath, DirLocation, FileLocation, Location,
    LooseLocation, RelDir, RelFile, RelLocation,
};
pub use path::{PathAbs, PathRel};
pub use segment::{Extension, InvalidExtensionError, InvalidSegmentError, Segment};
