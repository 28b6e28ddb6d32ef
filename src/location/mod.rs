//! Typed filesystem locations.
//!
//! This module is the heart of the crate: the four location shapes, the
//! analyzer that classifies strings into them, and the algebra over them.
//!
//! # Key Concepts
//!
//! ## Shapes
//!
//! Every location is one of four shapes, the product of two axes:
//! anchoring (absolute vs. relative) and kind (file vs. directory).
//! [`AbsFile`], [`AbsDir`], [`RelFile`] and [`RelDir`] are the concrete
//! types; [`Location`] and the axis unions ([`AbsLocation`],
//! [`RelLocation`], [`FileLocation`], [`DirLocation`]) type operations
//! generically across them.
//!
//! ## Codecs
//!
//! Each shape decodes from a looser surface than it encodes to: `decode`
//! accepts a missing `./` prefix, a missing trailing `/` on extensionless
//! directories, and repeated slashes, while `encode` always produces the
//! single canonical form. Decoding a canonical encoding always yields the
//! original value.
//!
//! ```
//! use fsloc::RelFile;
//!
//! let file = RelFile::decode("../file.txt").unwrap();
//! assert_eq!(file.encode(), "./../file.txt");
//! assert_eq!(RelFile::decode(&file.encode()).unwrap(), file);
//! ```
//!
//! ## Algebra
//!
//! Join, up, file↔dir conversion, minimal-relative-path computation and
//! ancestor checks are pure methods on the shape types:
//!
//! ```
//! use fsloc::{AbsDir, RelDir};
//!
//! let home = AbsDir::decode("/home/").unwrap();
//! let docs = RelDir::decode("documents/").unwrap();
//! let joined = home.join_dir(&docs);
//! assert_eq!(joined.encode(), "/home/documents/");
//! assert!(joined.is_under(&home));
//! ```

mod algebra;
pub mod analyzer;
mod groups;
mod serde_impls;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use analyzer::analyze;
pub use groups::{
    AbsLocation, AnyPath, DirLocation, FileLocation, Location, LooseLocation, RelLocation,
};
pub use types::{AbsDir, AbsFile, RelDir, RelFile};
