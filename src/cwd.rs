//! Injectable current-working-directory accessor.
//!
//! The algebra itself is pure; its single environmental dependency is the
//! current working directory, consulted by the no-base variants of
//! `ensure_absolute`. That dependency lives behind the [`CurrentDir`] trait
//! so callers can substitute a fixed directory in tests and so concurrent
//! callers never race on a cached value — the directory is read once per
//! call, never stored.

use crate::error::{Error, Result};
use crate::location::AbsDir;
use crate::path::PathAbs;
use crate::segment::Segment;

/// Provides the current working directory as an absolute directory.
#[cfg_attr(test, mockall::automock)]
pub trait CurrentDir {
    /// Returns the current working directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EnvironmentUnavailable`] if the directory cannot be
    /// determined.
    fn current_dir(&self) -> Result<AbsDir>;
}

/// The production [`CurrentDir`] implementation, reading from the process
/// environment on every call.
///
/// # Examples
///
/// ```no_run
/// use fsloc::{CurrentDir, EnvCurrentDir};
///
/// let cwd = EnvCurrentDir.current_dir().unwrap();
/// assert!(cwd.encode().starts_with('/'));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCurrentDir;

impl CurrentDir for EnvCurrentDir {
    fn current_dir(&self) -> Result<AbsDir> {
        let cwd = std::env::current_dir().map_err(|source| {
            log::debug!("working directory read failed: {source}");
            Error::EnvironmentUnavailable { source }
        })?;

        let mut segments = Vec::new();
        for component in cwd.components() {
            if let std::path::Component::Normal(part) = component {
                let part = part.to_str().ok_or_else(|| Error::InvalidSegment {
                    value: part.to_string_lossy().into_owned(),
                    reason: "working directory contains non-UTF-8 component".to_string(),
                })?;
                segments.push(Segment::new(part)?);
            }
        }
        Ok(AbsDir::new(PathAbs::new(segments)))
    }
}
