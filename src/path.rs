//! Absolute and relative segment paths.
//!
//! A path is an ordered sequence of [`Segment`]s. [`PathAbs`] is anchored at
//! the filesystem root and never contains `.` or `..`; [`PathRel`] is
//! anchored at an unspecified base and may carry a run of literal `..`
//! segments at its front.
//!
//! Both types normalize at construction: `.` segments are dropped and `..`
//! is resolved left-to-right against the segments accumulated so far. A `..`
//! that has nothing to pop is dropped for absolute paths (the root has no
//! parent) and kept literally for relative paths. Every reachable value is
//! therefore in normal form, which is what makes the codec round-trip and
//! the join-identity laws hold unconditionally.

use std::fmt;

use crate::segment::Segment;

/// Resolve `.` and `..` in a segment sequence, left to right.
///
/// `keep_unpoppable_parents` distinguishes the relative case (a `..` with
/// nothing to pop stays literal) from the absolute case (it is dropped at
/// the root boundary).
fn normalize_segments(segments: Vec<Segment>, keep_unpoppable_parents: bool) -> Vec<Segment> {
    let mut result: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        if segment.is_current() {
            continue;
        }
        if segment.is_parent() {
            match result.last() {
                Some(top) if !top.is_parent() => {
                    result.pop();
                }
                _ if keep_unpoppable_parents => result.push(segment),
                _ => {}
            }
            continue;
        }
        result.push(segment);
    }
    result
}

/// Length of the longest common segment prefix of two slices.
pub(crate) fn common_prefix_len(a: &[Segment], b: &[Segment]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// An absolute path: a normalized segment sequence anchored at the root.
///
/// # Examples
///
/// ```
/// use fsloc::{PathAbs, Segment};
///
/// let path = PathAbs::new(vec![
///     Segment::new("home").unwrap(),
///     Segment::new("user").unwrap(),
/// ]);
/// assert_eq!(path.to_string(), "/home/user/");
/// assert!(!path.is_empty());
/// assert!(PathAbs::root().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathAbs {
    segments: Vec<Segment>,
}

impl PathAbs {
    /// The root path, with no segments.
    #[must_use]
    pub fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Creates an absolute path, normalizing the segments.
    ///
    /// `.` segments are dropped and `..` pops the preceding segment; a `..`
    /// at the root boundary is dropped, never popping below zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::{PathAbs, Segment};
    ///
    /// let path = PathAbs::new(vec![
    ///     Segment::new("a").unwrap(),
    ///     Segment::new("..").unwrap(),
    ///     Segment::new("b").unwrap(),
    /// ]);
    /// assert_eq!(path.to_string(), "/b/");
    /// ```
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments: normalize_segments(segments, false),
        }
    }

    /// Returns the segments of this path.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns `true` if this is the root path.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns the last segment, or `None` at the root.
    #[must_use]
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Returns this path with its last segment removed.
    ///
    /// At the root this is a no-op; repeated application is a fixed point.
    #[must_use]
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// Appends relative segments, renormalizing the result.
    ///
    /// `..` segments in `rel` pop into this path's segments; overflow past
    /// the root is dropped.
    #[must_use]
    pub fn join(&self, rel: &PathRel) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(rel.segments().iter().cloned());
        Self::new(segments)
    }

    /// Returns `true` if `prefix`'s segments are a prefix of this path's.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        common_prefix_len(&self.segments, &prefix.segments) == prefix.segments.len()
    }
}

impl fmt::Display for PathAbs {
    /// Encodes as `/` followed by each segment with a trailing `/`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/")?;
        for segment in &self.segments {
            write!(f, "{segment}/")?;
        }
        Ok(())
    }
}

/// A relative path: a normalized segment sequence anchored at an
/// unspecified base.
///
/// After normalization any `..` segments form a contiguous run at the front
/// of the sequence.
///
/// # Examples
///
/// ```
/// use fsloc::{PathRel, Segment};
///
/// let path = PathRel::new(vec![
///     Segment::new("..").unwrap(),
///     Segment::new("lib").unwrap(),
/// ]);
/// assert_eq!(path.to_string(), "./../lib/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathRel {
    segments: Vec<Segment>,
}

impl PathRel {
    /// The empty relative path (the current directory).
    #[must_use]
    pub fn current() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Creates a relative path, normalizing the segments.
    ///
    /// `.` segments are dropped and `..` pops the preceding non-`..`
    /// segment; a `..` with nothing to pop is kept literally.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsloc::{PathRel, Segment};
    ///
    /// let path = PathRel::new(vec![
    ///     Segment::new("a").unwrap(),
    ///     Segment::new("..").unwrap(),
    ///     Segment::new("..").unwrap(),
    ///     Segment::new("b").unwrap(),
    /// ]);
    /// assert_eq!(path.to_string(), "./../b/");
    /// ```
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments: normalize_segments(segments, true),
        }
    }

    /// Returns the segments of this path.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns `true` if this path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns the last segment, or `None` if empty.
    #[must_use]
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Returns this path with its last segment removed.
    ///
    /// At an empty path this is a no-op rather than prepending a `..`.
    #[must_use]
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// Appends relative segments, renormalizing the result.
    #[must_use]
    pub fn join(&self, rel: &Self) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(rel.segments.iter().cloned());
        Self::new(segments)
    }

    /// Returns `true` if `prefix`'s segments are a prefix of this path's.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        common_prefix_len(&self.segments, &prefix.segments) == prefix.segments.len()
    }

    /// Reinterprets these segments as anchored at the root.
    ///
    /// This is a textual re-tag, not a resolution: leading `..` segments are
    /// dropped by [`PathAbs`] normalization, since the root has no parent.
    #[must_use]
    pub fn assume_from_root(&self) -> PathAbs {
        PathAbs::new(self.segments.clone())
    }
}

impl fmt::Display for PathRel {
    /// Encodes as `./` followed by each segment with a trailing `/`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "./")?;
        for segment in &self.segments {
            write!(f, "{segment}/")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(s: &str) -> Segment {
        Segment::new(s).unwrap()
    }

    fn segs(parts: &[&str]) -> Vec<Segment> {
        parts.iter().map(|s| seg(s)).collect()
    }

    #[test]
    fn test_abs_root_is_empty() {
        let root = PathAbs::root();
        assert!(root.is_empty());
        assert_eq!(root.to_string(), "/");
    }

    #[test]
    fn test_abs_display() {
        let path = PathAbs::new(segs(&["home", "user"]));
        assert_eq!(path.to_string(), "/home/user/");
    }

    #[test]
    fn test_abs_normalizes_current_dir() {
        let path = PathAbs::new(segs(&["a", ".", "b"]));
        assert_eq!(path.segments(), PathAbs::new(segs(&["a", "b"])).segments());
    }

    #[test]
    fn test_abs_normalizes_parent_dir() {
        let path = PathAbs::new(segs(&["a", "..", "b"]));
        assert_eq!(path.to_string(), "/b/");
    }

    #[test]
    fn test_abs_parent_overflow_dropped_at_root() {
        let path = PathAbs::new(segs(&["..", "..", "a"]));
        assert_eq!(path.to_string(), "/a/");
    }

    #[test]
    fn test_abs_parent_of_root_is_root() {
        let root = PathAbs::root();
        assert_eq!(root.parent(), root);
    }

    #[test]
    fn test_abs_parent_drops_last() {
        let path = PathAbs::new(segs(&["a", "b"]));
        assert_eq!(path.parent(), PathAbs::new(segs(&["a"])));
    }

    #[test]
    fn test_abs_join_pops_into_base() {
        let base = PathAbs::new(segs(&["home", "user"]));
        let rel = PathRel::new(segs(&["..", "other"]));
        assert_eq!(base.join(&rel), PathAbs::new(segs(&["home", "other"])));
    }

    #[test]
    fn test_abs_join_overflow_stops_at_root() {
        let base = PathAbs::new(segs(&["a"]));
        let rel = PathRel::new(segs(&["..", "..", "b"]));
        assert_eq!(base.join(&rel), PathAbs::new(segs(&["b"])));
    }

    #[test]
    fn test_abs_join_empty_is_identity() {
        let base = PathAbs::new(segs(&["home"]));
        assert_eq!(base.join(&PathRel::current()), base);
    }

    #[test]
    fn test_abs_starts_with() {
        let path = PathAbs::new(segs(&["a", "b", "c"]));
        assert!(path.starts_with(&PathAbs::new(segs(&["a", "b"]))));
        assert!(path.starts_with(&PathAbs::root()));
        assert!(!path.starts_with(&PathAbs::new(segs(&["a", "c"]))));
    }

    #[test]
    fn test_rel_current_display() {
        assert_eq!(PathRel::current().to_string(), "./");
    }

    #[test]
    fn test_rel_keeps_leading_parents() {
        let path = PathRel::new(segs(&["..", "..", "lib"]));
        assert_eq!(path.to_string(), "./../../lib/");
    }

    #[test]
    fn test_rel_pops_interior_parent() {
        let path = PathRel::new(segs(&["a", "..", "b"]));
        assert_eq!(path.to_string(), "./b/");
    }

    #[test]
    fn test_rel_parent_run_stays_at_front() {
        let path = PathRel::new(segs(&["a", "..", "..", "b"]));
        assert_eq!(path.to_string(), "./../b/");
    }

    #[test]
    fn test_rel_parent_of_empty_is_noop() {
        let empty = PathRel::current();
        assert_eq!(empty.parent(), empty);
    }

    #[test]
    fn test_rel_join_normalizes_across_boundary() {
        let left = PathRel::new(segs(&["a", "b"]));
        let right = PathRel::new(segs(&["..", "c"]));
        assert_eq!(left.join(&right), PathRel::new(segs(&["a", "c"])));
    }

    #[test]
    fn test_rel_join_empty_is_identity() {
        let path = PathRel::new(segs(&["..", "x"]));
        assert_eq!(path.join(&PathRel::current()), path);
    }

    #[test]
    fn test_assume_from_root_drops_leading_parents() {
        let rel = PathRel::new(segs(&["..", "etc"]));
        assert_eq!(rel.assume_from_root(), PathAbs::new(segs(&["etc"])));
    }

    #[test]
    fn test_common_prefix_len() {
        let a = segs(&["a", "b", "c"]);
        let b = segs(&["a", "b", "d"]);
        assert_eq!(common_prefix_len(&a, &b), 2);
        assert_eq!(common_prefix_len(&a, &[]), 0);
    }

    // Property-based tests
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn segment_strategy() -> impl Strategy<Value = Segment> {
            prop_oneof![
                3 => "[a-z0-9_-]{1,8}".prop_map(|s| Segment::new(s).unwrap()),
                1 => Just(Segment::parent()),
            ]
        }

        fn segments_strategy() -> impl Strategy<Value = Vec<Segment>> {
            prop::collection::vec(segment_strategy(), 0..8)
        }

        proptest! {
            /// Normalization is idempotent for absolute paths
            #[test]
            fn abs_normalization_idempotent(segments in segments_strategy()) {
                let once = PathAbs::new(segments);
                let twice = PathAbs::new(once.segments().to_vec());
                prop_assert_eq!(once, twice);
            }

            /// Normalization is idempotent for relative paths
            #[test]
            fn rel_normalization_idempotent(segments in segments_strategy()) {
                let once = PathRel::new(segments);
                let twice = PathRel::new(once.segments().to_vec());
                prop_assert_eq!(once, twice);
            }

            /// Absolute paths never contain `..` after normalization
            #[test]
            fn abs_never_contains_parent(segments in segments_strategy()) {
                let path = PathAbs::new(segments);
                prop_assert!(path.segments().iter().all(|s| !s.is_parent()));
            }

            /// `..` segments in a relative path form a prefix run
            #[test]
            fn rel_parents_form_prefix_run(segments in segments_strategy()) {
                let path = PathRel::new(segments);
                let first_normal = path
                    .segments()
                    .iter()
                    .position(|s| !s.is_parent())
                    .unwrap_or(path.len());
                prop_assert!(
                    path.segments()[first_normal..].iter().all(|s| !s.is_parent())
                );
            }

            /// Joining the empty relative path changes nothing
            #[test]
            fn join_empty_identity(segments in segments_strategy()) {
                let abs = PathAbs::new(segments.clone());
                prop_assert_eq!(abs.join(&PathRel::current()), abs);

                let rel = PathRel::new(segments);
                prop_assert_eq!(rel.join(&PathRel::current()), rel);
            }

            /// parent() never grows a path
            #[test]
            fn parent_never_grows(segments in segments_strategy()) {
                let path = PathAbs::new(segments);
                prop_assert!(path.parent().len() <= path.len());
            }
        }
    }
}
