//! Property-based tests for the codecs and the algebra.
//!
//! The unit modules already cover targeted properties; this suite runs the
//! cross-cutting laws at high case counts, which is why it sits behind the
//! `property-tests` feature.

use proptest::prelude::*;

use super::groups::{Location, RelLocation};
use super::types::{AbsDir, AbsFile, RelDir, RelFile};
use crate::file::File;
use crate::path::{PathAbs, PathRel};
use crate::segment::{Extension, Segment};

fn plain_segment() -> impl Strategy<Value = Segment> {
    "[a-z0-9_-]{1,10}".prop_map(|s| Segment::new(s).unwrap())
}

fn rel_segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        4 => plain_segment(),
        1 => Just(Segment::parent()),
    ]
}

fn abs_path() -> impl Strategy<Value = PathAbs> {
    prop::collection::vec(plain_segment(), 0..6).prop_map(PathAbs::new)
}

fn rel_path() -> impl Strategy<Value = PathRel> {
    prop::collection::vec(rel_segment(), 0..6).prop_map(PathRel::new)
}

fn file() -> impl Strategy<Value = File> {
    ("[a-z0-9_-]{1,10}", "[a-z0-9]{1,4}").prop_map(|(name, ext)| {
        let extension = Extension::new(format!(".{ext}")).unwrap();
        File::new(name, Some(extension)).unwrap()
    })
}

fn abs_dir() -> impl Strategy<Value = AbsDir> {
    abs_path().prop_map(AbsDir::new)
}

fn abs_file() -> impl Strategy<Value = AbsFile> {
    (abs_path(), file()).prop_map(|(path, file)| AbsFile::new(path, file))
}

fn rel_dir() -> impl Strategy<Value = RelDir> {
    rel_path().prop_map(RelDir::new)
}

fn rel_file() -> impl Strategy<Value = RelFile> {
    (rel_path(), file()).prop_map(|(path, file)| RelFile::new(path, file))
}

fn rel_location() -> impl Strategy<Value = RelLocation> {
    prop_oneof![
        rel_dir().prop_map(RelLocation::Dir),
        rel_file().prop_map(RelLocation::File),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Round-trip: decoding a canonical encoding reproduces the value
    #[test]
    fn abs_dir_round_trip(dir in abs_dir()) {
        prop_assert_eq!(AbsDir::decode(&dir.encode()).unwrap(), dir);
    }

    #[test]
    fn abs_file_round_trip(file in abs_file()) {
        prop_assert_eq!(AbsFile::decode(&file.encode()).unwrap(), file);
    }

    #[test]
    fn rel_dir_round_trip(dir in rel_dir()) {
        prop_assert_eq!(RelDir::decode(&dir.encode()).unwrap(), dir);
    }

    #[test]
    fn rel_file_round_trip(file in rel_file()) {
        prop_assert_eq!(RelFile::decode(&file.encode()).unwrap(), file);
    }

    // Re-decoding an already-decoded value's encoding is stable
    #[test]
    fn analyze_encode_fixed_point(loc in abs_file()) {
        let loc: Location = loc.into();
        let decoded = Location::decode(&loc.encode()).unwrap();
        prop_assert_eq!(decoded.encode(), loc.encode());
    }

    // join with the empty relative dir is an identity
    #[test]
    fn join_current_identity(dir in abs_dir()) {
        prop_assert_eq!(dir.join_dir(&RelDir::current()), dir);
    }

    #[test]
    fn rel_join_current_identity(dir in rel_dir()) {
        prop_assert_eq!(dir.join_dir(&RelDir::current()), dir);
    }

    // up at an empty path is a fixed point
    #[test]
    fn up_fixed_point_at_boundary(file in file()) {
        let rooted = AbsFile::new(PathAbs::root(), file);
        prop_assert_eq!(rooted.up(), rooted.clone());
        prop_assert_eq!(rooted.up().up(), rooted);
    }

    // to_rel then join recovers the original absolute location
    #[test]
    fn to_rel_join_inverse_dir(target in abs_dir(), base in abs_dir()) {
        let rel = target.to_rel(&base);
        prop_assert_eq!(base.join_dir(&rel), target);
    }

    #[test]
    fn to_rel_join_inverse_file(target in abs_file(), base in abs_dir()) {
        let rel = target.to_rel(&base);
        prop_assert_eq!(base.join_file(&rel), target);
    }

    // to_rel of a location against itself-as-base is the current dir
    #[test]
    fn to_rel_self_is_current(dir in abs_dir()) {
        prop_assert_eq!(dir.to_rel(&dir), RelDir::current());
    }

    // join result keeps the anchoring of the base and the kind of the rel
    #[test]
    fn join_tag_propagation(base in abs_dir(), rel in rel_location()) {
        let joined = base.join(&rel);
        match (&rel, &joined) {
            (RelLocation::File(_), crate::location::AbsLocation::File(_))
            | (RelLocation::Dir(_), crate::location::AbsLocation::Dir(_)) => {}
            _ => prop_assert!(false, "join changed the file/dir kind"),
        }
    }

    // joined children are under their base (when they gained segments)
    #[test]
    fn join_descends(base in abs_dir(), child in plain_segment()) {
        let rel = RelDir::new(PathRel::new(vec![child]));
        let joined = base.join_dir(&rel);
        prop_assert!(joined.is_under(&base));
        prop_assert!(!base.is_under(&joined));
    }

    // dirs are never under themselves; files are under their own dir
    #[test]
    fn under_strictness(path in abs_path(), file in file()) {
        let dir = AbsDir::new(path.clone());
        prop_assert!(!dir.is_under(&dir));

        let file = AbsFile::new(path, file);
        prop_assert!(file.is_under(&dir));
    }

    // serde wire format is exactly the canonical encoding
    #[test]
    fn serde_wire_is_canonical(file in abs_file()) {
        let json = serde_json::to_string(&file).unwrap();
        prop_assert_eq!(json, format!("{:?}", file.encode()));
    }
}
