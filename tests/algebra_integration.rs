//! Integration tests for the path algebra over the public API.

use fsloc::{AbsDir, AbsFile, AbsLocation, EnvCurrentDir, Location, RelDir, RelFile};

#[test]
fn join_dir_under_dir() {
    let home = AbsDir::decode("/home/").unwrap();
    let docs = RelDir::decode("documents/").unwrap();
    assert_eq!(home.join_dir(&docs).encode(), "/home/documents/");
}

#[test]
fn join_normalizes_parents_against_base() {
    let base = AbsDir::decode("/home/user/projects/").unwrap();
    let rel = RelFile::decode("../../shared/config.yml").unwrap();
    assert_eq!(base.join_file(&rel).encode(), "/home/shared/config.yml");
}

#[test]
fn join_never_escapes_the_root() {
    let base = AbsDir::decode("/home/").unwrap();
    let rel = RelDir::decode("../../../etc/").unwrap();
    assert_eq!(base.join_dir(&rel).encode(), "/etc/");
}

#[test]
fn minimal_relative_path_between_locations() {
    let file = AbsFile::decode("/home/file.txt").unwrap();
    let base = AbsDir::decode("/home/user/").unwrap();
    assert_eq!(file.to_rel(&base).encode(), "./../file.txt");
}

#[test]
fn to_rel_and_join_are_inverse() {
    let base = AbsDir::decode("/srv/www/app/").unwrap();
    for target in ["/srv/www/static/logo.png", "/srv/www/app/index.html", "/var/log/app.log"] {
        let file = AbsFile::decode(target).unwrap();
        let rel = file.to_rel(&base);
        assert_eq!(base.join_file(&rel), file);
    }
}

#[test]
fn to_rel_same_dir_is_current() {
    let dir = AbsDir::decode("/home/user/").unwrap();
    assert_eq!(dir.to_rel(&dir), RelDir::current());
    assert_eq!(dir.to_rel(&dir).encode(), "./");
}

#[test]
fn file_in_root_is_under_root() {
    let file = AbsFile::decode("/file.txt").unwrap();
    assert!(file.is_under(&AbsDir::root()));
    assert!(file.path().is_empty());
}

#[test]
fn equal_dirs_are_not_under_each_other() {
    let a = AbsDir::decode("/home/user/").unwrap();
    let b = AbsDir::decode("/home/user/").unwrap();
    assert!(!a.is_under(&b));
    assert!(!b.is_under(&a));
}

#[test]
fn up_walks_toward_the_root_and_stops() {
    let mut loc = Location::decode("/a/b/c/").unwrap();
    loc = loc.up();
    assert_eq!(loc.encode(), "/a/b/");
    loc = loc.up();
    loc = loc.up();
    assert_eq!(loc.encode(), "/");
    // Fixed point at the boundary.
    assert_eq!(loc.up(), loc);
}

#[test]
fn file_becomes_dir_named_after_itself() {
    let file = AbsFile::decode("/downloads/archive.tar.gz").unwrap();
    let dir = file.to_dir();
    assert_eq!(dir.encode(), "/downloads/archive.tar.gz/");
    assert_eq!(dir.name(), "archive.tar.gz");
}

#[test]
fn ensure_absolute_with_explicit_base() {
    let base = AbsDir::decode("/work/").unwrap();
    let abs = Location::decode("src/main.rs").unwrap().ensure_absolute(&base);
    assert_eq!(abs.encode(), "/work/src/main.rs");

    // Already absolute: the base is ignored.
    let abs = Location::decode("/etc/hosts.conf").unwrap().ensure_absolute(&base);
    assert_eq!(abs.encode(), "/etc/hosts.conf");
}

#[test]
fn ensure_absolute_via_process_cwd() {
    // The test process always has a working directory; the relative input
    // must land underneath it.
    let cwd = EnvCurrentDir;
    let abs = Location::decode("some/dir/")
        .unwrap()
        .ensure_absolute_via(&cwd)
        .unwrap();
    let AbsLocation::Dir(dir) = abs else {
        panic!("directory input must stay a directory");
    };
    assert!(dir.encode().ends_with("/some/dir/"));
}

#[test]
fn names_across_shapes() {
    assert_eq!(Location::decode("/a/doc.pdf").unwrap().name(), "doc.pdf");
    assert_eq!(Location::decode("/a/b/").unwrap().name(), "b");
    assert_eq!(Location::decode("/").unwrap().name(), "");
    assert_eq!(Location::decode("./").unwrap().name(), "");
}

#[test]
fn is_root_counts_rootless_files() {
    assert!(Location::decode("/").unwrap().is_root());
    assert!(Location::decode("/file.txt").unwrap().is_root());
    assert!(!Location::decode("/home/file.txt").unwrap().is_root());
}

#[test]
fn relative_algebra_mirrors_absolute() {
    let base = RelDir::decode("a/b/").unwrap();
    let child = RelDir::decode("a/b/c/").unwrap();
    assert!(child.is_under(&base));
    assert!(!base.is_under(&child));

    let file = RelFile::decode("a/b/x.txt").unwrap();
    assert!(file.is_under(&base));
    assert_eq!(file.up().encode(), "./a/x.txt");
}
