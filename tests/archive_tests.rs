//! Round-trip tests for the directory-backed relation archive.

use std::fs;

use rewrite_cascade::prelude::*;
use rustfst::prelude::*;
use rustfst::Label;

/// Single-state identity transducer over the printable ASCII range.
fn identity_rule() -> Lattice {
    let mut fst = Lattice::new();
    let s = fst.add_state();
    fst.set_start(s).unwrap();
    fst.set_final(s, TropicalWeight::one()).unwrap();
    for byte in 0x20u32..0x7f {
        fst.add_tr(
            s,
            Tr::new(byte as Label, byte as Label, TropicalWeight::one(), s),
        )
        .unwrap();
    }
    fst
}

/// Single-state transducer uppercasing ASCII letters.
fn uppercase_rule() -> Lattice {
    let mut fst = Lattice::new();
    let s = fst.add_state();
    fst.set_start(s).unwrap();
    fst.set_final(s, TropicalWeight::one()).unwrap();
    for byte in 0x20u32..0x7f {
        let out = if (u32::from(b'a')..=u32::from(b'z')).contains(&byte) {
            byte - 32
        } else {
            byte
        };
        fst.add_tr(
            s,
            Tr::new(byte as Label, out as Label, TropicalWeight::one(), s),
        )
        .unwrap();
    }
    fst
}

#[test]
fn archived_rules_drive_a_cascade() {
    let dir = tempfile::tempdir().unwrap();
    identity_rule()
        .write(dir.path().join("identity.fst"))
        .unwrap();
    uppercase_rule()
        .write(dir.path().join("uppercase.fst"))
        .unwrap();

    let mut cascade = RuleCascade::from_archive(dir.path()).unwrap();
    cascade.set_rules(["identity", "uppercase"]).unwrap();

    assert_eq!(cascade.top_rewrite("shout").unwrap(), "SHOUT");
    assert!(cascade.matches("ok", "OK").unwrap());
}

#[test]
fn missing_relation_resolves_to_none() {
    let dir = tempfile::tempdir().unwrap();
    identity_rule()
        .write(dir.path().join("identity.fst"))
        .unwrap();

    let archive = FstArchive::open(dir.path()).unwrap();
    assert!(archive.resolve("identity").unwrap().is_some());
    assert!(archive.resolve("missingRule").unwrap().is_none());

    let mut cascade = RuleCascade::new(archive);
    let err = cascade.set_rules(["missingRule"]).unwrap_err();
    assert!(matches!(err, RewriteError::RuleNotFound(name) if name == "missingRule"));
}

#[test]
fn opening_a_missing_path_fails() {
    let err = FstArchive::open("/no/such/archive").unwrap_err();
    assert!(matches!(err, ArchiveError::Open { .. }));

    let err = RuleCascade::from_archive("/no/such/archive").unwrap_err();
    assert!(matches!(err, RewriteError::Archive(ArchiveError::Open { .. })));
}

#[test]
fn opening_a_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("not-a-dir");
    fs::write(&file, b"plain file").unwrap();

    let err = FstArchive::open(&file).unwrap_err();
    assert!(matches!(err, ArchiveError::Open { .. }));
}

#[test]
fn corrupt_relation_file_reports_load_failure() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("broken.fst"), b"not an fst").unwrap();

    let archive = FstArchive::open(dir.path()).unwrap();
    let err = archive.resolve("broken").unwrap_err();
    assert!(matches!(err, ArchiveError::Load { name, .. } if name == "broken"));
}
