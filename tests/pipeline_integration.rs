//! End-to-end sweeps over real directories with lopdf-built documents.

mod fixtures;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use fixtures::TestFixtures;
use pdfsweep::{
    discover_files, validate_document, ErrorKind, Pipeline, StatusLine, StatusWriter, SweepConfig,
};
use tempfile::TempDir;

fn names(paths: &[PathBuf]) -> BTreeSet<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

fn sweep(root: &Path) -> (Vec<pdfsweep::FileOutcome>, Vec<StatusLine>) {
    let mut lines: Vec<StatusLine> = Vec::new();
    let outcomes = Pipeline::new(SweepConfig::new(root, ".pdf"))
        .run(&mut lines)
        .unwrap();
    (outcomes, lines)
}

#[test]
fn test_mixed_directory_scenario() {
    let tmp = TempDir::new().unwrap();
    let a = TestFixtures::write(tmp.path(), "a.pdf", &TestFixtures::pdf_with_pages(3));
    let b = TestFixtures::write(tmp.path(), "b.PDF", &TestFixtures::get_malformed_pdf());
    let c = TestFixtures::write(tmp.path(), "C.pdf", &TestFixtures::get_malformed_pdf());
    let d = TestFixtures::write(tmp.path(), "d.pdf", &TestFixtures::pdf_with_pages(0));

    let discovered = discover_files(tmp.path(), ".pdf").unwrap();
    assert_eq!(
        names(&discovered),
        ["C.pdf", "a.pdf", "d.pdf"]
            .iter()
            .map(|s| s.to_string())
            .collect::<BTreeSet<_>>()
    );

    let (outcomes, lines) = sweep(tmp.path());
    assert_eq!(outcomes.len(), 3);

    assert!(a.exists(), "valid document must survive");
    assert!(b.exists(), "wrong-case suffix is never looked at");
    assert!(!c.exists(), "corrupt document must be deleted");
    assert!(!d.exists(), "zero-page document must be deleted");

    let uppercase: Vec<_> = lines
        .iter()
        .filter(|l| matches!(l, StatusLine::Uppercase { .. }))
        .map(|l| l.path().clone())
        .collect();
    assert_eq!(uppercase, vec![c.clone()]);

    let deleting: BTreeSet<_> = lines
        .iter()
        .filter(|l| matches!(l, StatusLine::Deleting { .. }))
        .map(|l| l.path().clone())
        .collect();
    assert_eq!(deleting, [c.clone(), d.clone()].into_iter().collect::<BTreeSet<_>>());

    assert!(lines.contains(&StatusLine::Invalid {
        path: d,
        reason: "No pages".into(),
    }));
}

#[test]
fn test_second_run_deletes_nothing() {
    let tmp = TempDir::new().unwrap();
    TestFixtures::write(tmp.path(), "Keep.pdf", &TestFixtures::pdf_with_pages(1));
    TestFixtures::write(tmp.path(), "nested/Broken.pdf", &TestFixtures::get_truncated_pdf());
    TestFixtures::write(tmp.path(), "nested/deeper/fine.pdf", &TestFixtures::pdf_with_pages(2));

    let (first, _) = sweep(tmp.path());
    assert_eq!(first.iter().filter(|o| o.removed).count(), 1);

    let (second, lines) = sweep(tmp.path());
    assert!(second.iter().all(|o| o.valid && !o.removed));
    assert_eq!(
        lines,
        vec![StatusLine::Uppercase {
            path: tmp.path().join("Keep.pdf"),
        }]
    );
}

#[test]
fn test_discovery_matches_exactly_the_suffix_at_any_depth() {
    let tmp = TempDir::new().unwrap();
    let mut expected = BTreeSet::new();
    for rel in ["top.pdf", "x/one.pdf", "x/y/z/w/deep.pdf"] {
        expected.insert(TestFixtures::write(tmp.path(), rel, b"x"));
    }
    for rel in ["x/readme.txt", "x/y/other.pdfx", "x/y/upper.PDF", "pdf"] {
        TestFixtures::write(tmp.path(), rel, b"x");
    }

    let found: BTreeSet<_> = discover_files(tmp.path(), ".pdf")
        .unwrap()
        .into_iter()
        .collect();
    assert_eq!(found, expected);
}

#[test]
fn test_valid_documents_are_never_removed() {
    let tmp = TempDir::new().unwrap();
    for pages in 1..=4 {
        TestFixtures::write(
            tmp.path(),
            &format!("doc{pages}.pdf"),
            &TestFixtures::pdf_with_pages(pages),
        );
    }

    let (outcomes, lines) = sweep(tmp.path());
    assert_eq!(outcomes.len(), 4);
    assert!(outcomes.iter().all(|o| o.valid && !o.removed));
    assert!(lines.is_empty());
}

#[test]
fn test_stale_startxref_document_is_kept() {
    let tmp = TempDir::new().unwrap();
    let bytes = TestFixtures::pdf_with_bad_startxref();
    let path = TestFixtures::write(tmp.path(), "scan.pdf", &bytes);

    let (outcomes, lines) = sweep(tmp.path());
    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].valid && !outcomes[0].removed);
    assert!(lines.is_empty(), "got: {lines:?}");
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
}

#[test]
fn test_validator_reports_parser_text_for_corrupt_file() {
    let tmp = TempDir::new().unwrap();
    let path = TestFixtures::write(tmp.path(), "junk.pdf", &TestFixtures::get_malformed_pdf());

    let mut lines: Vec<StatusLine> = Vec::new();
    assert!(!validate_document(&path, &mut lines).unwrap());
    assert!(path.exists());
    match &lines[..] {
        [StatusLine::Invalid { path: p, reason }] => {
            assert_eq!(p, &path);
            assert!(!reason.is_empty());
        }
        other => panic!("unexpected lines: {other:?}"),
    }
}

#[test]
fn test_missing_root_aborts_without_output() {
    let tmp = TempDir::new().unwrap();
    let mut lines: Vec<StatusLine> = Vec::new();
    let err = Pipeline::new(SweepConfig::new(tmp.path().join("PDFs"), ".pdf"))
        .run(&mut lines)
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::FilesystemAccess);
    assert!(lines.is_empty());
}

#[test]
fn test_status_text_names_every_file() {
    let tmp = TempDir::new().unwrap();
    let bad = TestFixtures::write(tmp.path(), "Scan.pdf", &TestFixtures::get_malformed_pdf());

    let mut writer = StatusWriter::new(Vec::new());
    Pipeline::new(SweepConfig::new(tmp.path(), ".pdf"))
        .run(&mut writer)
        .unwrap();

    let text = String::from_utf8(writer.into_inner()).unwrap();
    let shown = bad.display().to_string();
    assert_eq!(text.lines().count(), 3);
    assert!(text.lines().all(|line| line.contains(&shown)), "got: {text}");
}
