mod common;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use common::{TestFixture, as_set};
use dirsift::matcher::extension_of;
use dirsift::output::{Reporter, WalkEvent};
use dirsift::scanner::{DirectoryScanner, FolderScanner};
use dirsift::{DirectoryWalker, DirsiftError, PatternSet, WalkerOptions};

/// Plain single-threaded traversal applying the same predicates.
fn sequential_reference(root: &Path, patterns: &PatternSet) -> BTreeSet<PathBuf> {
    let mut expected = BTreeSet::new();
    for dir in walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
    {
        let name = dir.file_name().to_string_lossy();
        if !patterns.matches_folder(&name) {
            continue;
        }
        for entry in fs::read_dir(dir.path()).unwrap().filter_map(Result::ok) {
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if entry.path().is_file() && patterns.matches_file(&file_name, extension_of(&file_name)) {
                expected.insert(dunce::canonicalize(entry.path()).unwrap());
            }
        }
    }
    expected
}

fn mixed_tree() -> TestFixture {
    let fixture = TestFixture::new();
    for relative in [
        "data/a.txt",
        "data/b.csv",
        "data/nested/c.txt",
        "misc/data/d.txt",
        "misc/data/deeper/data/e.txt",
        "archive/data_2023/f.txt",
        "archive/old/g.txt",
        "reports/summary.py",
        "reports/summary.pyc",
        "reports/data/h.py",
    ] {
        fixture.create_file(relative);
    }
    fixture.create_dir("empty/data");
    fixture
}

fn walker(fixture: &TestFixture, folders: &[&str], file: &str) -> DirectoryWalker {
    let options = WalkerOptions::new(fixture.path(), file)
        .with_folder_patterns(folders.iter().copied())
        .with_progress(false);
    DirectoryWalker::new(options).unwrap()
}

// =============================================================================
// Result-set properties
// =============================================================================

#[test]
fn result_set_equals_sequential_reference() {
    let fixture = mixed_tree();
    let folders = ["^data", "^reports$"];

    for workers in [1, 2, 8] {
        let options = WalkerOptions::new(fixture.path(), r"\.(txt|py)$")
            .with_folder_patterns(folders)
            .with_workers(workers)
            .with_progress(false);
        let walker = DirectoryWalker::new(options).unwrap();

        let expected = sequential_reference(&fixture.root(), walker.patterns());
        let actual = walker.find_matching_files().unwrap();

        assert!(!expected.is_empty());
        assert_eq!(actual.len(), expected.len(), "no duplicates with {workers} workers");
        assert_eq!(as_set(&actual), expected, "{workers} workers");
    }
}

#[test]
fn matching_folder_below_non_matching_ancestor_is_found() {
    let fixture = TestFixture::new();
    fixture.create_file("misc/data/a.txt");

    let files = walker(&fixture, &["^data$"], ".*")
        .find_matching_files()
        .unwrap();

    assert_eq!(files, vec![fixture.abs("misc/data/a.txt")]);
}

#[cfg(unix)]
#[test]
fn symlinked_matching_folder_is_scanned_but_not_descended() {
    let fixture = TestFixture::new();
    let share = TestFixture::new();
    share.create_file("a.txt");
    share.create_file("data/nested.txt");
    std::os::unix::fs::symlink(share.path(), fixture.path().join("data")).unwrap();

    let report = walker(&fixture, &["^data$"], ".*").walk().unwrap();

    assert_eq!(report.files, vec![share.abs("a.txt")]);
    assert_eq!(report.eligible_folders, 1);
    assert_eq!(report.directories_visited, 2);
}

#[test]
fn extension_filter_matches_exact_dotted_suffix() {
    let fixture = TestFixture::new();
    fixture.create_file("src/report.py");
    fixture.create_file("src/report.pyc");

    let options = WalkerOptions::new(fixture.path(), ".*")
        .with_folder_patterns(["^src$"])
        .with_extension_pattern(r"\.py$")
        .with_progress(false);
    let files = DirectoryWalker::new(options)
        .unwrap()
        .find_matching_files()
        .unwrap();

    assert_eq!(files, vec![fixture.abs("src/report.py")]);
}

#[test]
fn empty_folder_patterns_yield_nothing() {
    let fixture = mixed_tree();

    let report = walker(&fixture, &[], ".*").walk().unwrap();

    assert!(report.files.is_empty());
    assert_eq!(report.eligible_folders, 0);
    assert!(report.directories_visited > 1);
}

#[test]
fn one_worker_and_many_workers_agree() {
    let fixture = mixed_tree();
    let run = |workers: usize| {
        let options = WalkerOptions::new(fixture.path(), ".*")
            .with_folder_patterns(["data"])
            .with_workers(workers)
            .with_progress(false);
        as_set(
            &DirectoryWalker::new(options)
                .unwrap()
                .find_matching_files()
                .unwrap(),
        )
    };

    assert_eq!(run(1), run(6));
}

#[test]
fn repeated_walks_are_idempotent() {
    let fixture = mixed_tree();
    let walker = walker(&fixture, &["data"], ".*");

    let first = walker.find_matching_files().unwrap();
    let second = walker.find_matching_files().unwrap();

    assert_eq!(as_set(&first), as_set(&second));
}

#[test]
fn files_matching_pattern_in_ineligible_folders_are_ignored() {
    let fixture = mixed_tree();

    let files = walker(&fixture, &["^reports$"], r"\.py$")
        .find_matching_files()
        .unwrap();

    assert_eq!(files, vec![fixture.abs("reports/summary.py")]);
}

// =============================================================================
// Failure isolation
// =============================================================================

/// Deletes one folder right before it is scanned, after enumeration saw it.
struct DeletingScanner {
    inner: DirectoryScanner,
    victim: PathBuf,
}

impl FolderScanner for DeletingScanner {
    fn scan(&self, dir: &Path) -> dirsift::Result<Vec<PathBuf>> {
        if dir == self.victim {
            fs::remove_dir_all(dir).unwrap();
        }
        self.inner.scan(dir)
    }
}

#[derive(Default)]
struct Recorder {
    messages: Mutex<Vec<String>>,
}

impl Reporter for Recorder {
    fn report(&self, event: &WalkEvent<'_>) {
        self.messages.lock().unwrap().push(event.to_string());
    }
}

#[test]
fn folder_deleted_between_enumeration_and_scan_is_skipped() {
    let fixture = TestFixture::new();
    fixture.create_file("keep/data/a.txt");
    fixture.create_file("keep/data/b.txt");
    fixture.create_file("doomed/data/c.txt");
    let recorder = Arc::new(Recorder::default());

    let walker = walker(&fixture, &["^data$"], ".*");
    let scanner = DeletingScanner {
        inner: DirectoryScanner::new(Arc::clone(walker.patterns())),
        victim: fixture.abs("doomed/data"),
    };
    let report = walker
        .with_scanner(scanner)
        .with_reporter(Arc::clone(&recorder))
        .walk()
        .unwrap();

    assert_eq!(
        as_set(&report.files),
        BTreeSet::from([fixture.abs("keep/data/a.txt"), fixture.abs("keep/data/b.txt")])
    );
    assert_eq!(report.eligible_folders, 2);
    assert_eq!(report.skipped_folders, 1);
    let messages = recorder.messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Skipped folder"));
}

#[test]
fn missing_base_path_fails_before_any_event() {
    let fixture = TestFixture::new();
    let options = WalkerOptions::new(fixture.path().join("nope"), ".*").with_folder_patterns([".*"]);

    let result = DirectoryWalker::new(options);

    assert!(matches!(result, Err(DirsiftError::PathNotFound(_))));
}

#[cfg(unix)]
#[test]
fn unreadable_folder_does_not_abort_walk() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = TestFixture::new();
    fixture.create_file("open/data/a.txt");
    fixture.create_file("locked/data/b.txt");
    let locked = fixture.path().join("locked/data");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores permission bits, in which case there is nothing to test.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let report = walker(&fixture, &["^data$"], ".*").walk();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let report = report.unwrap();

    assert_eq!(report.files, vec![fixture.abs("open/data/a.txt")]);
    assert_eq!(report.skipped_folders, 1);
}
