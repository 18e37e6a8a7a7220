//! End-to-end locator behavior against the embedded interpreter.
//!
//! Pure candidate-list and scan logic is covered by the unit tests in
//! `src/locate/`; these tests exercise the `sys.path` side effect.

use std::fs;
use std::path::Path;

use g2shim::locate::{self, MARKER_DIR, MARKER_FILE};
use g2shim::python;
use g2shim::G2ShimError;
use pyo3::Python;
use tempfile::TempDir;

fn make_install(root: &Path) {
    let gsasdir = root.join(MARKER_DIR);
    fs::create_dir_all(&gsasdir).unwrap();
    fs::write(gsasdir.join(MARKER_FILE), "G2Project = object()\n").unwrap();
}

#[test]
fn locate_returns_marker_dir_and_extends_search_path() {
    let temp = TempDir::new().unwrap();
    make_install(temp.path());

    Python::with_gil(|py| {
        let found = locate::locate(py, &[temp.path().to_path_buf()], true).unwrap();
        assert_eq!(found, temp.path().join(MARKER_DIR));

        let search_path = python::search_path(py).unwrap();
        assert!(search_path.contains(&found.to_string_lossy().into_owned()));
    });
}

#[test]
fn locate_without_flag_leaves_search_path_alone() {
    let temp = TempDir::new().unwrap();
    make_install(temp.path());

    Python::with_gil(|py| {
        let found = locate::locate(py, &[temp.path().to_path_buf()], false).unwrap();

        let search_path = python::search_path(py).unwrap();
        assert!(!search_path.contains(&found.to_string_lossy().into_owned()));
    });
}

#[test]
fn locate_prefers_the_first_matching_candidate() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    make_install(first.path());
    make_install(second.path());

    Python::with_gil(|py| {
        let found = locate::locate(
            py,
            &[first.path().to_path_buf(), second.path().to_path_buf()],
            false,
        )
        .unwrap();
        assert_eq!(found, first.path().join(MARKER_DIR));
    });
}

#[test]
fn locate_with_reports_not_found_with_a_suggestion() {
    // Hermetic variant: home and interpreter both point into an empty
    // temp tree, so the machine's real installs cannot interfere.
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("home");
    fs::create_dir_all(&home).unwrap();

    let err = locate::locate_with(
        &[temp.path().join("nowhere")],
        Some(&home),
        &temp.path().join("bin").join("python3"),
    )
    .unwrap_err();

    assert!(matches!(err, G2ShimError::NotFound));
    assert!(err.to_string().contains("candidates"));
}

#[test]
fn duplicate_candidates_are_harmless() {
    let temp = TempDir::new().unwrap();
    make_install(temp.path());
    let dup = temp.path().to_path_buf();

    Python::with_gil(|py| {
        let found = locate::locate(py, &[dup.clone(), dup], false).unwrap();
        assert_eq!(found, temp.path().join(MARKER_DIR));
    });
}
