//! Embedded interpreter helpers.
//!
//! Small wrappers around the pieces of the Python runtime this crate
//! touches: the interpreter's own executable path and the module search
//! path (`sys.path`).

use std::fs;
use std::path::{Path, PathBuf};

use pyo3::types::PyList;
use pyo3::{PyErr, Python};

use crate::error::Result;

/// The resolved path of the running interpreter's executable.
///
/// Symlinks are resolved when possible (conda installs typically expose
/// `bin/python` as a symlink into the environment), so the path segments
/// reflect the real installation root.
pub fn executable(py: Python<'_>) -> Result<PathBuf> {
    let sys = py.import("sys")?;
    let exe: String = sys.getattr("executable")?.extract()?;
    let exe = PathBuf::from(exe);
    Ok(fs::canonicalize(&exe).unwrap_or(exe))
}

/// Append a directory to the interpreter's module search path.
///
/// No duplicate guard: callers appending the same directory twice end up
/// with two `sys.path` entries, which Python tolerates.
pub fn append_search_path(py: Python<'_>, dir: &Path) -> Result<()> {
    let sys = py.import("sys")?;
    let path: &PyList = sys.getattr("path")?.downcast().map_err(PyErr::from)?;
    path.append(dir.to_string_lossy().into_owned())?;
    Ok(())
}

/// Snapshot of the interpreter's module search path.
pub fn search_path(py: Python<'_>) -> Result<Vec<String>> {
    let sys = py.import("sys")?;
    Ok(sys.getattr("path")?.extract()?)
}
