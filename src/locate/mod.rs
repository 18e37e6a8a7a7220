//! Installation discovery.
//!
//! Finds the `GSASII/` directory of a local GSAS-II installation by
//! scanning an ordered list of candidate directories for the marker file
//! `GSASII/GSASIIscriptable.py`. The scan is a best-effort heuristic:
//! no network, no environment variables, just existence checks against
//! a candidate list built from caller input, home-directory defaults,
//! and the interpreter's own installation root.

mod candidates;
mod conda;

use std::path::{Path, PathBuf};

use pyo3::Python;
use tracing::{debug, info};

use crate::error::{G2ShimError, Result};
use crate::python;

pub use candidates::candidate_list;
pub use conda::conda_candidates;

pub(crate) use candidates::expand_user;

/// Directory that holds the GSAS-II code base inside an install root.
pub const MARKER_DIR: &str = "GSASII";

/// File whose presence confirms an install root.
pub const MARKER_FILE: &str = "GSASIIscriptable.py";

/// Locate the installation directory for GSAS-II.
///
/// Tries the caller-supplied `candidates` first, then some expected
/// default locations, and looks in any conda installations and
/// environments reachable from the running interpreter's executable
/// path. Returns the first detected `GSASII/` directory.
///
/// When `add_to_search_path` is true the returned directory is appended
/// to the interpreter's module search path so it can be imported
/// immediately.
///
/// # Errors
///
/// [`G2ShimError::NotFound`] when no candidate contains the marker file.
pub fn locate(
    py: Python<'_>,
    candidates: &[PathBuf],
    add_to_search_path: bool,
) -> Result<PathBuf> {
    let interpreter = python::executable(py)?;
    let gsasdir = locate_with(candidates, dirs::home_dir().as_deref(), &interpreter)?;
    if add_to_search_path {
        python::append_search_path(py, &gsasdir)?;
    }
    Ok(gsasdir)
}

/// Locate with explicit home and interpreter paths (for testing).
///
/// Pure except for the marker-file existence checks and the enumeration
/// of a discovered `envs/` directory; never touches the interpreter.
pub fn locate_with(
    user_candidates: &[PathBuf],
    home: Option<&Path>,
    interpreter: &Path,
) -> Result<PathBuf> {
    let candidates = candidate_list(user_candidates, home, interpreter);
    search(&candidates).ok_or(G2ShimError::NotFound)
}

/// Scan candidates in order; first directory containing the marker wins.
pub fn search(candidates: &[PathBuf]) -> Option<PathBuf> {
    for candidate in candidates {
        debug!(candidate = %candidate.display(), "checking GSASII candidate");
        if candidate.join(MARKER_DIR).join(MARKER_FILE).exists() {
            let gsasdir = candidate.join(MARKER_DIR);
            info!(dir = %gsasdir.display(), "found GSASII directory");
            return Some(gsasdir);
        }
    }
    None
}
