//! Candidate list construction.
//!
//! The search order is fixed: caller-supplied candidates first, then the
//! home-directory defaults, then anything derived from the interpreter's
//! own installation (see [`super::conda`]). First match wins, so earlier
//! sources shadow later ones. Duplicates are not filtered; a repeated
//! entry costs one extra existence check.

use std::path::{Path, PathBuf};

use super::conda;

/// Conventional install locations under the user's home directory.
const HOME_DEFAULTS: [&str; 2] = ["g2full", "g2conda"];

/// Build the full, ordered candidate list for one locate call.
///
/// `home` and `interpreter` are passed in rather than read from the
/// process so the construction is deterministic and testable;
/// [`super::locate`] supplies the real values.
pub fn candidate_list(
    user: &[PathBuf],
    home: Option<&Path>,
    interpreter: &Path,
) -> Vec<PathBuf> {
    let mut candidates: Vec<PathBuf> = user.to_vec();

    if let Some(home) = home {
        for name in HOME_DEFAULTS {
            candidates.push(home.join(name));
        }
        // The home directory itself is a valid install root too
        candidates.push(home.to_path_buf());
    }

    candidates.extend(conda::conda_candidates(interpreter));
    candidates
}

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// Paths without a leading tilde come back unchanged, as do paths like
/// `~other/...` which name a different user.
pub(crate) fn expand_user(path: &Path) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };
    if path == Path::new("~") {
        return home;
    }
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
