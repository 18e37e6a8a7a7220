//! Conda installation discovery.
//!
//! GSAS-II is usually distributed as a conda package, so the interpreter
//! binary's own path is the best hint for where to look: a segment named
//! after a known conda flavor marks the installation root, and an `envs`
//! segment marks the active environment. Everything here works on path
//! components only, except the final enumeration of `<root>/envs`, which
//! reads the directory when it exists.

use std::ffi::OsStr;
use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;

/// Directory names that identify a conda installation root.
const CONDA_FLAVORS: [&str; 12] = [
    "anaconda",
    "anaconda2",
    "anaconda3",
    "miniconda",
    "miniconda2",
    "miniconda3",
    "Anaconda",
    "Anaconda2",
    "Anaconda3",
    "Miniconda",
    "Miniconda2",
    "Miniconda3",
];

/// Environment names worth checking before enumerating the rest.
const NAMED_ENVS: [&str; 4] = ["gsas", "gsas2", "gsas2full", "g2full"];

/// Derive conda-based candidates from the interpreter's executable path.
///
/// For each flavor segment found in `interpreter`, in order:
/// 1. the conda root (the path up to and including that segment),
/// 2. the active environment, if an `envs` segment is present,
/// 3. conventionally named environments under `<root>/envs`,
/// 4. every entry of `<root>/envs`, sorted, if the directory exists.
pub fn conda_candidates(interpreter: &Path) -> Vec<PathBuf> {
    let parts: Vec<Component<'_>> = interpreter.components().collect();
    let mut candidates = Vec::new();

    for flavor in CONDA_FLAVORS {
        let Some(idx) = position(&parts, flavor) else {
            continue;
        };
        let conda_root: PathBuf = parts[..=idx].iter().copied().collect();
        debug!(root = %conda_root.display(), flavor, "found conda installation root");
        candidates.push(conda_root.clone());

        // Active environment: <root>/envs/<name> taken from the path itself
        if let Some(envs_idx) = position(&parts, "envs") {
            if envs_idx + 1 < parts.len() {
                let env_root: PathBuf = parts[..=envs_idx + 1].iter().copied().collect();
                candidates.push(env_root);
            }
        }

        let all_envs_root = conda_root.join("envs");
        if all_envs_root.exists() {
            for name in NAMED_ENVS {
                candidates.push(all_envs_root.join(name));
            }
            candidates.extend(list_envs(&all_envs_root));
        }
    }

    candidates
}

fn position(parts: &[Component<'_>], name: &str) -> Option<usize> {
    parts
        .iter()
        .position(|part| part.as_os_str() == OsStr::new(name))
}

/// All entries of an environments directory, sorted for a deterministic
/// scan order.
fn list_envs(envs_root: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(envs_root) else {
        return Vec::new();
    };
    let mut envs: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
    envs.sort();
    envs
}
