//! Lazy handle for the GSAS-II scripting module.
//!
//! [`ScriptableModule`] stands in for `GSASIIscriptable` without importing
//! it up front. Construction runs the locator (non-fatally); the actual
//! import happens on first real use and is cached for the rest of the
//! process. The handle is an explicitly constructed, explicitly passed
//! context object: callers own its lifetime, there is no hidden global.
//!
//! Intended usage when GSAS-II is automatically found:
//!
//! ```no_run
//! use pyo3::Python;
//! use g2shim::ScriptableModule;
//!
//! Python::with_gil(|py| -> g2shim::Result<()> {
//!     let gsas = ScriptableModule::new(py);
//!     let project_type = gsas.attr(py, "G2Project")?;
//!     Ok(())
//! }).unwrap();
//! ```
//!
//! If it is not, set the directory before first use:
//!
//! ```no_run
//! use pyo3::Python;
//! use g2shim::ScriptableModule;
//!
//! Python::with_gil(|py| -> g2shim::Result<()> {
//!     let mut gsas = ScriptableModule::new(py);
//!     gsas.set_install_dir(py, "~/mystuff/GSASII")?;
//!     let project_type = gsas.attr(py, "G2Project")?;
//!     Ok(())
//! }).unwrap();
//! ```

mod metadata;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use pyo3::sync::GILOnceCell;
use pyo3::types::{PyModule, PyTuple};
use pyo3::{IntoPy, Py, PyObject, Python, ToPyObject};
use tracing::{debug, warn};

use crate::error::{G2ShimError, Result};
use crate::{locate, python};

pub use metadata::PROTECTED_ATTRS;

/// The module this handle wraps unless told otherwise.
pub const DEFAULT_MODULE_NAME: &str = "GSASIIscriptable";

/// Where a handle is in its one-way lifecycle.
///
/// Transitions only move forward: an unconfigured handle can gain a
/// directory, a configured handle can load, and a loaded handle never
/// goes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleState {
    /// No installation directory known yet.
    Unconfigured,
    /// Directory known, module not yet imported.
    Configured,
    /// Module imported and cached.
    Loaded,
}

/// Lazy, process-lifetime handle for the GSAS-II scripting module.
pub struct ScriptableModule {
    module_name: String,
    install_dir: Option<PathBuf>,
    module: GILOnceCell<Py<PyModule>>,
}

impl ScriptableModule {
    /// Create a handle, trying to locate GSAS-II automatically.
    ///
    /// Runs the locator with default candidates (adding the result to the
    /// module search path on success). A failed search is not fatal: it
    /// logs a warning and leaves the handle unconfigured so the caller
    /// can supply a directory with [`set_install_dir`](Self::set_install_dir).
    pub fn new(py: Python<'_>) -> Self {
        let install_dir = match locate::locate(py, &[], true) {
            Ok(dir) => Some(dir),
            Err(err) => {
                warn!(
                    error = %err,
                    "unable to locate a GSASII/ directory; \
                     set an install directory before using the module"
                );
                None
            }
        };
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
            install_dir,
            module: GILOnceCell::new(),
        }
    }

    /// Create a handle for a known installation directory, skipping the
    /// locator entirely.
    pub fn with_install_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
            install_dir: Some(dir.into()),
            module: GILOnceCell::new(),
        }
    }

    /// The name of the module this handle imports.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// The configured installation directory, if any.
    pub fn install_dir(&self) -> Option<&Path> {
        self.install_dir.as_deref()
    }

    /// Current lifecycle state.
    pub fn state(&self, py: Python<'_>) -> ModuleState {
        if self.module.get(py).is_some() {
            ModuleState::Loaded
        } else if self.install_dir.is_some() {
            ModuleState::Configured
        } else {
            ModuleState::Unconfigured
        }
    }

    /// Point the handle at an installation directory.
    ///
    /// Only valid before first use: once the module is imported the
    /// cached reference is never re-resolved, so a late change would be
    /// silently meaningless. That case fails with
    /// [`G2ShimError::AlreadyLoaded`] instead.
    pub fn set_install_dir(&mut self, py: Python<'_>, dir: impl Into<PathBuf>) -> Result<()> {
        self.ensure_unloaded(py, "the install directory")?;
        self.install_dir = Some(dir.into());
        Ok(())
    }

    /// Change which module the handle imports (default
    /// [`DEFAULT_MODULE_NAME`]). Same pre-first-use rule as
    /// [`set_install_dir`](Self::set_install_dir).
    pub fn set_module_name(&mut self, py: Python<'_>, name: impl Into<String>) -> Result<()> {
        self.ensure_unloaded(py, "the module name")?;
        self.module_name = name.into();
        Ok(())
    }

    fn ensure_unloaded(&self, py: Python<'_>, field: &'static str) -> Result<()> {
        if self.module.get(py).is_some() {
            return Err(G2ShimError::AlreadyLoaded {
                module: self.module_name.clone(),
                field,
            });
        }
        Ok(())
    }

    /// The underlying module, importing it on first call.
    ///
    /// The import appends the configured directory (tilde-expanded and
    /// resolved) to the module search path first; together with the
    /// locator's own append this can leave duplicate entries, which is
    /// harmless. Import failures surface as the native Python error.
    ///
    /// # Errors
    ///
    /// [`G2ShimError::InstallDirUnset`] when no directory was ever
    /// configured; any [`pyo3::PyErr`] the import itself raises.
    pub fn module<'py>(&'py self, py: Python<'py>) -> Result<&'py PyModule> {
        if let Some(module) = self.module.get(py) {
            return Ok(module.as_ref(py));
        }

        let dir = self
            .install_dir
            .as_deref()
            .ok_or(G2ShimError::InstallDirUnset)?;
        let dir = locate::expand_user(dir);
        let dir = fs::canonicalize(&dir).unwrap_or(dir);
        python::append_search_path(py, &dir)?;
        debug!(
            module = %self.module_name,
            dir = %dir.display(),
            "importing GSAS-II scripting module"
        );
        let imported: Py<PyModule> = py.import(self.module_name.as_str())?.into();
        Ok(self.module.get_or_init(py, || imported).as_ref(py))
    }

    /// Whether the underlying module has been imported yet.
    pub fn is_loaded(&self, py: Python<'_>) -> bool {
        self.module.get(py).is_some()
    }

    /// Read an attribute of the underlying module, importing it first if
    /// needed.
    pub fn attr(&self, py: Python<'_>, name: &str) -> Result<PyObject> {
        Ok(self.module(py)?.getattr(name)?.into())
    }

    /// Whether the underlying module exposes `name`.
    pub fn has_attr(&self, py: Python<'_>, name: &str) -> Result<bool> {
        Ok(self.module(py)?.hasattr(name)?)
    }

    /// Call a function of the underlying module with positional
    /// arguments.
    pub fn call_function(
        &self,
        py: Python<'_>,
        name: &str,
        args: impl IntoPy<Py<PyTuple>>,
    ) -> Result<PyObject> {
        Ok(self.module(py)?.getattr(name)?.call1(args)?.into())
    }

    /// Assign an attribute on the underlying module.
    ///
    /// The metadata attributes in [`PROTECTED_ATTRS`] are read-only
    /// projections and always fail, whatever state the handle is in.
    pub fn set_attr(&self, py: Python<'_>, name: &str, value: impl ToPyObject) -> Result<()> {
        if PROTECTED_ATTRS.contains(&name) {
            return Err(G2ShimError::AttributeNotSettable {
                name: name.to_string(),
            });
        }
        self.module(py)?.setattr(name, value)?;
        Ok(())
    }

    /// Delete an attribute of the underlying module. Same protection
    /// rule as [`set_attr`](Self::set_attr).
    pub fn del_attr(&self, py: Python<'_>, name: &str) -> Result<()> {
        if PROTECTED_ATTRS.contains(&name) {
            return Err(G2ShimError::AttributeNotSettable {
                name: name.to_string(),
            });
        }
        self.module(py)?.delattr(name)?;
        Ok(())
    }
}

impl Default for ScriptableModule {
    /// An unconfigured handle: no locator run, no interpreter touched.
    fn default() -> Self {
        Self {
            module_name: DEFAULT_MODULE_NAME.to_string(),
            install_dir: None,
            module: GILOnceCell::new(),
        }
    }
}

impl fmt::Debug for ScriptableModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptableModule")
            .field("module_name", &self.module_name)
            .field("install_dir", &self.install_dir)
            .finish_non_exhaustive()
    }
}
