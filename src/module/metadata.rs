//! Read-only projections of the underlying module's metadata.
//!
//! Python modules carry their own bookkeeping (`__name__`, `__file__`,
//! `__spec__`, ...). These accessors expose that bookkeeping through the
//! handle without offering any way to write it back; assignment attempts
//! go through [`ScriptableModule::set_attr`](super::ScriptableModule::set_attr)
//! and are rejected for every name listed in [`PROTECTED_ATTRS`].
//!
//! Every accessor triggers the lazy import, exactly like a plain
//! attribute read.

use std::path::PathBuf;

use pyo3::types::PyModule;
use pyo3::{PyObject, Python};

use super::ScriptableModule;
use crate::error::Result;

/// Module metadata attributes that can be read but never assigned or
/// deleted through the handle.
pub const PROTECTED_ATTRS: [&str; 11] = [
    "__builtins__",
    "__cached__",
    "__dir__",
    "__doc__",
    "__file__",
    "__loader__",
    "__name__",
    "__package__",
    "__repr__",
    "__spec__",
    "__warningregistry__",
];

impl ScriptableModule {
    /// The underlying module's `__name__`.
    pub fn name(&self, py: Python<'_>) -> Result<String> {
        Ok(self.module(py)?.getattr("__name__")?.extract()?)
    }

    /// The underlying module's `__package__`.
    pub fn package(&self, py: Python<'_>) -> Result<Option<String>> {
        Ok(self.module(py)?.getattr("__package__")?.extract()?)
    }

    /// Path of the file the module was loaded from, when it has one.
    pub fn file(&self, py: Python<'_>) -> Result<Option<PathBuf>> {
        let file: Option<String> = self.module(py)?.getattr("__file__")?.extract()?;
        Ok(file.map(PathBuf::from))
    }

    /// The underlying module's docstring.
    pub fn doc(&self, py: Python<'_>) -> Result<Option<String>> {
        Ok(self.module(py)?.getattr("__doc__")?.extract()?)
    }

    /// Path of the cached bytecode file, when the loader recorded one.
    pub fn cached(&self, py: Python<'_>) -> Result<Option<String>> {
        optional_attr(self.module(py)?, "__cached__")
    }

    /// The loader that imported the module.
    pub fn loader(&self, py: Python<'_>) -> Result<PyObject> {
        Ok(self.module(py)?.getattr("__loader__")?.into())
    }

    /// The module's import spec.
    pub fn spec(&self, py: Python<'_>) -> Result<PyObject> {
        Ok(self.module(py)?.getattr("__spec__")?.into())
    }

    /// The module's `__builtins__` namespace.
    pub fn builtins(&self, py: Python<'_>) -> Result<PyObject> {
        Ok(self.module(py)?.getattr("__builtins__")?.into())
    }

    /// The module's warning registry, once warnings have populated it.
    pub fn warning_registry(&self, py: Python<'_>) -> Result<Option<PyObject>> {
        let module = self.module(py)?;
        if module.hasattr("__warningregistry__")? {
            Ok(Some(module.getattr("__warningregistry__")?.into()))
        } else {
            Ok(None)
        }
    }

    /// `repr()` of the underlying module.
    pub fn module_repr(&self, py: Python<'_>) -> Result<String> {
        Ok(self.module(py)?.repr()?.to_str()?.to_string())
    }

    /// `dir()` of the underlying module.
    pub fn dir_names(&self, py: Python<'_>) -> Result<Vec<String>> {
        Ok(self.module(py)?.dir().extract()?)
    }
}

/// Read a string attribute that may be absent altogether.
fn optional_attr(module: &PyModule, name: &str) -> Result<Option<String>> {
    if module.hasattr(name)? {
        Ok(module.getattr(name)?.extract()?)
    } else {
        Ok(None)
    }
}
