//! g2shim - Locates a local GSAS-II installation and lazily exposes its
//! Python scripting module.
//!
//! GSAS-II ships as a Python code base dropped into a conda environment
//! or a home directory, not as an importable package. This crate papers
//! over that: it scans the conventional install locations for the
//! `GSASII/GSASIIscriptable.py` marker, adds the discovered directory to
//! the embedded interpreter's module search path, and hands out a
//! [`ScriptableModule`] handle that defers the actual import until first
//! use.
//!
//! # Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`locate`] - Installation discovery (candidate scan, conda heuristics)
//! - [`module`] - Lazy handle for the scripting module
//! - [`python`] - Embedded interpreter helpers (`sys.executable`, `sys.path`)
//!
//! # Example
//!
//! ```no_run
//! use pyo3::Python;
//! use g2shim::{locate, ScriptableModule};
//!
//! Python::with_gil(|py| -> g2shim::Result<()> {
//!     // Explicit discovery...
//!     let gsasdir = locate::locate(py, &["/opt/tools".into()], true)?;
//!     println!("GSAS-II lives in {}", gsasdir.display());
//!
//!     // ...or the lazy handle, which finds it on its own.
//!     let gsas = ScriptableModule::new(py);
//!     let project_type = gsas.attr(py, "G2Project")?;
//!     Ok(())
//! }).unwrap();
//! ```
//!
//! Both the locator (on success, when asked) and the handle's first use
//! append to `sys.path`. That is the crate's one process-wide side
//! effect, intentional and documented; nothing persists beyond the
//! process.

pub mod error;
pub mod locate;
pub mod module;
pub mod python;

pub use error::{G2ShimError, Result};
pub use module::{ModuleState, ScriptableModule};
