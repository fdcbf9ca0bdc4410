//! pkgsize - package index footprint estimator
//!
//! Sums the release sizes of the most-downloaded packages of a package
//! index, keeping a local cache of per-package sizes between runs.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod estimate;
pub mod registry;
pub mod ui;

pub use error::{PkgSizeError, PkgSizeResult};
