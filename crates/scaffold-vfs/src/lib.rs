//! Virtual filesystem for generated tool files.
//!
//! Generated files are collected in memory first and written to disk in one
//! concurrent export, so a run never leaves directories behind for outputs
//! it did not produce.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod builder;
pub mod export;
pub mod types;
pub mod vfs;

pub use builder::VfsBuilder;
pub use export::{ExportFailure, ExportReport};
pub use types::{Result, VfsError, VfsFile, VfsPath};
pub use vfs::Vfs;
