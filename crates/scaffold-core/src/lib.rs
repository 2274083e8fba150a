//! Core types and errors for tool scaffolding.
//!
//! This crate provides the foundational types used by the code generator,
//! the virtual filesystem and the `create-tool` CLI.
//!
//! # Architecture
//!
//! The core consists of:
//! - PascalCase conversion for user-supplied identifiers
//! - Validated names (`ToolName`, `StepId`)
//! - The collected tool description (`ToolSpec`, `StepSpec`)
//! - Error hierarchy with contextual information
//! - Run configuration and CLI types

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod casing;
mod config;
mod error;
mod spec;
mod types;

pub mod cli;

pub use casing::to_pascal_case;
pub use config::{FailurePolicy, GeneratorConfig};
pub use error::{Error, Result};
pub use spec::{ExtraWindow, StepSpec, ToolSpec, ToolSpecBuilder};
pub use types::{StepId, ToolName};
