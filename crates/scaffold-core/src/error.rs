//! Error types for tool scaffolding.
//!
//! One error hierarchy is shared by the core and code generation crates so
//! the CLI can classify failures without matching on strings.
//!
//! # Examples
//!
//! ```
//! use scaffold_core::{Error, Result};
//!
//! fn require_name(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::ValidationError {
//!             field: "name".to_string(),
//!             reason: "cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_name("").unwrap_err();
//! assert!(err.is_validation_error());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tool scaffolding.
#[derive(Error, Debug)]
pub enum Error {
    /// Validation error for user-supplied names and identifiers.
    ///
    /// Raised when a tool name or step id is empty after PascalCase
    /// sanitization, contains path characters, or repeats an earlier step.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },

    /// Invalid argument error.
    ///
    /// Raised when CLI arguments or function parameters are invalid.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error.
    ///
    /// Raised when the settings file cannot be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// A template resource could not be read.
    #[error("Template '{template}' is unavailable")]
    TemplateUnavailable {
        /// Name of the template that failed to load
        template: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A template contains a placeholder that was not bound for it.
    ///
    /// This is a programming error: every placeholder a template uses must
    /// be part of the replacement set built for that template.
    #[error("Template '{template}' uses placeholder {placeholder} which has no binding")]
    UnboundPlaceholder {
        /// Name of the template being rendered
        template: String,
        /// Literal token found in the template
        placeholder: String,
    },

    /// A generated file could not be written.
    #[error("Failed to write {}: {message}", path.display())]
    OutputFailed {
        /// Destination path of the failed write
        path: PathBuf,
        /// Description of the failure
        message: String,
    },
}

impl Error {
    /// Returns `true` if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_core::Error;
    ///
    /// let err = Error::ValidationError {
    ///     field: "step id".to_string(),
    ///     reason: "empty".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if this is a configuration error.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if a template could not be loaded.
    #[must_use]
    pub const fn is_template_unavailable(&self) -> bool {
        matches!(self, Self::TemplateUnavailable { .. })
    }

    /// Returns `true` if this error signals a template/binding mismatch.
    ///
    /// These are integration defects rather than user mistakes.
    #[must_use]
    pub const fn is_programming_error(&self) -> bool {
        matches!(self, Self::UnboundPlaceholder { .. })
    }

    /// Returns `true` if this error was caused by user input.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_core::Error;
    ///
    /// assert!(Error::InvalidArgument("bad".into()).is_user_error());
    /// ```
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ValidationError { .. } | Self::InvalidArgument(_) | Self::ConfigError { .. }
        )
    }
}

/// Type alias for `Result` with the scaffolding error type.
pub type Result<T> = std::result::Result<T, Error>;
