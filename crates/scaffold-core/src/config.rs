//! Generator configuration.
//!
//! Resolved settings for one scaffolding run: where templates come from,
//! where output goes, and what happens when a template read or file write
//! fails.
//!
//! # Examples
//!
//! ```
//! use scaffold_core::{FailurePolicy, GeneratorConfig};
//! use std::path::PathBuf;
//!
//! let config = GeneratorConfig {
//!     output_root: PathBuf::from("/tmp/tools"),
//!     ..Default::default()
//! };
//!
//! assert_eq!(config.failure_policy, FailurePolicy::Continue);
//! assert!(config.template_dir.is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// What to do when a template cannot be read or a file cannot be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Skip the affected output, record a warning, finish everything else.
    #[default]
    Continue,
    /// Stop the run at the first failure.
    Abort,
}

impl FailurePolicy {
    /// Returns the string representation of the policy.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Continue => "continue",
            Self::Abort => "abort",
        }
    }

    /// Returns `true` if failures stop the run.
    #[must_use]
    pub const fn is_abort(&self) -> bool {
        matches!(self, Self::Abort)
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailurePolicy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "continue" => Ok(Self::Continue),
            "abort" => Ok(Self::Abort),
            _ => Err(crate::Error::InvalidArgument(format!(
                "invalid failure policy: '{s}' (expected: continue or abort)"
            ))),
        }
    }
}

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Directory holding template files.
    ///
    /// `None` uses the templates compiled into the binary.
    pub template_dir: Option<PathBuf>,

    /// Directory under which `<tool-name>/` is created.
    /// Default: current directory
    pub output_root: PathBuf,

    /// Failure handling for template reads and file writes.
    /// Default: [`FailurePolicy::Continue`]
    pub failure_policy: FailurePolicy,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            template_dir: None,
            output_root: PathBuf::from("."),
            failure_policy: FailurePolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_root, PathBuf::from("."));
        assert_eq!(config.failure_policy, FailurePolicy::Continue);
        assert!(config.template_dir.is_none());
    }

    #[test]
    fn test_failure_policy_parsing() {
        assert_eq!(
            "abort".parse::<FailurePolicy>().unwrap(),
            FailurePolicy::Abort
        );
        assert_eq!(
            "Continue".parse::<FailurePolicy>().unwrap(),
            FailurePolicy::Continue
        );
        assert!("retry".parse::<FailurePolicy>().is_err());
    }

    #[test]
    fn test_failure_policy_display() {
        assert_eq!(FailurePolicy::Abort.to_string(), "abort");
        assert!(FailurePolicy::Abort.is_abort());
        assert!(!FailurePolicy::Continue.is_abort());
    }
}
