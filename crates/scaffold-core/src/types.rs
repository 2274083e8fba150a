//! Validated name types.
//!
//! Tool names and step ids end up in directory names, file names and
//! generated identifiers, so both are validated once at construction and
//! carry their PascalCase form alongside the raw value.
//!
//! # Examples
//!
//! ```
//! use scaffold_core::{StepId, ToolName};
//!
//! let tool = ToolName::new("swot-analysis").unwrap();
//! assert_eq!(tool.pascal_case(), "SwotAnalysis");
//!
//! let step = StepId::new("swot-criterias").unwrap();
//! assert_eq!(step.pascal_case(), "SwotCriterias");
//! assert_eq!(step.css_token(), "swotcriterias");
//! ```

use crate::casing::to_pascal_case;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Validates a raw identifier and returns its trimmed form and PascalCase form.
fn validate_identifier(field: &str, raw: &str) -> Result<(String, String)> {
    if raw.chars().any(char::is_control) {
        return Err(Error::ValidationError {
            field: field.to_string(),
            reason: "cannot contain control characters".to_string(),
        });
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::ValidationError {
            field: field.to_string(),
            reason: "cannot be empty".to_string(),
        });
    }

    if trimmed.contains(['/', '\\']) || trimmed.contains("..") {
        return Err(Error::ValidationError {
            field: field.to_string(),
            reason: format!("'{trimmed}' must not contain path separators or '..'"),
        });
    }

    let pascal = to_pascal_case(trimmed);
    if pascal.is_empty() {
        return Err(Error::ValidationError {
            field: field.to_string(),
            reason: format!("'{trimmed}' has no letters or digits to build an identifier from"),
        });
    }

    Ok((trimmed.to_string(), pascal))
}

/// Name of the tool being scaffolded.
///
/// The raw value names the output directory and the stylesheet; the
/// PascalCase form names the generated classes and main file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ToolName {
    raw: String,
    pascal: String,
}

impl ToolName {
    /// Creates a validated tool name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] if the name is empty, contains
    /// path characters, or has no alphanumeric content.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_core::ToolName;
    ///
    /// assert!(ToolName::new("swot-analysis").is_ok());
    /// assert!(ToolName::new("!!!").is_err());
    /// assert!(ToolName::new("../escape").is_err());
    /// ```
    pub fn new(name: impl AsRef<str>) -> Result<Self> {
        let (raw, pascal) = validate_identifier("tool name", name.as_ref())?;
        Ok(Self { raw, pascal })
    }

    /// Returns the name as entered (trimmed).
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the PascalCase form of the name.
    #[inline]
    #[must_use]
    pub fn pascal_case(&self) -> &str {
        &self.pascal
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for ToolName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ToolName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ToolName> for String {
    fn from(name: ToolName) -> Self {
        name.raw
    }
}

/// Identifier of a single workflow step (kebab-case expected).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StepId {
    raw: String,
    pascal: String,
}

impl StepId {
    /// Creates a validated step id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] under the same rules as
    /// [`ToolName::new`].
    pub fn new(id: impl AsRef<str>) -> Result<Self> {
        let (raw, pascal) = validate_identifier("step id", id.as_ref())?;
        Ok(Self { raw, pascal })
    }

    /// Returns the id as entered (trimmed).
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the PascalCase form of the id.
    #[inline]
    #[must_use]
    pub fn pascal_case(&self) -> &str {
        &self.pascal
    }

    /// Returns the id lower-cased with hyphens and periods removed.
    ///
    /// Used where the id has to be a bare identifier or CSS class name.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_core::StepId;
    ///
    /// let id = StepId::new("Step-1.2").unwrap();
    /// assert_eq!(id.css_token(), "step12");
    /// ```
    #[must_use]
    pub fn css_token(&self) -> String {
        self.raw.replace(['-', '.'], "").to_lowercase()
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for StepId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for StepId {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<StepId> for String {
    fn from(id: StepId) -> Self {
        id.raw
    }
}
