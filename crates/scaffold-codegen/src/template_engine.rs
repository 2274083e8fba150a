//! Placeholder substitution.
//!
//! Rendering replaces every occurrence of every bound placeholder in a
//! single left-to-right pass over the template text. Replacement values are
//! copied into the output verbatim and never scanned again, so a value that
//! happens to contain a marker keeps it.
//!
//! # Examples
//!
//! ```
//! use scaffold_codegen::{Placeholder, Replacements, TemplateEngine};
//!
//! let engine = TemplateEngine::new().unwrap();
//! let replacements = Replacements::new()
//!     .with(Placeholder::NamePascal, "SwotAnalysis")
//!     .with(Placeholder::DisplayName, "SWOT-Analyse");
//!
//! let text = engine.substitute("class <EPHAFPJMNO> /* <GTIITEGVHM> */", &replacements);
//! assert_eq!(text, "class SwotAnalysis /* SWOT-Analyse */");
//! ```

use crate::placeholder::Placeholder;
use crate::template::Template;
use regex::{Captures, Regex};
use scaffold_core::{Error, Result};
use tracing::warn;

/// Ordered placeholder bindings.
///
/// Binding a placeholder twice keeps the latest value, which is how
/// per-step values are re-bound for each step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    entries: Vec<(Placeholder, String)>,
}

impl Replacements {
    /// Creates an empty set of bindings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Binds `placeholder` to `value`, replacing an earlier binding.
    pub fn bind(&mut self, placeholder: Placeholder, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == placeholder) {
            entry.1 = value;
        } else {
            self.entries.push((placeholder, value));
        }
        self
    }

    /// Builder-style variant of [`Replacements::bind`].
    #[must_use]
    pub fn with(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.bind(placeholder, value);
        self
    }

    /// Copies every binding of `other` into `self`.
    pub fn extend(&mut self, other: &Self) -> &mut Self {
        for (placeholder, value) in &other.entries {
            self.bind(*placeholder, value.clone());
        }
        self
    }

    /// Returns the value bound to `placeholder`.
    #[must_use]
    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| *p == placeholder)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if `placeholder` is bound (possibly to an empty string).
    #[must_use]
    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.entries.iter().any(|(p, _)| *p == placeholder)
    }

    /// Number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Placeholder, &str)> {
        self.entries.iter().map(|(p, v)| (*p, v.as_str()))
    }
}

/// Substitution engine.
///
/// Holds the compiled matchers for the known placeholder markers and for
/// anything shaped like a marker.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    known: Regex,
    marker_shape: Regex,
}

impl TemplateEngine {
    /// Creates the engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the marker patterns fail to
    /// compile (should not happen with the built-in token table).
    pub fn new() -> Result<Self> {
        // Tokens are escaped, so the alternation matches them literally.
        let alternation = Placeholder::ALL
            .iter()
            .map(|p| regex::escape(p.token()))
            .collect::<Vec<_>>()
            .join("|");

        let known = Regex::new(&alternation)
            .map_err(|e| Error::InvalidArgument(format!("invalid placeholder pattern: {e}")))?;
        let marker_shape = Regex::new(r"<[A-Z]{10}>")
            .map_err(|e| Error::InvalidArgument(format!("invalid marker pattern: {e}")))?;

        Ok(Self {
            known,
            marker_shape,
        })
    }

    /// Replaces every bound placeholder in `text`.
    ///
    /// Unbound placeholders are left untouched; use [`TemplateEngine::render`]
    /// to reject them.
    #[must_use]
    pub fn substitute(&self, text: &str, replacements: &Replacements) -> String {
        self.known
            .replace_all(text, |caps: &Captures<'_>| {
                let token = &caps[0];
                Placeholder::from_token(token)
                    .and_then(|p| replacements.get(p))
                    .unwrap_or(token)
                    .to_string()
            })
            .into_owned()
    }

    /// Renders a template, requiring a binding for every placeholder it uses.
    ///
    /// Marker-shaped text that is not a known placeholder is logged, since it
    /// will survive into the output.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnboundPlaceholder`] if the template uses a
    /// placeholder that `replacements` does not bind.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_codegen::{Placeholder, Replacements, Template, TemplateEngine, TemplateName};
    ///
    /// let engine = TemplateEngine::new().unwrap();
    /// let template = Template::new(TemplateName::Tool, "<GQGAKTYFMU>/<EPHAFPJMNO>");
    ///
    /// let partial = Replacements::new().with(Placeholder::Name, "swot");
    /// assert!(engine.render(&template, &partial).is_err());
    ///
    /// let full = partial.with(Placeholder::NamePascal, "Swot");
    /// assert_eq!(engine.render(&template, &full).unwrap(), "swot/Swot");
    /// ```
    pub fn render(&self, template: &Template, replacements: &Replacements) -> Result<String> {
        if let Some(unbound) = template
            .placeholders()
            .into_iter()
            .find(|p| !replacements.contains(*p))
        {
            return Err(Error::UnboundPlaceholder {
                template: template.name().to_string(),
                placeholder: unbound.token().to_string(),
            });
        }

        for marker in self.unknown_markers(template.text()) {
            warn!(
                "Template '{}' contains unknown marker {marker}; it will not be replaced",
                template.name()
            );
        }

        Ok(self.substitute(template.text(), replacements))
    }

    /// Returns marker-shaped substrings of `text` that are not known placeholders.
    #[must_use]
    pub fn unknown_markers(&self, text: &str) -> Vec<String> {
        let mut markers: Vec<String> = self
            .marker_shape
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|m| Placeholder::from_token(m).is_none())
            .map(str::to_string)
            .collect();
        markers.sort_unstable();
        markers.dedup();
        markers
    }
}
