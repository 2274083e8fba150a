//! Placeholder tokens shared with the template files.
//!
//! Every semantic role a template can fill has exactly one literal marker.
//! The markers are fixed: existing template directories depend on them.
//! All tokens have the same shape (`<` + ten upper-case letters + `>`), so
//! none can be a substring of another.

use std::fmt;

/// A role that a template can leave open for substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placeholder {
    /// Tool name as entered
    Name,
    /// PascalCase tool name
    NamePascal,
    /// Tool display name
    DisplayName,
    /// Type-union listing of step value types
    StepsType,
    /// Default-object listing of step keys
    StepsObject,
    /// Activation call listing
    StepsCode,
    /// Step import listing
    StepsImports,
    /// PascalCase step id
    StepName,
    /// Step id as entered
    StepId,
    /// Step id lower-cased, hyphens and periods removed
    StepIdLowerCase,
    /// Numbered step title
    StepDisplayName,
    /// Maintenance flag (`true` / `false`)
    Maintenance,
    /// Additions to the step definition import list
    SubStepImports,
    /// Sub-step interface extension clause
    SubStepExtend,
    /// Rendered sub-step code
    SubStepCode,
    /// Sub-step constructor statement
    SubStepConstructor,
    /// Extra class field declarations
    SubStepExtraClass,
    /// Extra window import line
    ExtraWindowImport,
    /// Extra window constructor block
    ExtraWindowConstructor,
    /// Extra window DOM id
    ExtraWindowId,
    /// JSON importer import line
    JsonImporterImport,
    /// Per-step Excel export snippets
    ExcelExportSnippet,
    /// Per-step Excel export methods
    ExcelExportFunction,
    /// Per-step Excel exporter imports
    ExcelExportImports,
    /// Exporter activation call in the tool
    ExcelExportAdd,
    /// Exporter import line in the tool
    ExcelExportImport,
}

impl Placeholder {
    /// Every known placeholder.
    pub const ALL: [Self; 26] = [
        Self::Name,
        Self::NamePascal,
        Self::DisplayName,
        Self::StepsType,
        Self::StepsObject,
        Self::StepsCode,
        Self::StepsImports,
        Self::StepName,
        Self::StepId,
        Self::StepIdLowerCase,
        Self::StepDisplayName,
        Self::Maintenance,
        Self::SubStepImports,
        Self::SubStepExtend,
        Self::SubStepCode,
        Self::SubStepConstructor,
        Self::SubStepExtraClass,
        Self::ExtraWindowImport,
        Self::ExtraWindowConstructor,
        Self::ExtraWindowId,
        Self::JsonImporterImport,
        Self::ExcelExportSnippet,
        Self::ExcelExportFunction,
        Self::ExcelExportImports,
        Self::ExcelExportAdd,
        Self::ExcelExportImport,
    ];

    /// Returns the literal marker for this placeholder.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_codegen::Placeholder;
    ///
    /// assert_eq!(Placeholder::Name.token(), "<GQGAKTYFMU>");
    /// ```
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Name => "<GQGAKTYFMU>",
            Self::NamePascal => "<EPHAFPJMNO>",
            Self::DisplayName => "<GTIITEGVHM>",
            Self::StepsType => "<EEAJOESUNA>",
            Self::StepsObject => "<DYOZJAQJZS>",
            Self::StepsCode => "<HMZOHQRXPU>",
            Self::StepsImports => "<CYGNPBTJHG>",
            Self::StepName => "<KDEPRPMGKG>",
            Self::StepId => "<GGHPKHMEQV>",
            Self::StepIdLowerCase => "<ONQIWPWAZK>",
            Self::StepDisplayName => "<CLAYJUMPJR>",
            Self::Maintenance => "<YDLXOYVBGG>",
            Self::SubStepImports => "<CJGTJNYRQY>",
            Self::SubStepExtend => "<DOUFGUACEX>",
            Self::SubStepCode => "<XNZTLZNVWG>",
            Self::SubStepConstructor => "<JFOAACOIED>",
            Self::SubStepExtraClass => "<LHDXTCHDDA>",
            Self::ExtraWindowImport => "<SRXXEQMYCJ>",
            Self::ExtraWindowConstructor => "<KHAQMATZEZ>",
            Self::ExtraWindowId => "<TCLTINWSSI>",
            Self::JsonImporterImport => "<VVWYXXOWYW>",
            Self::ExcelExportSnippet => "<BJQQEFIPWA>",
            Self::ExcelExportFunction => "<IWDJGMFWRS>",
            Self::ExcelExportImports => "<IWHMAOLWRS>",
            Self::ExcelExportAdd => "<UCOLCBBPMD>",
            Self::ExcelExportImport => "<XZLXUFLQAW>",
        }
    }

    /// Looks up the placeholder for a literal marker.
    ///
    /// # Examples
    ///
    /// ```
    /// use scaffold_codegen::Placeholder;
    ///
    /// assert_eq!(Placeholder::from_token("<GGHPKHMEQV>"), Some(Placeholder::StepId));
    /// assert_eq!(Placeholder::from_token("<NOTATOKEN>"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.token() == token)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tokens_are_unique() {
        let tokens: HashSet<_> = Placeholder::ALL.iter().map(|p| p.token()).collect();
        assert_eq!(tokens.len(), Placeholder::ALL.len());
    }

    #[test]
    fn test_no_token_contains_another() {
        for a in Placeholder::ALL {
            for b in Placeholder::ALL {
                if a != b {
                    assert!(
                        !a.token().contains(b.token()),
                        "{a:?} contains {b:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_tokens_share_one_shape() {
        for p in Placeholder::ALL {
            let token = p.token();
            assert_eq!(token.len(), 12, "{p:?}");
            assert!(token.starts_with('<') && token.ends_with('>'));
            assert!(token[1..11].chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_from_token_roundtrip() {
        for p in Placeholder::ALL {
            assert_eq!(Placeholder::from_token(p.token()), Some(p));
        }
    }
}
