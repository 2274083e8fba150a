//! Identifier casing.
//!
//! Turns free-form user input (kebab-case, snake_case, loose text) into the
//! PascalCase identifiers used for generated type, class and file names.

/// Converts `input` to a PascalCase identifier.
///
/// The input is lower-cased, hyphen/underscore runs become word breaks,
/// anything that is not an ASCII letter, digit or whitespace is dropped, and
/// every remaining word is capitalized and concatenated. Non-ASCII letters
/// and number forms such as `½` never reach an identifier.
///
/// Returns an empty string when nothing usable is left; callers that need a
/// non-empty identifier validate through [`crate::ToolName`] or
/// [`crate::StepId`].
///
/// # Examples
///
/// ```
/// use scaffold_core::to_pascal_case;
///
/// assert_eq!(to_pascal_case("swot-criterias"), "SwotCriterias");
/// assert_eq!(to_pascal_case("my_cool tool!!"), "MyCoolTool");
/// assert_eq!(to_pascal_case("SWOT-Analyse"), "SwotAnalyse");
/// assert_eq!(to_pascal_case(""), "");
/// ```
#[must_use]
pub fn to_pascal_case(input: &str) -> String {
    input
        .to_lowercase()
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .map(|word| {
            word.chars()
                .filter(char::is_ascii_alphanumeric)
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .map(|word| capitalize(&word))
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        std::iter::once(first.to_ascii_uppercase())
            .chain(chars)
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_pascal_case("swot-criterias"), "SwotCriterias");
        assert_eq!(to_pascal_case("swot-analysis"), "SwotAnalysis");
    }

    #[test]
    fn test_mixed_separators_and_punctuation() {
        assert_eq!(to_pascal_case("my_cool tool!!"), "MyCoolTool");
        assert_eq!(to_pascal_case("a--b__c"), "ABC");
        assert_eq!(to_pascal_case("  leading and trailing  "), "LeadingAndTrailing");
    }

    #[test]
    fn test_existing_case_is_flattened() {
        assert_eq!(to_pascal_case("camelCaseInput"), "Camelcaseinput");
        assert_eq!(to_pascal_case("SWOT"), "Swot");
    }

    #[test]
    fn test_punctuation_inside_word_joins() {
        assert_eq!(to_pascal_case("step.one"), "Stepone");
        assert_eq!(to_pascal_case("v2-matrix"), "V2Matrix");
    }

    #[test]
    fn test_non_ascii_characters_are_dropped() {
        assert_eq!(to_pascal_case("über-sicht"), "BerSicht");
        assert_eq!(to_pascal_case("½-step"), "Step");
        assert_eq!(to_pascal_case("step-Ⅳ"), "Step");
        assert_eq!(to_pascal_case("²nd-step"), "NdStep");
        assert_eq!(to_pascal_case("½"), "");
    }

    #[test]
    fn test_empty_and_unusable_input() {
        assert_eq!(to_pascal_case(""), "");
        assert_eq!(to_pascal_case("!!! ---"), "");
        assert_eq!(to_pascal_case("_"), "");
    }
}
