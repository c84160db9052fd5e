//! `LANG=TEXT` arguments.

use crate::store::Translations;

/// Parses one `LANG=TEXT` argument. `TEXT` may be empty or contain `=`.
pub(crate) fn parse_assignment(arg: &str) -> Result<(String, String), String> {
    let (language, translation) =
        arg.split_once('=').ok_or_else(|| format!("expected LANG=TEXT, got '{arg}'"))?;
    if language.trim().is_empty() {
        return Err(format!("missing language name in '{arg}'"));
    }
    Ok((language.to_string(), translation.to_string()))
}

/// Collects parsed assignments; a repeated language keeps its last value.
pub(crate) fn into_translations(assignments: &[(String, String)]) -> Translations {
    assignments.iter().cloned().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    /// Language before the first `=`, everything after is the text
    #[rstest]
    #[case::simple("fr=Bonjour", "fr", "Bonjour")]
    #[case::empty_text("fr=", "fr", "")]
    #[case::equals_in_text("en=a=b", "en", "a=b")]
    #[case::spaces("de=Guten Tag", "de", "Guten Tag")]
    fn parses_valid_assignment(#[case] arg: &str, #[case] language: &str, #[case] text: &str) {
        let (parsed_language, parsed_text) = parse_assignment(arg).unwrap();

        assert_that!(parsed_language, eq(language));
        assert_that!(parsed_text, eq(text));
    }

    /// Missing `=` or language is rejected
    #[rstest]
    #[case::no_equals("fr", "expected LANG=TEXT")]
    #[case::no_language("=Bonjour", "missing language")]
    fn rejects_invalid_assignment(#[case] arg: &str, #[case] message: &str) {
        assert_that!(parse_assignment(arg), err(contains_substring(message)));
    }

    /// Later assignments win, first position is kept
    #[rstest]
    fn repeated_language_keeps_last_value() {
        let assignments = vec![
            ("fr".to_string(), "Salut".to_string()),
            ("de".to_string(), "Hallo".to_string()),
            ("fr".to_string(), "Bonjour".to_string()),
        ];

        let translations = into_translations(&assignments);

        assert_that!(translations.len(), eq(2));
        assert_that!(translations.get("fr").map(String::as_str), some(eq("Bonjour")));
        assert_that!(translations.get_index(0).map(|(l, _)| l.as_str()), some(eq("fr")));
    }
}
