use regex::Regex;
use std::sync::OnceLock;

use crate::domain::text::normalize_space;

static SINGLE_INITIAL_REGEX: OnceLock<Regex> = OnceLock::new();

fn single_initial_regex() -> &'static Regex {
    SINGLE_INITIAL_REGEX.get_or_init(|| {
        Regex::new(r"^[A-Z][\s\x1c-\x1f]+$").expect("single initial pattern compiles")
    })
}

/// A name as typed alongside its whitespace-normalized form.
///
/// `raw` is kept untouched: it is what ends up in the generated SQL and it is
/// the only place a trailing space (the single-initial workaround) survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameField {
    raw: String,
    normalized: String,
}

impl NameField {
    pub fn new(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            normalized: normalize_space(raw),
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    pub fn is_single_character(&self) -> bool {
        single_char(&self.normalized).is_some()
    }
}

/// True when a name of two or more letters has no case variation.
///
/// Only alphabetic characters are considered, so "O'Brien" is judged on
/// "OBrien". Names with at most one letter are left to the single-character
/// policy.
pub fn looks_like_bad_name_case(value: &str) -> bool {
    let normalized = normalize_space(value);
    let letters: Vec<char> = normalized.chars().filter(|ch| ch.is_alphabetic()).collect();
    if letters.len() <= 1 {
        return false;
    }
    letters.iter().all(|ch| ch.is_lowercase()) || letters.iter().all(|ch| ch.is_uppercase())
}

/// One uppercase ASCII letter followed by trailing whitespace, e.g. `"K "`.
pub fn is_allowed_single_initial(raw: &str) -> bool {
    single_initial_regex().is_match(raw)
}

pub fn is_single_lowercase(normalized: &str) -> bool {
    single_char(normalized).is_some_and(char::is_lowercase)
}

fn single_char(value: &str) -> Option<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{is_allowed_single_initial, is_single_lowercase, looks_like_bad_name_case, NameField};

    #[test]
    fn bad_case_flags_uniform_names() {
        assert!(looks_like_bad_name_case("john"));
        assert!(looks_like_bad_name_case("JOHN"));
        assert!(looks_like_bad_name_case("mary ann"));
        assert!(looks_like_bad_name_case("JEAN-LUC"));
    }

    #[test]
    fn bad_case_allows_mixed_case() {
        assert!(!looks_like_bad_name_case("John"));
        assert!(!looks_like_bad_name_case("McDonald"));
        assert!(!looks_like_bad_name_case("O'Brien"));
        assert!(!looks_like_bad_name_case("jOHN"));
    }

    #[test]
    fn bad_case_skips_single_letters() {
        assert!(!looks_like_bad_name_case("J"));
        assert!(!looks_like_bad_name_case("j"));
        assert!(!looks_like_bad_name_case("j."));
        assert!(!looks_like_bad_name_case(""));
        assert!(!looks_like_bad_name_case("42"));
    }

    #[test]
    fn bad_case_ignores_uncased_scripts() {
        assert!(!looks_like_bad_name_case("李小龙"));
    }

    #[test]
    fn single_initial_requires_trailing_space() {
        assert!(is_allowed_single_initial("K "));
        assert!(is_allowed_single_initial("K \t "));
        assert!(is_allowed_single_initial("K\x1f"));
        assert!(!is_allowed_single_initial("K"));
        assert!(!is_allowed_single_initial(" K "));
        assert!(!is_allowed_single_initial("KK "));
        assert!(!is_allowed_single_initial(""));
    }

    #[test]
    fn single_initial_requires_uppercase_ascii() {
        assert!(!is_allowed_single_initial("k "));
        assert!(!is_allowed_single_initial("Ä "));
        assert!(!is_allowed_single_initial("1 "));
    }

    #[test]
    fn single_lowercase_detects_one_lowercase_char() {
        assert!(is_single_lowercase("k"));
        assert!(!is_single_lowercase("K"));
        assert!(!is_single_lowercase("ki"));
        assert!(!is_single_lowercase("."));
        assert!(!is_single_lowercase(""));
    }

    #[test]
    fn name_field_keeps_raw_and_normalized() {
        let field = NameField::new("  Mary   Ann ");
        assert_eq!(field.raw(), "  Mary   Ann ");
        assert_eq!(field.normalized(), "Mary Ann");
        assert!(!field.is_empty());
        assert!(!field.is_single_character());

        let initial = NameField::new("K ");
        assert!(initial.is_single_character());
        assert!(NameField::new("   ").is_empty());
    }
}
