use regex::Regex;
use std::sync::OnceLock;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

// Shape check only: local@domain.tld with no whitespace (including the
// U+001C..=U+001F separators) and no extra '@'.
fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s\x1c-\x1f@]+@[^\s\x1c-\x1f@]+\.[^\s\x1c-\x1f@]+$")
            .expect("email pattern compiles")
    })
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_simple_address() {
        assert!(is_valid_email("x@y.com"));
        assert!(is_valid_email("name@company.co.uk"));
    }

    #[test]
    fn rejects_domain_without_dot() {
        assert!(!is_valid_email("x@y"));
    }

    #[test]
    fn rejects_empty_local_part() {
        assert!(!is_valid_email("@y.com"));
    }

    #[test]
    fn rejects_whitespace_and_extra_at() {
        assert!(!is_valid_email("x y@z.com"));
        assert!(!is_valid_email("x@@y.com"));
        assert!(!is_valid_email("x@y@z.com"));
    }

    #[test]
    fn rejects_separator_characters() {
        assert!(!is_valid_email("a@b.c\x1f"));
        assert!(!is_valid_email("a\x1cb@c.com"));
    }

    #[test]
    fn keeps_permissive_shape() {
        assert!(is_valid_email("a@b..com"));
        assert!(!is_valid_email("\"a b\"@example.com"));
    }
}
