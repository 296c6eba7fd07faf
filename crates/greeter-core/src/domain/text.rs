/// Whitespace as form input sees it: Unicode whitespace plus the ASCII
/// information separators U+001C..=U+001F.
pub fn is_form_whitespace(ch: char) -> bool {
    ch.is_whitespace() || ('\x1c'..='\x1f').contains(&ch)
}

/// Collapses every run of whitespace to a single space and trims both ends.
pub fn normalize_space(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for segment in raw.split(is_form_whitespace).filter(|part| !part.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(segment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{is_form_whitespace, normalize_space};

    #[test]
    fn normalize_space_collapses_and_trims() {
        assert_eq!(normalize_space("  a   b  "), "a b");
    }

    #[test]
    fn normalize_space_handles_tabs_and_newlines() {
        assert_eq!(normalize_space("\tAda\n\n Lovelace \r\n"), "Ada Lovelace");
    }

    #[test]
    fn normalize_space_empty_and_blank() {
        assert_eq!(normalize_space(""), "");
        assert_eq!(normalize_space(" \t \n"), "");
    }

    #[test]
    fn normalize_space_treats_separators_as_whitespace() {
        assert_eq!(normalize_space("\x1f"), "");
        assert_eq!(normalize_space("a@b.c\x1f"), "a@b.c");
        assert_eq!(normalize_space("Mary\x1c\x1dAnn"), "Mary Ann");
        assert!(is_form_whitespace('\x1e'));
        assert!(is_form_whitespace('\u{85}'));
        assert!(!is_form_whitespace('\x1b'));
    }

    #[test]
    fn normalize_space_is_idempotent() {
        let samples = ["", " ", "K ", "  Mary   Ann ", "O'Brien", "a\u{00a0}\u{2003}b", "x\ty\nz", "\x1fK\x1c"];
        for sample in samples {
            let once = normalize_space(sample);
            assert_eq!(normalize_space(&once), once, "sample {sample:?}");
        }
    }
}
