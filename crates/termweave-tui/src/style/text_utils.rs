//! Display-width helpers

use unicode_width::UnicodeWidthChar;

/// Number of terminal cells a character occupies.
///
/// Control and zero-width characters take no cells.
pub fn char_width(c: char) -> usize {
    UnicodeWidthChar::width(c).unwrap_or(0)
}

/// Number of terminal cells a string occupies.
///
/// Always the sum of [`char_width`] over its characters, so wrapping,
/// truncation and measurement agree on every glyph, including emoji
/// presentation and ZWJ sequences.
pub fn str_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widths() {
        assert_eq!(char_width('a'), 1);
        assert_eq!(char_width('日'), 2);
        assert_eq!(char_width('\u{0301}'), 0);
        assert_eq!(str_width("日本語"), 6);
    }

    #[test]
    fn test_str_width_matches_char_sum() {
        for s in ["e\u{301}", "\u{2764}\u{FE0F}", "👩\u{200D}💻", "a\u{200B}b", "日本"] {
            let sum: usize = s.chars().map(char_width).sum();
            assert_eq!(str_width(s), sum, "{:?}", s);
        }
        assert_eq!(str_width("\u{2764}\u{FE0F}\u{2764}\u{FE0F}"), 2);
    }
}
