use crate::g2p::diacritics::all_vowel_letters;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

const CONSONANT_LETTERS: &str = "bcdđghklmnpqrstvx";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = ".,!?;:'\"-_";

const DIGIT_WORDS: [&str; 10] = [
    "không", "một", "hai", "ba", "bốn", "năm", "sáu", "bảy", "tám", "chín",
];

pub fn get_allowed_chars() -> HashSet<char> {
    all_vowel_letters()
        .chain(CONSONANT_LETTERS.chars())
        .chain(DIGITS.chars())
        .chain(PUNCTUATION.chars())
        .collect()
}

lazy_static! {
    pub static ref ALLOWED_CHARS: HashSet<char> = get_allowed_chars();
    static ref WHITESPACE_RE: Regex = Regex::new(r"\s+").unwrap();
    static ref DIGITS_RE: Regex = Regex::new(r"[0-9]+").unwrap();
}

/// Lowercases, composes to NFC, drops everything outside the Vietnamese
/// alphabet, digits and basic punctuation, and collapses whitespace.
pub fn normalize_text(text: &str) -> String {
    let text: String = text
        .to_lowercase()
        .nfc()
        .filter(|c| ALLOWED_CHARS.contains(c) || c.is_whitespace())
        .collect();

    WHITESPACE_RE.replace_all(&text, " ").trim().to_string()
}

/// Spells out numbers below ten. Longer digit runs are kept verbatim.
pub fn expand_digits(text: &str) -> String {
    DIGITS_RE
        .replace_all(text, |caps: &Captures| {
            let digits = &caps[0];
            match digits.parse::<usize>() {
                Ok(n) if n < DIGIT_WORDS.len() => DIGIT_WORDS[n].to_string(),
                _ => digits.to_string(),
            }
        })
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("Xin chào thế giới!"), "xin chào thế giới!");
        assert_eq!(normalize_text("TIẾNG VIỆT rất hay."), "tiếng việt rất hay.");
        assert_eq!(
            normalize_text("Học máy  và \t trí tuệ\nnhân tạo."),
            "học máy và trí tuệ nhân tạo."
        );
        assert_eq!(normalize_text("(NLP) là @ 100%"), "nlp là 100");
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn test_decomposed_input_is_composed() {
        // "a" + combining acute, "e" + circumflex + dot below
        let decomposed = "ta\u{301}c vie\u{302}\u{323}t";
        assert_eq!(normalize_text(decomposed), "tác việt");
    }

    #[test]
    fn test_foreign_letters_are_dropped() {
        assert_eq!(normalize_text("jazz wifi"), "a ii");
        assert_eq!(normalize_text("中文 ok"), "ok");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for text in [
            "Xin chào thế giới!",
            "  Ông  ĐỖ   Văn-Bình_2024 ; ok?  ",
            "ta\u{301}c \u{130}stanbul \u{a0} xyz",
            "\"Quý\" khách: 'người' đẹp...",
            "",
        ] {
            let once = normalize_text(text);
            assert_eq!(normalize_text(&once), once, "{:?}", text);
        }
    }

    #[test]
    fn test_expand_digits() {
        assert_eq!(expand_digits("có 3 con mèo"), "có ba con mèo");
        assert_eq!(expand_digits("0 và 9"), "không và chín");
        assert_eq!(expand_digits("năm 2024"), "năm 2024");
        assert_eq!(expand_digits("không số"), "không số");
    }
}
