//! Splits a single token into initial consonant, vowel nucleus and final
//! consonant.
//!
//! The analyzer never fails. Tokens it cannot fully segment lose their
//! trailing characters, and tokens without a vowel come back with whatever
//! initial consonant could be matched (possibly nothing at all).

use crate::g2p::diacritics::{decompose, Tone};
use crate::g2p::segments::{FINAL_TRIE, INITIAL_TRIE, MAX_INITIAL_LEN, NUCLEUS_TRIE};

/// Longest vowel nucleus (a triphthong).
const MAX_NUCLEUS_LEN: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Syllable {
    pub initial: Option<&'static str>,
    pub nucleus: Option<&'static str>,
    pub final_consonant: Option<&'static str>,
    /// Tone carried by the nucleus.
    pub tone: Tone,
}

impl Syllable {
    /// Segments in spoken order, skipping the empty slots.
    pub fn segments(&self) -> Vec<&'static str> {
        [self.initial, self.nucleus, self.final_consonant]
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn spelling(&self) -> String {
        self.segments().concat()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// The token with every tone mark removed.
    pub toneless: String,
    /// Tone extracted from each character of the token, in order.
    pub char_tones: Vec<Tone>,
    /// Index of the last character carrying a tone mark, 0 when unmarked.
    pub tone_position: usize,
    pub syllable: Syllable,
    /// Characters left over after the nucleus that did not form a final.
    pub discarded: String,
}

impl Analysis {
    pub fn segments(&self) -> Vec<&'static str> {
        self.syllable.segments()
    }

    /// First tone mark reading the token left to right.
    ///
    /// This is what the pipeline writes onto the phoneme sequence. It can
    /// differ from `syllable.tone`, which comes from `tone_position`, when a
    /// token carries more than one mark.
    pub fn first_marked_tone(&self) -> Tone {
        self.char_tones
            .iter()
            .copied()
            .find(|t| t.is_marked())
            .unwrap_or(Tone::Level)
    }

    pub fn is_complete(&self) -> bool {
        self.discarded.is_empty()
    }
}

/// Strips tone marks, returning the toneless token and one tone per char.
pub fn extract_tones(token: &str) -> (String, Vec<Tone>) {
    token.chars().map(decompose).unzip()
}

pub fn find_tone_position(char_tones: &[Tone]) -> usize {
    char_tones
        .iter()
        .rposition(|t| t.is_marked())
        .unwrap_or(0)
}

pub fn analyze(token: &str) -> Analysis {
    let (toneless, char_tones) = extract_tones(token);
    let tone_position = find_tone_position(&char_tones);
    let chars: Vec<char> = toneless.chars().collect();

    let mut pos = 0;
    let mut syllable = Syllable::default();

    if let Some((initial, _, len)) = INITIAL_TRIE.longest_prefix(&chars, MAX_INITIAL_LEN) {
        syllable.initial = Some(initial);
        pos += len;
    }

    if let Some((nucleus, _, len)) = NUCLEUS_TRIE.longest_prefix(&chars[pos..], MAX_NUCLEUS_LEN) {
        syllable.nucleus = Some(nucleus);
        pos += len;
    }

    let rest = &chars[pos..];
    let mut discarded = String::new();
    if !rest.is_empty() {
        match FINAL_TRIE.get(rest) {
            Some((final_consonant, _)) => syllable.final_consonant = Some(final_consonant),
            None => {
                discarded = rest.iter().collect();
                tracing::debug!("token {:?}: dropping unsegmented tail {:?}", token, discarded);
            }
        }
    }

    syllable.tone = char_tones.get(tone_position).copied().unwrap_or_default();

    Analysis {
        toneless,
        char_tones,
        tone_position,
        syllable,
        discarded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::g2p::segments::SegmentKind;

    #[test]
    fn test_ngang() {
        let a = analyze("ngang");
        assert_eq!(a.segments(), vec!["ng", "a", "ng"]);
        assert_eq!(a.tone_position, 0);
        assert_eq!(a.syllable.tone, Tone::Level);
        assert!(a.is_complete());
    }

    #[test]
    fn test_quy_with_acute() {
        let a = analyze("quý");
        assert_eq!(a.toneless, "quy");
        assert_eq!(a.char_tones, vec![Tone::Level, Tone::Level, Tone::Rising]);
        assert_eq!(a.tone_position, 2);
        assert_eq!(a.syllable.initial, Some("qu"));
        assert_eq!(a.syllable.nucleus, Some("y"));
        assert_eq!(a.syllable.final_consonant, None);
        assert_eq!(a.syllable.tone, Tone::Rising);
    }

    #[test]
    fn test_common_words() {
        let cases: &[(&str, &[&str])] = &[
            ("xin", &["x", "i", "n"]),
            ("chào", &["ch", "ao"]),
            ("thế", &["th", "ê"]),
            ("giới", &["gi", "ơi"]),
            ("tiếng", &["t", "iê", "ng"]),
            ("việt", &["v", "iê", "t"]),
            ("học", &["h", "o", "c"]),
            ("trường", &["tr", "ươ", "ng"]),
            ("nghiệp", &["ngh", "iê", "p"]),
            ("anh", &["a", "nh"]),
        ];
        for (word, expected) in cases {
            assert_eq!(analyze(word).segments(), expected.to_vec(), "{}", word);
        }
    }

    #[test]
    fn test_triphthong_beats_shorter_nuclei() {
        let a = analyze("người");
        assert_eq!(a.toneless, "ngươi");
        assert_eq!(a.syllable.initial, Some("ng"));
        assert_eq!(a.syllable.nucleus, Some("ươi"));
        assert_eq!(a.tone_position, 3);

        let a = analyze("khuyến");
        assert_eq!(a.segments(), vec!["kh", "uyê", "n"]);
    }

    #[test]
    fn test_every_table_entry_segments_to_itself() {
        for kind in [
            SegmentKind::Initial,
            SegmentKind::SingleVowel,
            SegmentKind::Diphthong,
            SegmentKind::Triphthong,
            SegmentKind::Final,
        ] {
            for &entry in kind.entries() {
                let a = analyze(entry);
                assert_eq!(a.segments(), vec![entry], "{:?} {}", kind, entry);
                assert_eq!(a.syllable.spelling(), entry);
            }
        }
    }

    #[test]
    fn test_unsegmentable_tail_is_dropped() {
        let a = analyze("giới!");
        assert_eq!(a.segments(), vec!["gi", "ơi"]);
        assert_eq!(a.discarded, "!");
        assert!(!a.is_complete());

        // "nk" is not a final consonant, so both letters go
        let a = analyze("bank");
        assert_eq!(a.segments(), vec!["b", "a"]);
        assert_eq!(a.discarded, "nk");
    }

    #[test]
    fn test_tokens_without_vowels() {
        assert_eq!(analyze("").segments(), Vec::<&str>::new());
        assert_eq!(analyze("!!").segments(), Vec::<&str>::new());
        assert_eq!(analyze("nh").segments(), vec!["nh"]);
        assert_eq!(analyze("123").segments(), Vec::<&str>::new());
    }

    #[test]
    fn test_tone_position_uses_last_mark() {
        let a = analyze("áà");
        assert_eq!(a.tone_position, 1);
        assert_eq!(a.syllable.tone, Tone::Falling);
        assert_eq!(a.first_marked_tone(), Tone::Rising);
    }
}
