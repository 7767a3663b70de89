use crate::error::G2pError;
use crate::g2p::diacritics::{self, compose, decompose, Tone, BASE_VOWELS};
use crate::g2p::segments::SegmentKind;
use lazy_static::lazy_static;
use std::collections::HashMap;

const CONSONANT_CODES: &[(&str, &str)] = &[
    ("b", "b"),
    ("c", "k"),
    ("ch", "ch"),
    ("d", "z"),
    ("đ", "d"),
    ("g", "g"),
    ("gh", "g"),
    ("gi", "z"),
    ("h", "h"),
    ("k", "k"),
    ("kh", "kh"),
    ("l", "l"),
    ("m", "m"),
    ("n", "n"),
    ("ng", "ng"),
    ("ngh", "ng"),
    ("nh", "nh"),
    ("p", "p"),
    ("ph", "f"),
    ("q", "k"),
    ("qu", "kw"),
    ("r", "r"),
    ("s", "s"),
    ("t", "t"),
    ("th", "th"),
    ("tr", "ch"),
    ("v", "v"),
    ("x", "s"),
];

const VOWEL_CODES: &[(char, &str)] = &[
    ('a', "a"),
    ('ă', "aw"),
    ('â', "aa"),
    ('e', "e"),
    ('ê', "ee"),
    ('i', "i"),
    ('o', "o"),
    ('ô', "oo"),
    ('ơ', "ow"),
    ('u', "u"),
    ('ư', "uw"),
    ('y', "y"),
];

fn vowel_code(c: char) -> Option<&'static str> {
    VOWEL_CODES
        .iter()
        .find(|(v, _)| *v == c)
        .map(|&(_, code)| code)
}

/// Symbol for every segment spelling. Vowel clusters are spelled out letter
/// by letter with the single-vowel codes, so "ươ" becomes "uwow".
pub fn get_segment_symbols() -> HashMap<&'static str, String> {
    let mut symbols: HashMap<&'static str, String> = CONSONANT_CODES
        .iter()
        .map(|&(segment, code)| (segment, code.to_string()))
        .collect();

    for kind in [
        SegmentKind::SingleVowel,
        SegmentKind::Diphthong,
        SegmentKind::Triphthong,
    ] {
        for &segment in kind.entries() {
            let code: Option<String> = segment.chars().map(vowel_code).collect();
            if let Some(code) = code {
                symbols.insert(segment, code);
            }
        }
    }

    symbols
}

/// Symbol for every vowel letter, toned or not: base code plus tone digit.
pub fn get_toned_symbols() -> HashMap<char, String> {
    diacritics::all_vowel_letters()
        .filter_map(|c| {
            let (base, tone) = decompose(c);
            vowel_code(base).map(|code| (c, toned_symbol(code, tone)))
        })
        .collect()
}

lazy_static! {
    pub static ref SEGMENT_SYMBOLS: HashMap<&'static str, String> = get_segment_symbols();
    pub static ref TONED_SYMBOLS: HashMap<char, String> = get_toned_symbols();
}

/// Appends the tone digit to a base code. Unmarked tones leave it bare.
pub fn toned_symbol(code: &str, tone: Tone) -> String {
    if tone.is_marked() {
        format!("{}{}", code, tone.index())
    } else {
        code.to_string()
    }
}

pub fn map_segment(segment: &str) -> Result<&'static str, G2pError> {
    SEGMENT_SYMBOLS
        .get(segment)
        .map(String::as_str)
        .ok_or_else(|| G2pError::UnknownSymbol(segment.to_string()))
}

pub fn map_toned(c: char) -> Result<&'static str, G2pError> {
    TONED_SYMBOLS
        .get(&c)
        .map(String::as_str)
        .ok_or_else(|| G2pError::UnknownSymbol(c.to_string()))
}

/// Verifies that every spelling the analyzer can emit has a symbol and that
/// the diacritic table round-trips.
pub fn check_tables() -> Result<(), G2pError> {
    for kind in [
        SegmentKind::Initial,
        SegmentKind::SingleVowel,
        SegmentKind::Diphthong,
        SegmentKind::Triphthong,
        SegmentKind::Final,
    ] {
        for &segment in kind.entries() {
            map_segment(segment).map_err(|_| {
                G2pError::TableInconsistency(format!(
                    "{:?} segment {:?} has no phoneme symbol",
                    kind, segment
                ))
            })?;
        }
    }

    for &base in BASE_VOWELS.iter() {
        for tone in Tone::ALL {
            let toned = compose(base, tone).ok_or_else(|| {
                G2pError::TableInconsistency(format!("vowel {:?} has no toned forms", base))
            })?;
            if decompose(toned) != (base, tone) {
                return Err(G2pError::TableInconsistency(format!(
                    "{:?} does not decompose back to {:?} with tone {}",
                    toned,
                    base,
                    tone.index()
                )));
            }
            map_toned(toned).map_err(|_| {
                G2pError::TableInconsistency(format!("toned vowel {:?} has no symbol", toned))
            })?;
        }
    }

    tracing::info!(
        "phoneme tables checked: {} segment symbols, {} vowel symbols",
        SEGMENT_SYMBOLS.len(),
        TONED_SYMBOLS.len()
    );
    Ok(())
}
