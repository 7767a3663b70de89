use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One of the six Vietnamese tones, numbered the way the acoustic model
/// expects them.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum Tone {
    /// ngang, no mark
    #[default]
    Level = 0,
    /// sắc, acute
    Rising = 1,
    /// huyền, grave
    Falling = 2,
    /// hỏi, hook above
    Dipping = 3,
    /// ngã, tilde
    Creaky = 4,
    /// nặng, dot below
    Heavy = 5,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Level,
        Tone::Rising,
        Tone::Falling,
        Tone::Dipping,
        Tone::Creaky,
        Tone::Heavy,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(idx: u8) -> Option<Tone> {
        Tone::ALL.get(idx as usize).copied()
    }

    pub fn is_marked(self) -> bool {
        self != Tone::Level
    }
}

impl From<Tone> for u8 {
    fn from(tone: Tone) -> u8 {
        tone.index()
    }
}

impl TryFrom<u8> for Tone {
    type Error = String;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        Tone::from_index(idx).ok_or_else(|| format!("tone index out of range: {}", idx))
    }
}

/// Base vowels, column order shared by every row of [`TONE_ROWS`].
pub static BASE_VOWELS: [char; 12] = ['a', 'ă', 'â', 'e', 'ê', 'i', 'o', 'ô', 'ơ', 'u', 'ư', 'y'];

/// Row `t` holds every base vowel carrying tone `t + 1`.
static TONE_ROWS: [[char; 12]; 5] = [
    ['á', 'ắ', 'ấ', 'é', 'ế', 'í', 'ó', 'ố', 'ớ', 'ú', 'ứ', 'ý'],
    ['à', 'ằ', 'ầ', 'è', 'ề', 'ì', 'ò', 'ồ', 'ờ', 'ù', 'ừ', 'ỳ'],
    ['ả', 'ẳ', 'ẩ', 'ẻ', 'ể', 'ỉ', 'ỏ', 'ổ', 'ở', 'ủ', 'ử', 'ỷ'],
    ['ã', 'ẵ', 'ẫ', 'ẽ', 'ễ', 'ĩ', 'õ', 'ỗ', 'ỡ', 'ũ', 'ữ', 'ỹ'],
    ['ạ', 'ặ', 'ậ', 'ẹ', 'ệ', 'ị', 'ọ', 'ộ', 'ợ', 'ụ', 'ự', 'ỵ'],
];

pub fn get_toned_to_base() -> HashMap<char, (char, Tone)> {
    TONE_ROWS
        .iter()
        .zip(&Tone::ALL[1..])
        .flat_map(|(row, &tone)| {
            row.iter()
                .zip(BASE_VOWELS.iter())
                .map(move |(&toned, &base)| (toned, (base, tone)))
        })
        .collect()
}

pub fn get_base_to_toned() -> HashMap<char, [char; 6]> {
    BASE_VOWELS
        .iter()
        .enumerate()
        .map(|(col, &base)| {
            let mut forms = [base; 6];
            for (t, row) in TONE_ROWS.iter().enumerate() {
                forms[t + 1] = row[col];
            }
            (base, forms)
        })
        .collect()
}

lazy_static! {
    pub static ref TONED_TO_BASE: HashMap<char, (char, Tone)> = get_toned_to_base();
    pub static ref BASE_TO_TONED: HashMap<char, [char; 6]> = get_base_to_toned();
}

/// Splits a character into its base letter and tone. Characters without a
/// tone mark come back unchanged with [`Tone::Level`].
pub fn decompose(c: char) -> (char, Tone) {
    TONED_TO_BASE.get(&c).copied().unwrap_or((c, Tone::Level))
}

/// Inverse of [`decompose`] for base vowels.
pub fn compose(base: char, tone: Tone) -> Option<char> {
    BASE_TO_TONED.get(&base).map(|forms| forms[tone.index() as usize])
}

/// Every vowel letter the table knows, toneless first.
pub fn all_vowel_letters() -> impl Iterator<Item = char> {
    BASE_VOWELS
        .iter()
        .copied()
        .chain(TONE_ROWS.iter().flat_map(|row| row.iter().copied()))
}
