use crate::config::G2pConfig;
use crate::error::G2pError;
use crate::g2p::normalize::{expand_digits, normalize_text};
use crate::g2p::phonemes::{self, map_segment};
use crate::g2p::syllable::analyze;
use serde::{Deserialize, Serialize};

/// Phonemes, tones and per-word phoneme counts for one piece of text.
///
/// `sum(word2ph) == phones.len() == tones.len()` always holds, and the i-th
/// run of `word2ph[i]` entries belongs to the i-th spoken word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct G2pResult {
    pub phones: Vec<String>,
    pub tones: Vec<u8>,
    pub word2ph: Vec<usize>,
}

/// Phones and tones of a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordPhones<'a> {
    pub phones: &'a [String],
    pub tones: &'a [u8],
}

impl G2pResult {
    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }

    /// Iterates the per-word blocks in input order.
    pub fn words(&self) -> impl Iterator<Item = WordPhones<'_>> + '_ {
        let mut start = 0;
        self.word2ph.iter().map(move |&count| {
            let end = start + count;
            let word = WordPhones {
                phones: &self.phones[start..end],
                tones: &self.tones[start..end],
            };
            start = end;
            word
        })
    }

    /// Words separated by spaces, phones inside a word joined with `-`.
    /// With `inline_tones` the tone digit is glued onto the phone that
    /// carries it.
    pub fn to_phoneme_string(&self, inline_tones: bool) -> String {
        self.words()
            .map(|word| {
                word.phones
                    .iter()
                    .zip(word.tones)
                    .map(|(phone, &tone)| match (inline_tones, tone) {
                        (true, t) if t > 0 => format!("{}{}", phone, t),
                        _ => phone.clone(),
                    })
                    .collect::<Vec<_>>()
                    .join("-")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn push_word(&mut self, phones: Vec<String>, tones: Vec<u8>) {
        self.word2ph.push(phones.len());
        self.phones.extend(phones);
        self.tones.extend(tones);
    }
}

/// Vietnamese text front end.
#[derive(Debug, Clone)]
pub struct G2pVi {
    cfg: G2pConfig,
}

impl G2pVi {
    pub fn new() -> Result<Self, G2pError> {
        Self::from_config(G2pConfig::default())
    }

    pub fn from_config(cfg: G2pConfig) -> Result<Self, G2pError> {
        if cfg.check_tables {
            phonemes::check_tables()?;
        }
        Ok(Self { cfg })
    }

    /// Normalized form of `text` as the pipeline sees it.
    pub fn prepare_text(&self, text: &str) -> String {
        let text = normalize_text(text);
        if self.cfg.expand_digits {
            expand_digits(&text)
        } else {
            text
        }
    }

    pub fn g2p(&self, text: &str) -> Result<G2pResult, G2pError> {
        let text = self.prepare_text(text);
        let mut result = G2pResult::default();

        for word in text.split_whitespace() {
            if !word.chars().any(char::is_alphabetic) {
                continue;
            }

            let analysis = analyze(word);
            let segments = analysis.segments();
            let phones = segments
                .iter()
                .map(|segment| map_segment(segment).map(str::to_string))
                .collect::<Result<Vec<_>, _>>()?;

            let mut tones = vec![0u8; phones.len()];
            let tone_slot = if phones.len() >= 2 && analysis.syllable.initial.is_some() {
                1
            } else {
                0
            };
            // leftmost mark in the word, not necessarily the nucleus tone
            let tone = analysis.first_marked_tone();
            if let Some(slot) = tones.get_mut(tone_slot) {
                *slot = tone.index();
            }

            tracing::debug!(
                "word {:?} -> segments={:?} phones={:?} tone={}",
                word,
                segments,
                phones,
                tone.index()
            );
            result.push_word(phones, tones);
        }

        Ok(result)
    }
}

/// Runs the pipeline with the default configuration.
pub fn g2p(text: &str) -> Result<G2pResult, G2pError> {
    // tables are checked by the unit tests and by G2pVi::new
    G2pVi::from_config(G2pConfig {
        check_tables: false,
        ..G2pConfig::default()
    })?
    .g2p(text)
}
