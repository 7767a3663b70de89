pub mod diacritics;
pub mod normalize;
pub mod phonemes;
pub mod pipeline;
pub mod segments;
pub mod syllable;

pub use diacritics::Tone;
pub use pipeline::{g2p, G2pResult, G2pVi, WordPhones};
