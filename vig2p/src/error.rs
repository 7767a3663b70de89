//! Error type shared by the G2P front end and its file glue.
//!
//! Malformed text never produces an error: the analyzer degrades by dropping
//! what it cannot segment. Only table bugs and I/O surface here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum G2pError {
    /// A segment or toned vowel has no entry in the phoneme table
    #[error("unknown phoneme symbol for {0:?}")]
    UnknownSymbol(String),

    /// The static tables disagree with each other
    #[error("phoneme tables are inconsistent: {0}")]
    TableInconsistency(String),

    /// The injected word feature extractor failed
    #[error("feature extraction failed: {0}")]
    FeatureExtraction(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read npy features: {0}")]
    ReadNpy(#[from] ndarray_npy::ReadNpyError),

    #[error("failed to write npy features: {0}")]
    WriteNpy(#[from] ndarray_npy::WriteNpyError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
