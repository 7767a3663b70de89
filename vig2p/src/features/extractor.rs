use crate::error::G2pError;
use crate::features::align::align_features;
use lazy_static::lazy_static;
use ndarray::Array2;
use regex::Regex;

lazy_static! {
    static ref SENTENCE_PUNCT_RE: Regex = Regex::new(r"([.,!?;:])").unwrap();
    static ref MULTI_SPACE_RE: Regex = Regex::new(r"\s+").unwrap();
}

/// Source of word-level contextual features, typically a pretrained
/// language model behind its own tokenizer.
///
/// Implementations return one row per word as their tokenizer sees it. The
/// row count does not have to match the G2P word count; the aligner
/// reconciles the two.
pub trait WordFeatureExtractor {
    fn extract_word_features(&self, text: &str) -> Result<Array2<f32>, G2pError>;

    /// Width of every feature row.
    fn feature_dim(&self) -> usize;
}

/// Puts spaces around sentence punctuation so a whitespace word tokenizer
/// sees each mark as its own token.
pub fn prepare_for_word_tokenizer(text: &str) -> String {
    let spaced = SENTENCE_PUNCT_RE.replace_all(text, " $1 ");
    MULTI_SPACE_RE.replace_all(&spaced, " ").trim().to_string()
}

/// Extracts word features for `text` and expands them to one row per phoneme.
pub fn phone_level_features<E>(
    extractor: &E,
    text: &str,
    word2ph: &[usize],
) -> Result<Array2<f32>, G2pError>
where
    E: WordFeatureExtractor + ?Sized,
{
    let prepared = prepare_for_word_tokenizer(text);
    let word_features = extractor.extract_word_features(&prepared)?;
    if word_features.ncols() != extractor.feature_dim() {
        return Err(G2pError::FeatureExtraction(format!(
            "expected {} feature columns, got {}",
            extractor.feature_dim(),
            word_features.ncols()
        )));
    }
    Ok(align_features(word_features.view(), word2ph))
}
