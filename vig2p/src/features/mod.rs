pub mod align;
pub mod extractor;

pub use align::align_features;
pub use extractor::{phone_level_features, prepare_for_word_tokenizer, WordFeatureExtractor};
