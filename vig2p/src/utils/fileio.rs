use crate::error::G2pError;
use ndarray::Array2;
use ndarray_npy::{read_npy, write_npy};
use std::path::Path;

/// Loads a `(words, dim)` float32 feature matrix saved with numpy.
pub fn load_word_features(path: impl AsRef<Path>) -> Result<Array2<f32>, G2pError> {
    let features: Array2<f32> = read_npy(path.as_ref())?;
    tracing::debug!(
        "loaded word features from {}: shape={:?}",
        path.as_ref().display(),
        features.dim()
    );
    Ok(features)
}

pub fn save_phone_features(path: impl AsRef<Path>, features: &Array2<f32>) -> Result<(), G2pError> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    write_npy(path.as_ref(), features)?;
    Ok(())
}

/// Non-empty, trimmed lines of a UTF-8 text file with their line numbers.
pub fn load_text_lines(path: impl AsRef<Path>) -> Result<Vec<(usize, String)>, G2pError> {
    let data = std::fs::read_to_string(path)?;
    Ok(data
        .lines()
        .enumerate()
        .map(|(i, line)| (i, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| (i, line.to_string()))
        .collect())
}
