use ndarray::{Array2, ArrayView2, Axis};

/// Spreads one feature row per word over that word's phonemes.
///
/// Missing trailing rows reuse the last available row and surplus rows are
/// ignored, so the output always has `sum(word2ph)` rows. An empty result
/// becomes a single zero row to keep the matrix non-empty for the model.
pub fn align_features(word_features: ArrayView2<f32>, word2ph: &[usize]) -> Array2<f32> {
    let (rows, dim) = word_features.dim();
    let total: usize = word2ph.iter().sum();

    if rows != word2ph.len() {
        tracing::debug!(
            "aligning {} feature rows to {} words ({})",
            rows,
            word2ph.len(),
            if rows < word2ph.len() { "padding with last row" } else { "truncating" }
        );
    }

    if total == 0 {
        return Array2::zeros((1, dim));
    }
    if rows == 0 {
        tracing::warn!("no word features supplied, emitting {} zero rows", total);
        return Array2::zeros((total, dim));
    }

    let indices: Vec<usize> = word2ph
        .iter()
        .enumerate()
        .flat_map(|(word, &count)| std::iter::repeat(word.min(rows - 1)).take(count))
        .collect();

    word_features.select(Axis(0), &indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    #[test]
    fn test_repeats_rows_per_word() {
        let features: Array2<f32> = array![[1.0, 1.5], [2.0, 2.5], [3.0, 3.5]];
        let expected: Array2<f32> = array![[1.0, 1.5], [2.0, 2.5], [2.0, 2.5]];
        assert_eq!(align_features(features.view(), &[1, 2, 0]), expected);
    }

    #[test]
    fn test_pads_with_last_row() {
        let features: Array2<f32> = array![[1.0], [2.0]];
        let expected: Array2<f32> = array![[1.0], [2.0], [2.0], [2.0]];
        assert_eq!(align_features(features.view(), &[1, 1, 2]), expected);
    }

    #[test]
    fn test_truncates_extra_rows() {
        let features: Array2<f32> = array![[1.0], [2.0], [3.0], [4.0]];
        let expected: Array2<f32> = array![[1.0], [1.0], [2.0]];
        assert_eq!(align_features(features.view(), &[2, 1]), expected);
    }

    #[test]
    fn test_empty_result_is_one_zero_row() {
        let features: Array2<f32> = array![[1.0, 2.0, 3.0]];
        assert_eq!(align_features(features.view(), &[]), Array2::<f32>::zeros((1, 3)));
        assert_eq!(align_features(features.view(), &[0, 0]), Array2::<f32>::zeros((1, 3)));
    }

    #[test]
    fn test_no_features_gives_zero_rows() {
        let features = Array2::<f32>::zeros((0, 4));
        let aligned = align_features(features.view(), &[2, 1]);
        assert_eq!(aligned.dim(), (3, 4));
        assert!(aligned.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_length_matches_word2ph_sum() {
        let features = Array2::from_shape_fn((3, 2), |(i, j)| (i * 10 + j) as f32);
        for word2ph in [vec![1], vec![3, 2, 2, 2], vec![0, 4], vec![1, 1, 1, 1, 1, 1]] {
            let aligned = align_features(features.view(), &word2ph);
            assert_eq!(aligned.nrows(), word2ph.iter().sum::<usize>(), "{:?}", word2ph);
            assert_eq!(aligned.ncols(), 2);
        }
    }
}
