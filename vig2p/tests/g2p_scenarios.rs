use ndarray::Array2;
use vig2p::features::{align_features, phone_level_features, WordFeatureExtractor};
use vig2p::g2p::normalize::normalize_text;
use vig2p::g2p::syllable::analyze;
use vig2p::{G2pConfig, G2pError, G2pResult, G2pVi};

fn front_end() -> G2pVi {
    G2pVi::new().expect("tables should be consistent")
}

fn assert_invariant(result: &G2pResult) {
    let total: usize = result.word2ph.iter().sum();
    assert_eq!(total, result.phones.len());
    assert_eq!(result.phones.len(), result.tones.len());
}

#[test]
fn hello_world_scenario() {
    let text = "Xin chào thế giới!";
    assert_eq!(normalize_text(text), "xin chào thế giới!");

    let result = front_end().g2p(text).unwrap();
    assert_eq!(result.word2ph.len(), 4);
    assert!(result.word2ph.iter().all(|&n| n >= 1));
    assert_invariant(&result);
}

#[test]
fn sentences_from_the_field() {
    let g2p = front_end();
    for text in [
        "Tiếng Việt rất hay.",
        "Học máy và trí tuệ nhân tạo.",
        "Xử lý ngôn ngữ tự nhiên (NLP) là một lĩnh vực thú vị.",
        "Trường đại học Bách khoa Hà Nội, năm 2024!",
        "   ",
        "!!! ... ???",
        "khuyến nghiệp phương trường người quý",
    ] {
        let result = g2p.g2p(text).unwrap();
        assert_invariant(&result);
        assert_eq!(result.words().count(), result.word2ph.len());
    }
}

#[test]
fn word_count_matches_alphabetic_words() {
    let result = front_end().g2p("Hà Nội - 36 phố phường.").unwrap();
    // "-" and "36" carry no letters
    assert_eq!(result.word2ph.len(), 4);
    assert_invariant(&result);
}

#[test]
fn analysis_scenarios() {
    assert_eq!(analyze("ngang").segments(), vec!["ng", "a", "ng"]);

    let quy = analyze("quý");
    assert_eq!(quy.toneless, "quy");
    assert_eq!(quy.segments(), vec!["qu", "y"]);
    assert_eq!(quy.first_marked_tone().index(), 1);
}

#[test]
fn digits_expand_only_when_configured() {
    let cfg = G2pConfig {
        expand_digits: true,
        ..G2pConfig::default()
    };
    let g2p = G2pVi::from_config(cfg).unwrap();
    assert_eq!(g2p.prepare_text("Tôi có 2 con mèo"), "tôi có hai con mèo");
    assert_eq!(front_end().prepare_text("Tôi có 2 con mèo"), "tôi có 2 con mèo");
}

struct ConstantExtractor;

impl WordFeatureExtractor for ConstantExtractor {
    fn extract_word_features(&self, text: &str) -> Result<Array2<f32>, G2pError> {
        Ok(Array2::ones((text.split_whitespace().count(), 16)))
    }

    fn feature_dim(&self) -> usize {
        16
    }
}

#[test]
fn features_follow_phonemes() {
    let text = "Tiếng Việt rất hay.";
    let result = front_end().g2p(text).unwrap();
    let features = phone_level_features(&ConstantExtractor, text, &result.word2ph).unwrap();
    assert_eq!(features.nrows(), result.phones.len());
    assert_eq!(features.ncols(), 16);
}

#[test]
fn empty_text_aligns_to_one_zero_row() {
    let result = front_end().g2p("").unwrap();
    assert!(result.is_empty());
    let aligned = align_features(Array2::<f32>::ones((2, 8)).view(), &result.word2ph);
    assert_eq!(aligned.dim(), (1, 8));
    assert!(aligned.iter().all(|&v| v == 0.0));
}
