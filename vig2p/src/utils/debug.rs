use crate::g2p::G2pResult;

// ANSI color codes used to tell neighbouring words apart
const COLORS: &[&str] = &[
    "\x1b[31m", "\x1b[32m", "\x1b[33m", "\x1b[34m", "\x1b[35m", "\x1b[36m",
    "\x1b[91m", "\x1b[92m", "\x1b[93m", "\x1b[94m", "\x1b[95m", "\x1b[96m",
];
const RESET: &str = "\x1b[0m";
const DIM: &str = "\x1b[90m";

/// Stable color for a string, so the same word always renders the same way.
pub fn get_word_color(word: &str) -> &'static str {
    let mut hash = 0u32;
    for byte in word.bytes() {
        hash = hash.wrapping_mul(31).wrapping_add(byte as u32);
    }
    COLORS[(hash as usize) % COLORS.len()]
}

/// One colored block per word: `phone/tone` pairs followed by the word2ph
/// count in grey.
pub fn format_g2p_debug(result: &G2pResult) -> String {
    result
        .words()
        .map(|word| {
            let key = word.phones.concat();
            let color = get_word_color(&key);
            let body = word
                .phones
                .iter()
                .zip(word.tones)
                .map(|(phone, tone)| format!("{}/{}", phone, tone))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{}[{}]{}{}{}{}", color, body, RESET, DIM, word.phones.len(), RESET)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
