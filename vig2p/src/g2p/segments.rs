use lazy_static::lazy_static;
use std::collections::HashMap;

pub const INITIAL_CONSONANTS: &[&str] = &[
    "b", "c", "ch", "d", "đ", "g", "gh", "gi", "h", "k", "kh", "l", "m", "n", "ng", "ngh", "nh",
    "p", "ph", "q", "qu", "r", "s", "t", "th", "tr", "v", "x",
];

pub const FINAL_CONSONANTS: &[&str] = &["c", "ch", "m", "n", "ng", "nh", "p", "t"];

pub const SINGLE_VOWELS: &[&str] = &["a", "ă", "â", "e", "ê", "i", "o", "ô", "ơ", "u", "ư", "y"];

pub const DIPHTHONGS: &[&str] = &[
    "ai", "ao", "au", "ay", "âu", "ây", "eo", "êu", "ia", "iê", "iu", "oa", "oă", "oe", "oi", "ôi",
    "ơi", "ua", "uâ", "uê", "ui", "uo", "uô", "uơ", "ưa", "ưi", "ưu", "uy", "ươ",
];

pub const TRIPHTHONGS: &[&str] = &[
    "iêu", "oai", "oao", "oeo", "uai", "uây", "uôi", "ươi", "ươu", "uya", "uyê",
];

/// Longest initial consonant candidate tried at the start of a syllable.
pub const MAX_INITIAL_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Initial,
    SingleVowel,
    Diphthong,
    Triphthong,
    Final,
}

impl SegmentKind {
    pub fn entries(self) -> &'static [&'static str] {
        match self {
            SegmentKind::Initial => INITIAL_CONSONANTS,
            SegmentKind::SingleVowel => SINGLE_VOWELS,
            SegmentKind::Diphthong => DIPHTHONGS,
            SegmentKind::Triphthong => TRIPHTHONGS,
            SegmentKind::Final => FINAL_CONSONANTS,
        }
    }
}

#[derive(Clone, Debug)]
struct TrieNode {
    children: HashMap<char, usize>,
    entry: Option<(&'static str, SegmentKind)>,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            entry: None,
        }
    }
}

/// Character trie over a fixed set of segment spellings.
///
/// Vowel nuclei of different lengths live in disjoint tables, so a single
/// longest-prefix walk over the merged nucleus trie gives the same answer as
/// trying triphthongs, then diphthongs, then single vowels.
#[derive(Clone, Debug)]
pub struct SegmentTrie {
    nodes: Vec<TrieNode>,
    max_depth: usize,
}

impl SegmentTrie {
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            max_depth: 0,
        }
    }

    pub fn from_kinds(kinds: &[SegmentKind]) -> Self {
        let mut trie = Self::new();
        for &kind in kinds {
            for &entry in kind.entries() {
                trie.insert(entry, kind);
            }
        }
        trie
    }

    pub fn insert(&mut self, entry: &'static str, kind: SegmentKind) {
        let mut node_idx = 0;
        let mut depth = 0;
        for c in entry.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&c) {
                id
            } else {
                let new_node_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(c, new_node_id);
                new_node_id
            };
            node_idx = next_idx;
            depth += 1;
        }
        self.nodes[node_idx].entry = Some((entry, kind));
        self.max_depth = self.max_depth.max(depth);
    }

    /// Longest entry that is a prefix of `chars`, looking at most `limit`
    /// characters ahead. Returns the entry and its length in characters.
    pub fn longest_prefix(
        &self,
        chars: &[char],
        limit: usize,
    ) -> Option<(&'static str, SegmentKind, usize)> {
        let mut node_idx = 0;
        let mut best = None;
        for (i, c) in chars.iter().take(limit).enumerate() {
            match self.nodes[node_idx].children.get(c) {
                Some(&next_idx) => node_idx = next_idx,
                None => break,
            }
            if let Some((entry, kind)) = self.nodes[node_idx].entry {
                best = Some((entry, kind, i + 1));
            }
        }
        best
    }

    /// Entry spelled by exactly `chars`.
    pub fn get(&self, chars: &[char]) -> Option<(&'static str, SegmentKind)> {
        let mut node_idx = 0;
        for c in chars {
            node_idx = *self.nodes[node_idx].children.get(c)?;
        }
        self.nodes[node_idx].entry
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for SegmentTrie {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    pub static ref INITIAL_TRIE: SegmentTrie = SegmentTrie::from_kinds(&[SegmentKind::Initial]);
    pub static ref NUCLEUS_TRIE: SegmentTrie = SegmentTrie::from_kinds(&[
        SegmentKind::SingleVowel,
        SegmentKind::Diphthong,
        SegmentKind::Triphthong,
    ]);
    pub static ref FINAL_TRIE: SegmentTrie = SegmentTrie::from_kinds(&[SegmentKind::Final]);
}
