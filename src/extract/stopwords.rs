// Filler-word filtering for candidate topics.
//
// News queries arrive wrapped in conversational filler ("tell me about...",
// "what is the latest news on..."). Candidates keep only the tokens that
// carry topical content; a candidate that is nothing but filler is dropped
// entirely. This set is small and fixed — it is not the standard English
// stopword list (that one belongs to the keyword ranker, see
// statistical.rs).

use std::collections::HashSet;

/// Query filler words, matched case-insensitively against whole tokens.
const FILLER_WORDS: &[&str] = &[
    "tell", "about", "please", "me", "what", "is", "the", "latest", "news", "update", "updates",
];

/// Case-insensitive filler-word set built once and shared by the extractors.
pub struct FillerFilter {
    words: HashSet<&'static str>,
}

impl Default for FillerFilter {
    fn default() -> Self {
        Self {
            words: FILLER_WORDS.iter().copied().collect(),
        }
    }
}

impl FillerFilter {
    /// Whether a single token is filler.
    pub fn is_filler(&self, token: &str) -> bool {
        self.words.contains(token.to_lowercase().as_str())
    }

    /// Strip filler tokens from a candidate phrase.
    ///
    /// Tokenizes on whitespace, drops filler tokens, rejoins the survivors
    /// with single spaces. Returns None when nothing survives — such a
    /// candidate must never be selected as a topic.
    pub fn filter_candidate(&self, candidate: &str) -> Option<String> {
        let kept: Vec<&str> = candidate
            .split_whitespace()
            .filter(|token| !self.is_filler(token))
            .collect();
        if kept.is_empty() {
            None
        } else {
            Some(kept.join(" "))
        }
    }
}
