// RAKE keyword ranking — the statistical half of topic extraction.
//
// Ranks candidate phrases in the query by co-occurrence and frequency,
// highest estimated importance first. Scores are consumed immediately;
// only the ordering survives.
//
// The standard English stopword list from the stop-words crate drives the
// ranker's phrase segmentation. It is a different list from the small
// filler set in stopwords.rs, which is applied to candidates afterwards.

use rake::{Rake, StopWords};
use stop_words::{get, LANGUAGE};

/// Statistical phrase ranker, built once at startup and reused.
pub struct RakeExtractor {
    rake: Rake,
    /// How many ranked phrases to surface per query.
    top_n: usize,
}

impl Default for RakeExtractor {
    fn default() -> Self {
        let mut stop_words = StopWords::new();
        for word in get(LANGUAGE::English) {
            stop_words.insert(word);
        }
        Self {
            rake: Rake::new(stop_words),
            top_n: 10,
        }
    }
}

impl RakeExtractor {
    /// Rank candidate phrases in `text`, descending estimated importance.
    ///
    /// Returns an empty list for empty or stopword-only input — the caller
    /// decides what to fall back to.
    pub fn ranked_phrases(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        self.rake
            .run(text)
            .into_iter()
            .take(self.top_n)
            .map(|entry| entry.keyword)
            .collect()
    }
}
