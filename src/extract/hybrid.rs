// Hybrid topic extraction — linguistic + statistical candidates.
//
// Candidates keep a fixed order: entity spans and noun chunks first (in
// textual order), then RAKE phrases (in rank order), deduplicated by first
// occurrence on both the raw and the filler-filtered form. Selection is
// "first survivor", so extraction is reproducible run to run.

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::debug;

use super::linguistic::LinguisticPipeline;
use super::statistical::RakeExtractor;
use super::stopwords::FillerFilter;
use super::traits::TopicExtractor;

/// The local extraction variant: no network, built once at startup.
pub struct HybridExtractor {
    linguistic: LinguisticPipeline,
    statistical: RakeExtractor,
    filler: FillerFilter,
}

impl HybridExtractor {
    pub fn new(linguistic: LinguisticPipeline, statistical: RakeExtractor) -> Self {
        Self {
            linguistic,
            statistical,
            filler: FillerFilter::default(),
        }
    }

    /// The full pipeline over an already-validated, non-empty query.
    fn extract(&self, query: &str) -> String {
        let text = super::normalize(query);

        // Ordered merge: linguistic candidates, then statistical phrases,
        // first occurrence wins.
        let mut merged = Vec::new();
        let mut seen_raw = HashSet::new();
        for candidate in self
            .linguistic
            .candidates(&text)
            .into_iter()
            .chain(self.statistical.ranked_phrases(&text))
        {
            if seen_raw.insert(candidate.clone()) {
                merged.push(candidate);
            }
        }

        // Strip filler words per candidate; drop candidates that empty out
        // and collapse duplicates created by the filtering.
        let mut survivors = Vec::new();
        let mut seen_filtered = HashSet::new();
        for candidate in &merged {
            if let Some(filtered) = self.filler.filter_candidate(candidate) {
                if seen_filtered.insert(filtered.clone()) {
                    survivors.push(filtered);
                }
            }
        }

        debug!(
            merged = merged.len(),
            survivors = survivors.len(),
            "extracted topic candidates"
        );

        match survivors.into_iter().next() {
            Some(topic) => topic,
            // Nothing survived filtering; fall back to the trimmed query.
            None => query.trim().to_string(),
        }
    }
}

#[async_trait]
impl TopicExtractor for HybridExtractor {
    async fn extract_topic(&self, query: &str) -> String {
        if query.trim().is_empty() {
            return String::new();
        }
        self.extract(query)
    }
}
