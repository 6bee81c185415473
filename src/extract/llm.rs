// LLM-first topic extraction.
//
// One chat-completion call asks for "a single word or short phrase" naming
// the query's main topic, sampled at temperature 0 with a 10-token cap.
// Service errors and empty replies never reach the caller — they degrade
// to statistical-only extraction, and failing that, to the trimmed input.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::genai::{ChatMessage, CompletionOptions, Generator};

use super::statistical::RakeExtractor;
use super::stopwords::FillerFilter;
use super::traits::TopicExtractor;

const EXTRACTION_PERSONA: &str = "You are a helpful assistant that extracts the main news topic \
     or entity from a user query. Respond with a single word or short phrase only.";

/// The network extraction variant. Holds its own statistical fallback so
/// a degraded service still produces a topic.
pub struct LlmExtractor {
    generator: Arc<dyn Generator>,
    fallback: RakeExtractor,
    filler: FillerFilter,
}

impl LlmExtractor {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self {
            generator,
            fallback: RakeExtractor::default(),
            filler: FillerFilter::default(),
        }
    }

    /// Statistical-only fallback: first ranked phrase with content left
    /// after filler filtering, else the trimmed input.
    fn statistical_topic(&self, query: &str) -> String {
        for phrase in self.fallback.ranked_phrases(&super::normalize(query)) {
            if let Some(filtered) = self.filler.filter_candidate(&phrase) {
                return filtered;
            }
        }
        query.trim().to_string()
    }
}

#[async_trait]
impl TopicExtractor for LlmExtractor {
    async fn extract_topic(&self, query: &str) -> String {
        if query.trim().is_empty() {
            return String::new();
        }

        let messages = [
            ChatMessage::system(EXTRACTION_PERSONA),
            ChatMessage::user(query),
        ];

        match self
            .generator
            .complete(&messages, &CompletionOptions::short_deterministic())
            .await
        {
            Ok(topic) => {
                debug!(topic = %topic, "topic extracted via generation service");
                topic.trim().to_string()
            }
            Err(error) => {
                // Service errors never propagate from extraction.
                warn!(error = %error, "topic extraction call failed, using statistical fallback");
                self.statistical_topic(query)
            }
        }
    }
}
