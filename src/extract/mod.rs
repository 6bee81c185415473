// Topic extraction — turns a free-text news query into a single topic string.
//
// Two interchangeable variants sit behind the TopicExtractor trait:
//   - HybridExtractor: linguistic candidates (entities + noun chunks) merged
//     with statistical candidates (RAKE), filler words stripped, first
//     survivor selected. Fully local, no network.
//   - LlmExtractor: one chat-completion call, degrading to statistical-only
//     extraction when the service fails or returns nothing.
//
// Both absorb runtime failures and fall back to the trimmed input — a topic
// guess is always better than an error here. Missing startup dependencies
// (lexicon file, API credential) are fatal instead.

pub mod hybrid;
pub mod linguistic;
pub mod llm;
pub mod statistical;
pub mod stopwords;
pub mod traits;

pub use hybrid::HybridExtractor;
pub use llm::LlmExtractor;
pub use traits::TopicExtractor;

/// Normalize a query the way every extractor expects it: trimmed, lowercase.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Tell me about NVIDIA  "), "tell me about nvidia");
        assert_eq!(normalize("   "), "");
    }
}
