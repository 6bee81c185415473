// Topic extractor trait — swap-ready abstraction.
//
// Lets the CLI hold either extraction variant behind one interface and
// swap in new approaches without changing callers. The method is async
// because the LLM-first variant makes a network call; the hybrid variant
// simply never awaits.

use async_trait::async_trait;

/// Trait for extracting a single topic string from a raw user query.
///
/// Implementations never fail: internal errors are absorbed and the
/// trimmed original query is returned instead. An empty or
/// whitespace-only query yields an empty string.
#[async_trait]
pub trait TopicExtractor: Send + Sync {
    /// Extract the best-guess topic for `query`.
    async fn extract_topic(&self, query: &str) -> String;
}
