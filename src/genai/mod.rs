// Chat-completion service access.
//
// The Generator trait is the seam: the summarizer and the LLM-first
// extractor only ever see `Arc<dyn Generator>`, so tests swap in
// in-memory fakes and production wires up the OpenAI-compatible client.

pub mod client;
pub mod traits;

pub use client::OpenAiClient;
pub use traits::{ChatMessage, CompletionOptions, Generator};
