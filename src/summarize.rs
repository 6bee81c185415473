// Summarization — prompt assembly and the single generation call.
//
// Aggregates the article bodies, builds the three-message prompt (persona,
// corpus, request), splices in recent chat history when the caller supplies
// it, and makes exactly one completion call. No retry, no timeout override.
// Every failure propagates to the caller; extraction is the only place that
// degrades silently.

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::genai::{ChatMessage, CompletionOptions, Generator};

/// How many trailing chat-history entries are spliced into the prompt.
pub const HISTORY_WINDOW: usize = 10;

/// Cap on the aggregated article corpus, in chars (~15k tokens). Articles
/// arrive in store insertion order, so head-truncation keeps the earliest.
pub const MAX_CORPUS_CHARS: usize = 60_000;

const SUMMARY_PERSONA: &str = "You are a summarization assistant that synthesizes multiple news \
articles on one topic into a direct, concise summary.\n\
\n\
Requirements:\n\
- Begin immediately with the topic name followed by the key insights — never with \
\"The articles discuss\".\n\
- Include only information that relates to the main topic; skip tangents and repetition.\n\
- Keep the summary self-contained, logically structured, and neutral in tone.\n\
- If the articles conflict, note the discrepancy briefly without taking sides.";

const ANSWER_PERSONA: &str = "You answer follow-up questions about a set of news articles. Use \
only the provided summary and article text; answer directly and concisely.";

/// One prior exchange in a conversation, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub role: String,
    pub message: String,
}

/// Article summarization and follow-up question answering over one
/// injected generation client.
pub struct Summarizer {
    generator: Arc<dyn Generator>,
}

impl Summarizer {
    pub fn new(generator: Arc<dyn Generator>) -> Self {
        Self { generator }
    }

    /// Summarize `articles`, optionally naming a `domain` in the request
    /// and carrying recent chat `history` for conversational continuity.
    ///
    /// Fails without touching the generation service when the aggregated
    /// article text is empty.
    pub async fn summarize(
        &self,
        articles: &[String],
        domain: Option<&str>,
        history: Option<&[HistoryEntry]>,
    ) -> Result<String> {
        let corpus = aggregate_articles(articles);
        if corpus.is_empty() {
            anyhow::bail!("No article content to summarize");
        }

        let messages = build_summary_messages(&corpus, domain, history);

        debug!(
            articles = articles.len(),
            corpus_chars = corpus.len(),
            "requesting summary"
        );
        trace!(corpus = %corpus, "aggregated article corpus");

        let summary = self
            .generator
            .complete(&messages, &CompletionOptions::default())
            .await?;

        debug!(summary_chars = summary.len(), "summary received");
        trace!(summary = %summary, "generated summary");
        Ok(summary)
    }

    /// Answer a follow-up `question` against a previous `summary` and the
    /// articles it came from. One combined prompt, one call, no fallback.
    pub async fn answer(
        &self,
        articles: &[String],
        summary: &str,
        question: &str,
        domain: Option<&str>,
    ) -> Result<String> {
        let corpus = aggregate_articles(articles);
        let prompt = build_answer_prompt(&corpus, summary, question, domain);

        debug!(corpus_chars = corpus.len(), "requesting answer");

        let answer = self
            .generator
            .complete(
                &[ChatMessage::system(ANSWER_PERSONA), ChatMessage::user(prompt)],
                &CompletionOptions::default(),
            )
            .await?;

        debug!(answer_chars = answer.len(), "answer received");
        Ok(answer)
    }
}

/// Join article bodies with blank lines and enforce the corpus cap.
pub fn aggregate_articles(articles: &[String]) -> String {
    let mut corpus = articles
        .iter()
        .map(|article| article.trim())
        .filter(|article| !article.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    if corpus.len() > MAX_CORPUS_CHARS {
        let mut cut = MAX_CORPUS_CHARS;
        while !corpus.is_char_boundary(cut) {
            cut -= 1;
        }
        warn!(
            kept = cut,
            dropped = corpus.len() - cut,
            "article corpus exceeds prompt budget, truncating"
        );
        corpus.truncate(cut);
    }

    corpus
}

/// The three-message summarization prompt, with up to HISTORY_WINDOW
/// history entries spliced in (original order) right before the final
/// user message.
pub fn build_summary_messages(
    corpus: &str,
    domain: Option<&str>,
    history: Option<&[HistoryEntry]>,
) -> Vec<ChatMessage> {
    let mut messages = vec![
        ChatMessage::system(SUMMARY_PERSONA),
        ChatMessage::system(corpus),
    ];

    if let Some(history) = history {
        let start = history.len().saturating_sub(HISTORY_WINDOW);
        for entry in &history[start..] {
            messages.push(ChatMessage {
                role: entry.role.clone(),
                content: entry.message.clone(),
            });
        }
    }

    let request = match domain {
        Some(domain) if !domain.is_empty() => {
            format!("Please provide a concise summary of the given articles about {domain}.")
        }
        _ => "Please provide a concise summary of the given articles.".to_string(),
    };
    messages.push(ChatMessage::user(request));

    messages
}

/// The combined question-answering prompt.
pub fn build_answer_prompt(
    corpus: &str,
    summary: &str,
    question: &str,
    domain: Option<&str>,
) -> String {
    let domain_line = match domain {
        Some(domain) if !domain.is_empty() => format!("Topic: {domain}\n\n"),
        _ => String::new(),
    };
    format!(
        "{domain_line}Summary:\n{summary}\n\nArticles:\n{corpus}\n\nQuestion: {question}\n\nAnswer:"
    )
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;

    struct FakeGenerator {
        reply: &'static str,
        calls: AtomicUsize,
    }

    impl FakeGenerator {
        fn new(reply: &'static str) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl Generator for FakeGenerator {
        async fn complete(
            &self,
            _messages: &[ChatMessage],
            _opts: &CompletionOptions,
        ) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.reply.to_string())
        }
    }

    #[tokio::test]
    async fn empty_articles_rejected_before_any_call() {
        let generator = FakeGenerator::new("unused");
        let summarizer = Summarizer::new(generator.clone());

        let result = summarizer.summarize(&[], Some(""), None).await;
        assert!(result.is_err());

        let blank = vec!["   ".to_string(), String::new()];
        assert!(summarizer.summarize(&blank, None, None).await.is_err());

        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn summarize_returns_generated_text() {
        let generator =
            FakeGenerator::new("Drug trials: a new treatment cleared its phase-three trial.");
        let summarizer = Summarizer::new(generator.clone());

        let articles = vec!["A drug trial succeeded.".to_string()];
        let summary = summarizer
            .summarize(&articles, Some("health"), None)
            .await
            .unwrap();

        assert!(!summary.is_empty());
        assert_ne!(summary, articles[0]);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn prompt_has_persona_corpus_and_request() {
        let messages = build_summary_messages("article text", Some("health"), None);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "system");
        assert_eq!(messages[1].content, "article text");
        assert_eq!(messages[2].role, "user");
        assert!(messages[2].content.contains("about health"));

        let messages = build_summary_messages("article text", None, None);
        assert!(!messages[2].content.contains("about"));
    }

    #[test]
    fn history_is_capped_to_last_ten_in_order() {
        let history: Vec<HistoryEntry> = (0..12)
            .map(|i| HistoryEntry {
                role: if i % 2 == 0 { "user" } else { "assistant" }.to_string(),
                message: format!("message {i}"),
            })
            .collect();

        let messages = build_summary_messages("corpus", None, Some(&history));

        // persona + corpus + 10 history + final user request
        assert_eq!(messages.len(), 13);
        let spliced = &messages[2..12];
        for (offset, message) in spliced.iter().enumerate() {
            assert_eq!(message.content, format!("message {}", offset + 2));
        }
        assert_eq!(spliced[0].role, "user");
        assert_eq!(spliced[1].role, "assistant");
        assert_eq!(messages[12].role, "user");
    }

    #[test]
    fn short_history_is_included_whole() {
        let history = vec![HistoryEntry {
            role: "user".to_string(),
            message: "earlier question".to_string(),
        }];
        let messages = build_summary_messages("corpus", None, Some(&history));
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[2].content, "earlier question");
    }

    #[test]
    fn corpus_is_capped_at_the_prompt_budget() {
        let articles = vec!["x".repeat(40_000), "y".repeat(40_000)];
        let corpus = aggregate_articles(&articles);
        assert_eq!(corpus.len(), MAX_CORPUS_CHARS);
        // Head-truncation: the first article survives intact.
        assert!(corpus.starts_with(&articles[0]));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // Multi-byte chars straddling the cap must not split.
        let articles = vec!["é".repeat(40_000)];
        let corpus = aggregate_articles(&articles);
        assert!(corpus.len() <= MAX_CORPUS_CHARS);
        assert!(corpus.is_char_boundary(corpus.len()));
    }

    #[tokio::test]
    async fn answer_embeds_summary_articles_and_question() {
        let prompt = build_answer_prompt("the articles", "the summary", "what changed?", None);
        assert!(prompt.contains("the summary"));
        assert!(prompt.contains("the articles"));
        assert!(prompt.contains("what changed?"));

        let generator = FakeGenerator::new("The change was approved.");
        let summarizer = Summarizer::new(generator.clone());
        let answer = summarizer
            .answer(
                &["article body".to_string()],
                "the summary",
                "what changed?",
                Some("policy"),
            )
            .await
            .unwrap();
        assert_eq!(answer, "The change was approved.");
    }

    #[tokio::test]
    async fn empty_question_still_issues_one_request() {
        let generator = FakeGenerator::new("Answered from the summary alone.");
        let summarizer = Summarizer::new(generator.clone());
        let answer = summarizer
            .answer(&["article".to_string()], "summary", "", None)
            .await
            .unwrap();
        assert!(!answer.is_empty());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }
}
