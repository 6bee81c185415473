use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Default endpoint for the chat-completion service (OpenAI-compatible).
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default generation model.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Credential for the chat-completion service.
    pub api_key: String,
    /// Base endpoint for the chat-completion service.
    pub api_base: String,
    /// Generation model id sent with every completion request.
    pub model: String,
    /// Path to the article store (SQLite). Only the fetch helper needs it.
    pub store_path: Option<String>,
    /// Path to the POS lexicon file backing the linguistic extractor.
    pub lexicon_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nothing is validated here — each command calls the `require_*`
    /// method for the dependencies it actually uses, so `extract` works
    /// without a store and `serve` works without a lexicon.
    pub fn load() -> Result<Self> {
        Ok(Self {
            api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            api_base: env::var("NEWSBRIEF_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            model: env::var("NEWSBRIEF_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            store_path: env::var("NEWSBRIEF_STORE_PATH").ok().filter(|s| !s.is_empty()),
            lexicon_path: env::var("NEWSBRIEF_LEXICON_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("assets/pos-lexicon.tsv")),
        })
    }

    /// Check that the generation credential is configured.
    /// Call this before any operation that talks to the chat-completion
    /// service — the process must refuse to start without it.
    pub fn require_generation(&self) -> Result<()> {
        if self.api_key.is_empty() {
            anyhow::bail!(
                "OPENAI_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }

    /// Check that the article store path is configured.
    /// Only the fetch helper (`newsbrief summarize`) needs this.
    pub fn require_store(&self) -> Result<&str> {
        match self.store_path.as_deref() {
            Some(path) => Ok(path),
            None => anyhow::bail!(
                "NEWSBRIEF_STORE_PATH not set. Point it at the article store\n\
                 (SQLite file) before running `newsbrief summarize`."
            ),
        }
    }

    /// Check that the POS lexicon file exists.
    /// Call this before building the linguistic extractor — a missing
    /// lexicon must stop the process, not silently degrade extraction.
    pub fn require_lexicon(&self) -> Result<()> {
        if !self.lexicon_path.exists() {
            anyhow::bail!(
                "POS lexicon not found at {}\n\
                 Restore assets/pos-lexicon.tsv from the repository, or set\n\
                 NEWSBRIEF_LEXICON_PATH to an alternate lexicon file.",
                self.lexicon_path.display()
            );
        }
        Ok(())
    }
}
