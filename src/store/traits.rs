// ArticleStore trait — backend-agnostic read interface.
//
// One method, because this core's only store interaction is the
// fetch-everything read the summarize path performs. No pagination and no
// consistency guarantee beyond what the backend provides.

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Fetch every article body in insertion order, plus the first
    /// non-empty interest tag encountered (used as the summarization
    /// domain when the caller doesn't override it).
    async fn fetch_articles_and_domain(&self) -> Result<(Vec<String>, Option<String>)>;
}
