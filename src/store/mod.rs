// Article store — read-only document source for the summarize path.
//
// The store is owned by the ingestion side of the system; this core only
// ever reads article bodies and the interest tag that doubles as the
// summarization domain. SQLite via rusqlite (bundled, no system dep),
// behind an async trait so the CLI can stay backend-agnostic.

pub mod sqlite;
pub mod traits;

pub use sqlite::SqliteStore;
pub use traits::ArticleStore;

use std::sync::Arc;

use anyhow::Result;

/// Open the SQLite-backed store at `path`.
pub fn open_sqlite(path: &str) -> Result<Arc<dyn ArticleStore>> {
    Ok(Arc::new(SqliteStore::open(path)?))
}
