// SqliteStore — rusqlite backend implementing the ArticleStore trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is
// !Send. The lock is taken, the synchronous read runs, the lock drops —
// never held across an await point.
//
// This core never creates or writes the articles table; the store file
// must already exist, and a missing file is reported with remediation
// rather than silently created empty.

use anyhow::{Context, Result};
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::traits::ArticleStore;

#[derive(Debug)]
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open an existing article store (fails if the file doesn't exist).
    pub fn open(path: &str) -> Result<Self> {
        if !std::path::Path::new(path).exists() {
            anyhow::bail!(
                "Article store not found at {path}. Point NEWSBRIEF_STORE_PATH at the\n\
                 SQLite file maintained by the article fetcher."
            );
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open article store at {path}"))?;

        Ok(Self::new(conn))
    }

    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl ArticleStore for SqliteStore {
    async fn fetch_articles_and_domain(&self) -> Result<(Vec<String>, Option<String>)> {
        let conn = self.conn.lock().await;

        let mut stmt = conn
            .prepare("SELECT content, interest FROM articles ORDER BY rowid")
            .context("Failed to query the articles table")?;

        let rows = stmt.query_map([], |row| {
            let content: Option<String> = row.get(0)?;
            let interest: Option<String> = row.get(1)?;
            Ok((content, interest))
        })?;

        let mut contents = Vec::new();
        let mut domain: Option<String> = None;
        for row in rows {
            let (content, interest) = row?;
            if let Some(content) = content {
                if !content.trim().is_empty() {
                    contents.push(content);
                }
            }
            if domain.is_none() {
                domain = interest.filter(|tag| !tag.trim().is_empty());
            }
        }

        Ok((contents, domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store(rows: &[(&str, Option<&str>)]) -> SqliteStore {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            "CREATE TABLE articles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                content TEXT,
                interest TEXT
            );",
        )
        .unwrap();
        for (content, interest) in rows {
            conn.execute(
                "INSERT INTO articles (content, interest) VALUES (?1, ?2)",
                rusqlite::params![content, interest],
            )
            .unwrap();
        }
        SqliteStore::new(conn)
    }

    #[tokio::test]
    async fn fetches_articles_in_insertion_order() {
        let store = seeded_store(&[
            ("first article", None),
            ("second article", Some("health")),
            ("third article", Some("tech")),
        ]);
        let (articles, domain) = store.fetch_articles_and_domain().await.unwrap();
        assert_eq!(articles, vec!["first article", "second article", "third article"]);
        // First non-empty interest wins.
        assert_eq!(domain.as_deref(), Some("health"));
    }

    #[tokio::test]
    async fn skips_empty_content_rows() {
        let store = seeded_store(&[("", Some("finance")), ("   ", None), ("real body", None)]);
        let (articles, domain) = store.fetch_articles_and_domain().await.unwrap();
        assert_eq!(articles, vec!["real body"]);
        assert_eq!(domain.as_deref(), Some("finance"));
    }

    #[tokio::test]
    async fn empty_store_yields_no_articles_or_domain() {
        let store = seeded_store(&[]);
        let (articles, domain) = store.fetch_articles_and_domain().await.unwrap();
        assert!(articles.is_empty());
        assert!(domain.is_none());
    }

    #[test]
    fn open_missing_file_reports_remediation() {
        let err = SqliteStore::open("/nonexistent/articles.db").unwrap_err();
        assert!(err.to_string().contains("NEWSBRIEF_STORE_PATH"));
    }
}
