/// A published article, as returned by `select=title,published_at`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ArticleRecord {
    pub title: String,
    pub published_at: String,
}

impl ArticleRecord {
    /// Date portion (YYYY-MM-DD) of the publication timestamp.
    pub fn published_day(&self) -> &str {
        self.published_at.get(..10).unwrap_or(&self.published_at)
    }
}
