/// A row from the remote `email_logs` table.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct EmailLogRecord {
    pub sent_at: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl EmailLogRecord {
    /// Delivery status, `unknown` when the row carries none.
    pub fn status_or_unknown(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }
}
