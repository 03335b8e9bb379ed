/// A row from the remote `subscribers` table. Owned by the datastore, we
/// only ever read it; fields we do not use are simply not deserialized.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct SubscriberRecord {
    pub created_at: String,
    #[serde(default)]
    pub verified: bool,
}

impl SubscriberRecord {
    /// Date portion (YYYY-MM-DD) of the creation timestamp.
    pub fn created_day(&self) -> &str {
        self.created_at.get(..10).unwrap_or(&self.created_at)
    }
}

/// Projection of a subscriber when only the `verified` flag is selected.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct VerificationRecord {
    #[serde(default)]
    pub verified: bool,
}
