use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::de::DeserializeOwned;
use std::time;

use crate::domain::article_record::ArticleRecord;
use crate::domain::email_log_record::EmailLogRecord;
use crate::domain::subscriber_record::{SubscriberRecord, VerificationRecord};
use crate::domain::week_range::WeekRange;

const REQUEST_TIMEOUT: time::Duration = time::Duration::from_secs(10);

/// Read-only client for the Supabase PostgREST endpoint. Every query is a
/// single GET against `{base_url}/rest/v1/{resource}` with the anon key in
/// both the `apikey` and `Authorization` headers.
pub struct SupabaseClient {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

#[derive(thiserror::Error)]
pub enum QueryError {
    #[error("Table '{0}' non trouvée ou non accessible")]
    ResourceNotFound(String),
    #[error("Erreur API {resource}: {status} - {reason}")]
    Api {
        resource: String,
        status: u16,
        reason: String,
    },
    #[error("Erreur connexion {0}: {1}")]
    Connection(String, #[source] reqwest::Error),
}

impl std::fmt::Debug for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Caused by:\n\t({})", self)
    }
}

impl QueryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryError::ResourceNotFound(_))
    }
}

impl SupabaseClient {
    pub fn new(
        base_url: String,
        api_key: Secret<String>,
        timeout: Option<time::Duration>,
    ) -> SupabaseClient {
        let http_client = Client::builder()
            .timeout(timeout.unwrap_or(REQUEST_TIMEOUT))
            .build()
            .unwrap();

        SupabaseClient {
            http_client,
            base_url,
            api_key,
        }
    }

    #[tracing::instrument(name = "Fetching the week's new subscribers", skip(self))]
    pub async fn subscribers_created_between(
        &self,
        range: &WeekRange,
    ) -> Result<Vec<SubscriberRecord>, QueryError> {
        let query = format!(
            "subscribers?created_at=gte.{}&created_at=lte.{}&select=*",
            range.start_bound(),
            range.end_bound()
        );

        self.fetch_rows("subscribers", &query).await
    }

    #[tracing::instrument(name = "Fetching the week's published articles", skip(self))]
    pub async fn articles_published_between(
        &self,
        range: &WeekRange,
    ) -> Result<Vec<ArticleRecord>, QueryError> {
        let query = format!(
            "articles?published_at=gte.{}&published_at=lte.{}&status=eq.published&select=title,published_at",
            range.start_bound(),
            range.end_bound()
        );

        self.fetch_rows("articles", &query).await
    }

    #[tracing::instrument(name = "Fetching the week's email logs", skip(self))]
    pub async fn emails_sent_between(
        &self,
        range: &WeekRange,
    ) -> Result<Vec<EmailLogRecord>, QueryError> {
        let query = format!(
            "email_logs?sent_at=gte.{}&sent_at=lte.{}&select=*",
            range.start_bound(),
            range.end_bound()
        );

        self.fetch_rows("email_logs", &query).await
    }

    #[tracing::instrument(name = "Fetching all subscriber verification flags", skip(self))]
    pub async fn all_subscriber_verifications(
        &self,
    ) -> Result<Vec<VerificationRecord>, QueryError> {
        self.fetch_rows("subscribers", "subscribers?select=verified")
            .await
    }

    /// Ids of every published article; only their count is reported.
    #[tracing::instrument(name = "Fetching published article ids", skip(self))]
    pub async fn published_article_ids(&self) -> Result<Vec<serde_json::Value>, QueryError> {
        self.fetch_rows("articles", "articles?status=eq.published&select=id")
            .await
    }

    async fn fetch_rows<T: DeserializeOwned>(
        &self,
        resource: &str,
        query: &str,
    ) -> Result<Vec<T>, QueryError> {
        let url = format!("{}/rest/v1/{}", self.base_url, query);

        let response = self
            .http_client
            .get(&url)
            .header("apikey", self.api_key.expose_secret())
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(|err| QueryError::Connection(String::from(resource), err))?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(QueryError::ResourceNotFound(String::from(resource)));
        }

        if !status.is_success() {
            return Err(QueryError::Api {
                resource: String::from(resource),
                status: status.as_u16(),
                reason: String::from(status.canonical_reason().unwrap_or("Unknown")),
            });
        }

        response
            .json::<Vec<T>>()
            .await
            .map_err(|err| QueryError::Connection(String::from(resource), err))
    }
}
