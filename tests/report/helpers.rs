use chrono::NaiveDate;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use blog_metrics::config::get_configuration;
use blog_metrics::domain::week_range::WeekRange;
use blog_metrics::report::{build_weekly_report, WeeklyReport};
use blog_metrics::supabase_client::SupabaseClient;

/// One mocked Supabase backend plus a client pointed at it. The week range
/// is pinned so the request filters and the expected output are stable.
pub struct TestBackend {
    pub server: MockServer,
    pub client: SupabaseClient,
    pub range: WeekRange,
}

impl TestBackend {
    pub async fn spawn() -> TestBackend {
        let mut config = get_configuration().expect("Missing configuration file.");
        let server = MockServer::start().await;

        config.set_supabase_base_url(server.uri());

        let client = SupabaseClient::new(
            config.get_supabase_base_url(),
            config.get_supabase_api_key(),
            Some(config.get_supabase_timeout()),
        );
        // Week of Monday 2024-03-04, reference day Thursday the 7th
        let range = WeekRange::containing(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());

        TestBackend {
            server,
            client,
            range,
        }
    }

    pub async fn build_report(&self) -> WeeklyReport {
        build_weekly_report(&self.client, self.range).await
    }

    // The weekly and global queries share their resource paths; the `select`
    // parameter is what tells them apart.

    pub async fn mock_weekly_subscribers(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/rest/v1/subscribers"))
            .and(query_param("select", "*"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_weekly_subscribers_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/rest/v1/subscribers"))
            .and(query_param("select", "*"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_weekly_articles(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/rest/v1/articles"))
            .and(query_param("select", "title,published_at"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_weekly_articles_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/rest/v1/articles"))
            .and(query_param("select", "title,published_at"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_weekly_email_logs(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/rest/v1/email_logs"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_all_verifications(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/rest/v1/subscribers"))
            .and(query_param("select", "verified"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_all_verifications_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/rest/v1/subscribers"))
            .and(query_param("select", "verified"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_published_article_ids(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/rest/v1/articles"))
            .and(query_param("select", "id"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Healthy defaults for the sections a test does not care about.
    pub async fn mock_empty_backend(&self) {
        self.mock_weekly_subscribers(serde_json::json!([])).await;
        self.mock_weekly_articles(serde_json::json!([])).await;
        self.mock_weekly_email_logs(serde_json::json!([])).await;
        self.mock_all_verifications(serde_json::json!([])).await;
        self.mock_published_article_ids(serde_json::json!([])).await;
    }
}
