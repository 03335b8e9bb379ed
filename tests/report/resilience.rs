use crate::helpers::TestBackend;

#[tokio::test]
async fn missing_articles_table_does_not_block_the_other_sections() {
    let backend = TestBackend::spawn().await;

    backend.mock_weekly_articles_status(404).await;
    backend
        .mock_weekly_subscribers(serde_json::json!([
            { "created_at": "2024-03-04T10:00:00Z" }
        ]))
        .await;
    backend
        .mock_all_verifications(serde_json::json!([{ "verified": true }]))
        .await;
    backend.mock_empty_backend().await;

    let report = backend.build_report().await;
    let rendered = report.render();

    assert!(rendered.contains("⚠️  Table 'articles' non trouvée ou non accessible"));
    assert!(rendered.contains("Nouveaux abonnés cette semaine: 1"));
    assert!(rendered.contains("Total abonnés newsletter: 1"));
    assert!(rendered.contains("Abonnés vérifiés: 1 (100.0%)"));
}

#[tokio::test]
async fn subscribers_server_error_is_reported_with_its_status() {
    let backend = TestBackend::spawn().await;

    backend.mock_weekly_subscribers_status(500).await;
    backend.mock_empty_backend().await;

    let report = backend.build_report().await;
    let rendered = report.render();

    assert!(rendered.contains("❌ Erreur API subscribers: 500 - Internal Server Error"));
    // The remaining sections were still fetched and rendered
    assert!(rendered.contains("Articles publiés cette semaine: 0"));
    assert!(rendered.contains("Total abonnés newsletter: 0"));
}

#[tokio::test]
async fn global_stats_failure_keeps_the_weekly_sections() {
    let backend = TestBackend::spawn().await;

    backend.mock_all_verifications_status(503).await;
    backend
        .mock_weekly_subscribers(serde_json::json!([
            { "created_at": "2024-03-06T12:00:00Z" }
        ]))
        .await;
    backend.mock_empty_backend().await;

    let report = backend.build_report().await;
    let rendered = report.render();

    assert!(rendered.contains("Nouveaux abonnés cette semaine: 1"));
    assert!(rendered.contains("❌ Erreur statistiques globales"));
}

#[tokio::test]
async fn unreachable_backend_still_produces_a_full_report() {
    let backend = TestBackend::spawn().await;
    // No mocks mounted at all: wiremock answers 404 for every query

    let report = backend.build_report().await;
    let rendered = report.render();

    assert!(rendered.contains("⚠️  Table 'subscribers' non trouvée ou non accessible"));
    assert!(rendered.contains("⚠️  Table 'articles' non trouvée ou non accessible"));
    assert!(rendered.contains("⚠️  Table 'email_logs' non trouvée ou non accessible"));
    assert!(rendered.contains("❌ Erreur statistiques globales"));
    // The footer proves the run went all the way through
    assert!(rendered.contains("https://analytics.google.com/analytics/web/"));
}
