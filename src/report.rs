use std::collections::BTreeMap;

use crate::domain::article_record::ArticleRecord;
use crate::domain::daily_aggregate::DailyAggregate;
use crate::domain::email_log_record::EmailLogRecord;
use crate::domain::week_range::WeekRange;
use crate::supabase_client::{QueryError, SupabaseClient};

/// Outcome of one report run. Each section holds its own `Result`: a failed
/// query never prevents the other sections from being fetched or rendered,
/// so the report always comes out, possibly partial.
pub struct WeeklyReport {
    pub range: WeekRange,
    pub newsletter: Result<NewsletterSection, QueryError>,
    pub content: Result<Vec<ArticleRecord>, QueryError>,
    pub emails: Result<EmailSection, QueryError>,
    pub global: Result<GlobalStats, QueryError>,
}

pub struct NewsletterSection {
    pub total: usize,
    pub daily: DailyAggregate,
}

pub struct EmailSection {
    pub total: usize,
    pub by_status: BTreeMap<String, u32>,
}

pub struct GlobalStats {
    pub total_subscribers: usize,
    pub verified_subscribers: usize,
    pub total_articles: usize,
}

impl GlobalStats {
    /// Share of verified subscribers, `None` when there are no subscribers
    /// at all so the report never divides by zero.
    pub fn verified_percentage(&self) -> Option<f64> {
        if self.total_subscribers == 0 {
            return None;
        }

        Some(self.verified_subscribers as f64 / self.total_subscribers as f64 * 100.0)
    }
}

#[tracing::instrument(name = "Building the weekly engagement report", skip(client))]
pub async fn build_weekly_report(client: &SupabaseClient, range: WeekRange) -> WeeklyReport {
    let newsletter = client
        .subscribers_created_between(&range)
        .await
        .map(|subscribers| NewsletterSection {
            total: subscribers.len(),
            daily: DailyAggregate::from_subscribers(&subscribers),
        });

    if let Err(err) = &newsletter {
        tracing::warn!("Subscribers query failed: {:?}", err);
    }

    let content = client.articles_published_between(&range).await;

    if let Err(err) = &content {
        tracing::warn!("Articles query failed: {:?}", err);
    }

    let emails = client
        .emails_sent_between(&range)
        .await
        .map(|logs| EmailSection {
            total: logs.len(),
            by_status: count_by_status(&logs),
        });

    if let Err(err) = &emails {
        tracing::warn!("Email logs query failed: {:?}", err);
    }

    let global = fetch_global_stats(client).await;

    if let Err(err) = &global {
        tracing::warn!("Global stats query failed: {:?}", err);
    }

    WeeklyReport {
        range,
        newsletter,
        content,
        emails,
        global,
    }
}

async fn fetch_global_stats(client: &SupabaseClient) -> Result<GlobalStats, QueryError> {
    let verifications = client.all_subscriber_verifications().await?;
    let article_ids = client.published_article_ids().await?;

    Ok(GlobalStats {
        total_subscribers: verifications.len(),
        verified_subscribers: verifications.iter().filter(|v| v.verified).count(),
        total_articles: article_ids.len(),
    })
}

fn count_by_status(logs: &[EmailLogRecord]) -> BTreeMap<String, u32> {
    let mut counts: BTreeMap<String, u32> = BTreeMap::new();

    for log in logs {
        *counts.entry(log.status_or_unknown().to_string()).or_insert(0) += 1;
    }

    counts
}

impl WeeklyReport {
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str("📊 MÉTRIQUES D'ENGAGEMENT - NOVAHYPNOSE.FR\n");
        out.push_str(&format!("{}\n", "=".repeat(50)));
        out.push_str(&format!("📅 Période analysée: {}\n\n", self.range));

        match &self.newsletter {
            Ok(section) => {
                out.push_str("📧 NEWSLETTER:\n");
                out.push_str(&format!(
                    "   Nouveaux abonnés cette semaine: {}\n",
                    section.total
                ));

                if !section.daily.is_empty() {
                    out.push_str("   Détail par jour:\n");
                    for (day, count) in section.daily.iter() {
                        out.push_str(&format!("     {}: {} nouveaux abonnés\n", day, count));
                    }
                }
            }
            Err(err) => render_error(&mut out, err),
        }
        out.push('\n');

        match &self.content {
            Ok(articles) => {
                out.push_str("📝 CONTENU:\n");
                out.push_str(&format!(
                    "   Articles publiés cette semaine: {}\n",
                    articles.len()
                ));

                for article in articles {
                    out.push_str(&format!(
                        "     - {} ({})\n",
                        article.title,
                        article.published_day()
                    ));
                }
            }
            Err(err) => render_error(&mut out, err),
        }
        out.push('\n');

        match &self.emails {
            Ok(section) => {
                out.push_str("📬 EMAILS:\n");
                out.push_str(&format!(
                    "   Emails envoyés cette semaine: {}\n",
                    section.total
                ));

                for (status, count) in &section.by_status {
                    out.push_str(&format!("     {}: {} emails\n", status, count));
                }
            }
            Err(err) => render_error(&mut out, err),
        }
        out.push('\n');

        match &self.global {
            Ok(stats) => {
                out.push_str("📊 STATISTIQUES GLOBALES:\n");
                out.push_str(&format!(
                    "   Total abonnés newsletter: {}\n",
                    stats.total_subscribers
                ));
                out.push_str(&format!(
                    "   Total articles publiés: {}\n",
                    stats.total_articles
                ));

                if let Some(percentage) = stats.verified_percentage() {
                    out.push_str(&format!(
                        "   Abonnés vérifiés: {} ({:.1}%)\n",
                        stats.verified_subscribers, percentage
                    ));
                }
            }
            Err(err) => {
                out.push_str(&format!("❌ Erreur statistiques globales: {}\n", err));
            }
        }

        out.push('\n');
        out.push_str("💡 SOURCES DE DONNÉES VÉRIFIÉES:\n");
        out.push_str("✅ Configuration Supabase active\n");
        out.push_str("✅ Service Account Google Analytics configuré\n");
        out.push('\n');
        out.push_str("🔗 Pour accéder aux données Google Analytics complètes:\n");
        out.push_str("   https://analytics.google.com/analytics/web/\n");

        out
    }
}

fn render_error(out: &mut String, err: &QueryError) {
    // A 404 means the table is not exposed yet, a soft warning rather than
    // a defect; everything else keeps the ❌ prefix of the original report.
    if err.is_not_found() {
        out.push_str(&format!("⚠️  {}\n", err));
    } else {
        out.push_str(&format!("❌ {}\n", err));
    }
}
