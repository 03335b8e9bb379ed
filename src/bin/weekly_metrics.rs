use blog_metrics::config::get_configuration;
use blog_metrics::domain::week_range::WeekRange;
use blog_metrics::report::build_weekly_report;
use blog_metrics::supabase_client::SupabaseClient;
use blog_metrics::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(String::from("weekly_metrics"), String::from("info"));

    init_subscriber(subscriber);

    let config = get_configuration().expect("Missing configuration file.");
    let client = SupabaseClient::new(
        config.get_supabase_base_url(),
        config.get_supabase_api_key(),
        Some(config.get_supabase_timeout()),
    );
    let range = WeekRange::current();

    // Every query catches its own failure, so the report always prints,
    // possibly with warning lines instead of some sections.
    let report = build_weekly_report(&client, range).await;

    print!("{}", report.render());

    Ok(())
}
