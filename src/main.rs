use chrono::Utc;
use idx_alert::{Config, EmailNotifier, IdxClient, KeywordSet, run_once};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("idx_alert=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env();
    let client = match IdxClient::builder()
        .timeout(config.http_timeout())
        .connect_timeout(config.http_timeout())
        .build()
    {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "could not build HTTP client");
            return;
        }
    };
    let notifier = EmailNotifier::from_config(&config);

    let outcome = run_once(&client, &config, &KeywordSet::default(), &notifier, Utc::now()).await;
    tracing::info!(?outcome, "run finished");
}
