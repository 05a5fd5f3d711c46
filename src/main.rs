use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use ri_watcher::notify::SlackNotifier;
use ri_watcher::resource::KIND_SPECS;
use ri_watcher::sources::{inventory::InventorySource, ReservationSource};
use ri_watcher::{Config, Watcher};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let sources: Vec<Arc<dyn ReservationSource>> = KIND_SPECS
        .iter()
        .map(|spec| {
            Arc::new(InventorySource::new(client.clone(), &config, spec))
                as Arc<dyn ReservationSource>
        })
        .collect();
    let sink = Arc::new(SlackNotifier::new(client, config.webhook_url.clone()));

    Watcher::new(sources, sink).run().await?;
    Ok(())
}
