mod app;
mod input;

use std::{
    fs::{self, OpenOptions},
    sync::Arc,
};

use anyhow::{Context, Result};
use tokio::sync::mpsc;
use tracing_subscriber::{prelude::*, EnvFilter};
use predictor_core::{
    config::{self, AppConfig},
    CatalogLoader, SubmissionHandler, SupabaseStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    config::ensure_default_config()?;
    let config = AppConfig::load().context("invalid configuration")?;
    let client = config.http_client()?;

    let loader = CatalogLoader::from_config(client.clone(), &config);
    let store = Arc::new(SupabaseStore::from_config(client, &config));
    let handler = SubmissionHandler::new(store);

    let (catalog_tx, catalog_rx) = mpsc::channel(1);
    tokio::spawn(async move {
        let catalog = loader.load().await;
        if catalog_tx.send(catalog).await.is_err() {
            tracing::debug!("UI closed before catalog arrived");
        }
    });

    let mut app = app::PredictorApp::new(handler);
    app.attach_catalog(catalog_rx);
    app.run().await
}

fn init_logging() -> Result<()> {
    let log_dir = std::env::current_dir()?.join("logs");
    fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("predictor.log");
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("failed to open log file {}", log_path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .compact()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    Ok(())
}
