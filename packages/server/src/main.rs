use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use common::storage::filesystem::FilesystemArtifactStore;
use server::config::AppConfig;
use server::state::AppState;
use server::store::RecordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::load().context("Failed to load config")?;
    tokio::fs::create_dir_all(&config.storage.data_dir)
        .await
        .context("Failed to create data directory")?;

    let artifacts = FilesystemArtifactStore::new(config.uploads_dir())
        .await
        .context("Failed to initialize artifact storage")?;
    let records = RecordStore::open(config.db_path())
        .await
        .context("Failed to open record store")?;

    info!(
        data_dir = %config.storage.data_dir.display(),
        public_base_url = %config.public_base_url,
        "storage ready"
    );

    let host = config.server.host.clone();
    let port = config.server.port;

    let state = AppState {
        config: Arc::new(config),
        records: Arc::new(records),
        artifacts: Arc::new(artifacts),
    };
    let app = server::build_router(state);

    let listener = TcpListener::bind((host.as_str(), port))
        .await
        .context("Failed to bind listener")?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
