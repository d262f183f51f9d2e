use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{info, warn};

use config::{Config, ConfigError, StorageKind};
use databases::mongo::MongoDb;
use repositories::memory::InMemoryRoomRepository;
use repositories::mongo::MongoRoomRepository;
use repositories::{RepositoryError, RoomRepository};
use routes::AppState;

mod config;
mod databases;
mod models;
mod repositories;
mod routes;
mod telemetry;
mod utils;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Can't connect to MongoDB: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("Server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        // The subscriber may not be installed yet when configuration fails.
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    telemetry::init(&config.log_filter);

    let rooms: Arc<dyn RoomRepository> = match config.storage {
        StorageKind::Mongo => {
            let mongo = MongoDb::connect(&config.mongodb_uri, &config.mongodb_database).await?;
            Arc::new(MongoRoomRepository::new(&mongo))
        }
        StorageKind::Memory => {
            warn!("Using in-memory storage, rooms will not survive a restart");
            Arc::new(InMemoryRoomRepository::default())
        }
    };

    let existing = rooms.count().await?;
    info!(rooms = existing, "Room store ready");

    let app = routes::router(AppState::new(rooms));
    let listener = TcpListener::bind(config.bind_address).await?;
    info!(
        address = %config.bind_address,
        storage = %config.storage,
        "Rooms service listening"
    );

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Rooms service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
