use mongodb::bson::doc;
use mongodb::{Client, Database, options::ClientOptions};
use std::time::Duration;
use tracing::{info, instrument};

use super::MongoConfig;
use crate::common::retry_with_backoff;

#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Builds a client from `config` and verifies the server answers a ping.
#[instrument(skip(config), fields(url = %config.redacted_url(), database = %config.database))]
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    let mut options = ClientOptions::parse(&config.url).await?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));
    options.app_name = config.app_name.clone();

    let client = Client::with_options(options)?;

    ping(&client.database(&config.database))
        .await
        .map_err(|e| MongoError::ConnectionFailed(e.to_string()))?;

    info!("Connected to MongoDB");
    Ok(client)
}

/// [`connect_from_config`] retried with backoff, for use at process startup.
///
/// Request handling never retries; only the first connection does.
pub async fn connect_from_config_with_retry(config: &MongoConfig) -> Result<Client, MongoError> {
    retry_with_backoff(|| connect_from_config(config), config.retry_policy()).await
}

/// Round-trips a `ping` command against `db`.
pub async fn ping(db: &Database) -> Result<(), MongoError> {
    db.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}

/// Closes every pooled connection held by `client`.
///
/// Call once during graceful shutdown, after the HTTP server stops accepting requests.
pub async fn shutdown(client: Client) {
    info!("Closing MongoDB connections");
    client.shutdown().await;
}
