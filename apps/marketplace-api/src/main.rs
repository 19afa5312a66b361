use axum_helpers::{JwtAuth, create_production_app, create_router, cors_layer_from_env};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!("Connecting to MongoDB at {}", config.mongodb.redacted_url());

    let mongo_client = database::mongodb::connect_from_config_with_retry(&config.mongodb).await?;
    let db = mongo_client.database(&config.mongodb.database);

    info!(
        "Successfully connected to MongoDB database: {}",
        config.mongodb.database
    );

    let auth = JwtAuth::new(&config.jwt);
    let state = AppState {
        config,
        mongo_client,
        db,
        auth,
    };

    // Indexes and the upload directory
    api::init(&state).await?;

    let cors = cors_layer_from_env(&state.config.environment)?;
    let router = create_router::<openapi::ApiDoc>(
        api::routes(&state),
        api::root_routes(&state),
        cors,
    );

    let server = state.config.server.clone();
    let client = state.mongo_client.clone();

    info!(
        "Starting {} v{} (shutdown timeout {:?})",
        state.config.app.name, state.config.app.version, server.shutdown_timeout
    );

    create_production_app(router, &server, server.shutdown_timeout, async move {
        info!("Shutting down: closing MongoDB connections");
        database::mongodb::shutdown(client).await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Marketplace API shutdown complete");
    Ok(())
}
