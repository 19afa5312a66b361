//! API routes module
//!
//! Wires the domain crates to their MongoDB repositories and local storage.

pub mod checkout;
pub mod health;
pub mod products;
pub mod uploads;
pub mod users;

use axum::Router;
use tower_http::services::ServeDir;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .merge(users::router(state))
        .merge(products::router(state))
        .merge(uploads::router(state))
        .merge(checkout::router())
        .merge(health::router(state.clone()))
}

/// Routes outside `/api`: the liveness probe and the uploaded files.
pub fn root_routes(state: &AppState) -> Router {
    axum_helpers::health_router(state.config.app)
        .nest_service("/uploads", ServeDir::new(&state.config.uploads.dir))
}

/// Prepares collections and directories the routes depend on.
pub async fn init(state: &AppState) -> eyre::Result<()> {
    users::init_indexes(&state.db).await?;
    uploads::ensure_upload_dir(state).await?;
    Ok(())
}
