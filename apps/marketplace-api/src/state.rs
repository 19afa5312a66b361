//! Application state management.
//!
//! Shared by the route builders in [`crate::api`]: configuration, the
//! MongoDB handles and the token signer.

use axum_helpers::JwtAuth;
use mongodb::{Client, Database};

#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
    /// Issues tokens at login and verifies them on protected routes
    pub auth: JwtAuth,
}

#[cfg(test)]
impl AppState {
    /// State whose client points at a closed port; MongoDB calls fail fast.
    pub(crate) async fn unreachable(upload_dir: impl Into<std::path::PathBuf>) -> Self {
        use crate::config::{Config, Environment};
        use axum_helpers::JwtConfig;
        use core_config::{app_info, server::ServerConfig};
        use database::mongodb::MongoConfig;
        use domain_uploads::UploadConfig;

        let url = "mongodb://127.0.0.1:1/?serverSelectionTimeoutMS=200&connectTimeoutMS=200";
        let mongo_client = Client::with_uri_str(url).await.unwrap();
        let jwt = JwtConfig::new("state-test-secret-0123456789abcdef");

        Self {
            config: Config {
                app: app_info!(),
                mongodb: MongoConfig::with_database(url, "marketplace"),
                server: ServerConfig::new("127.0.0.1".to_string(), 0),
                environment: Environment::Development,
                jwt: jwt.clone(),
                uploads: UploadConfig {
                    dir: upload_dir.into(),
                    ..UploadConfig::default()
                },
            },
            db: mongo_client.database("marketplace"),
            mongo_client,
            auth: JwtAuth::new(&jwt),
        }
    }
}
