//! Server infrastructure: router assembly, liveness/readiness probes and
//! graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let root = health_router(app_info!());
//! let app = create_router::<ApiDoc>(api_routes, root, cors);
//! create_production_app(app, &server_config, server_config.shutdown_timeout, cleanup).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::shutdown_signal;
