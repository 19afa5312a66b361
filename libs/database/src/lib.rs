//! MongoDB connector and the startup plumbing shared by every service.
//!
//! # Features
//!
//! - `config` - `MongoConfig::from_env` through `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::from_env()?;
//! let client = mongodb::connect_from_config_with_retry(&config).await?;
//! let db = client.database(&config.database);
//!
//! // ... serve requests ...
//!
//! mongodb::shutdown(client).await;
//! ```

pub mod common;
pub mod mongodb;

pub use common::{RetryConfig, retry_with_backoff};
