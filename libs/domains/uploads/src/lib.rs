//! Uploads Domain
//!
//! Accepts one file per multipart request and stores it on local disk under a
//! generated, collision-free name. Stored files are served back by the
//! application under `/uploads/<name>`.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_uploads::{handlers, LocalFileStorage, UploadConfig, UploadService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = UploadConfig::default();
//! let storage = LocalFileStorage::new(&config.dir);
//! storage.ensure_root().await?;
//!
//! let router = handlers::router(UploadService::new(storage), &config);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod naming;
pub mod service;
pub mod storage;

pub use config::UploadConfig;
pub use error::{UploadError, UploadResult};
pub use service::UploadService;
pub use storage::{FileStorage, LocalFileStorage};
