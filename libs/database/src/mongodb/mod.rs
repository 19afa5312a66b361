//! MongoDB connection management and error helpers.

mod config;
mod connector;
mod errors;
pub mod uuid_string;

pub use config::MongoConfig;
pub use connector::{MongoError, connect_from_config, connect_from_config_with_retry, ping, shutdown};
pub use errors::{DUPLICATE_KEY_CODE, is_duplicate_key_error};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
