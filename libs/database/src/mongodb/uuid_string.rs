//! Serde adapter storing a [`Uuid`] as its hyphenated string.
//!
//! The driver's document serializer and [`mongodb::bson::to_bson`] disagree on
//! whether a `Uuid` is human-readable, so an id stored one way would not match
//! a filter built the other way.
//!
//! ```ignore
//! #[derive(Serialize, Deserialize)]
//! struct Product {
//!     #[serde(rename = "_id", with = "database::mongodb::uuid_string")]
//!     id: Uuid,
//! }
//!
//! collection.find_one(doc! { "_id": id.to_string() }).await?;
//! ```

use serde::{Deserialize, Deserializer, Serializer, de::Error};
use uuid::Uuid;

pub fn serialize<S: Serializer>(id: &Uuid, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&id.hyphenated())
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Uuid, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Uuid::parse_str(&raw).map_err(D::Error::custom)
}
