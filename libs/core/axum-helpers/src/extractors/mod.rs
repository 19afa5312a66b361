//! Custom extractors for Axum handlers.
//!
//! Each one rejects with [`AppError`](crate::AppError), so a malformed
//! request still gets a JSON [`ErrorResponse`](crate::ErrorResponse).

pub mod params;
pub mod validated_json;

pub use params::{MultipartForm, PathParam, QueryParams};
pub use validated_json::{ValidatedJson, not_blank};
