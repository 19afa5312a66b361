//! JSON extractor with automatic validation using the validator crate.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

/// JSON body that has been deserialized and passed `Validate`.
///
/// Both a malformed body and a failed validation are rejected with a 400
/// [`ErrorResponse`](crate::ErrorResponse).
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct NewComment {
///     #[serde(default)]
///     #[validate(custom(function = "not_blank", message = "Comment text is required"))]
///     text: String,
/// }
///
/// async fn add(ValidatedJson(body): ValidatedJson<NewComment>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        data.validate()?;
        Ok(ValidatedJson(data))
    }
}

/// `validator` custom rule rejecting empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::post,
    };
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct NewComment {
        #[serde(default)]
        #[validate(custom(function = "not_blank", message = "Comment text is required"))]
        text: String,
    }

    async fn echo(ValidatedJson(body): ValidatedJson<NewComment>) -> String {
        body.text
    }

    async fn send(body: &str, content_type: Option<&str>) -> (StatusCode, Vec<u8>) {
        let mut request = Request::builder().method("POST").uri("/");
        if let Some(ct) = content_type {
            request = request.header(header::CONTENT_TYPE, ct);
        }
        let response = Router::new()
            .route("/", post(echo))
            .oneshot(request.body(Body::from(body.to_string())).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[test]
    fn test_not_blank() {
        assert!(not_blank("hi").is_ok());
        assert!(not_blank("").is_err());
        assert!(not_blank(" \t\n").is_err());
    }

    #[tokio::test]
    async fn test_valid_body_passes() {
        let (status, body) = send(r#"{"text":"nice"}"#, Some("application/json")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"nice");
    }

    #[tokio::test]
    async fn test_missing_field_uses_validation_message() {
        let (status, body) = send("{}", Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "Comment text is required");
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let (status, body) = send("{not json", Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "JSON_EXTRACTION");
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let (status, _) = send(r#"{"text":"nice"}"#, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
