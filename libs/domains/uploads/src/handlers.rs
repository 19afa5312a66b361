//! HTTP handler for multipart uploads

use axum::{
    Router,
    extract::{DefaultBodyLimit, State},
    routing::post,
};
use axum_helpers::MultipartForm;
use axum_helpers::errors::responses::{
    BadRequestValidationResponse, InternalServerErrorResponse, PayloadTooLargeResponse,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::config::UploadConfig;
use crate::error::{UploadError, UploadResult};
use crate::service::UploadService;
use crate::storage::FileStorage;

/// Multipart field that carries the file
pub const FILE_FIELD: &str = "file";

/// OpenAPI documentation for the upload endpoint
#[derive(OpenApi)]
#[openapi(
    paths(upload),
    components(responses(
        BadRequestValidationResponse,
        PayloadTooLargeResponse,
        InternalServerErrorResponse
    )),
    tags((name = "Uploads", description = "File uploads"))
)]
pub struct ApiDoc;

/// Create the uploads router. Request bodies over `config.max_bytes` are
/// rejected with 413.
pub fn router<S: FileStorage + 'static>(service: UploadService<S>, config: &UploadConfig) -> Router {
    Router::new()
        .route("/upload", post(upload::<S>))
        .layer(DefaultBodyLimit::max(config.max_bytes))
        .with_state(Arc::new(service))
}

/// Upload a single file in the `file` field
#[utoipa::path(
    post,
    path = "/upload",
    tag = "Uploads",
    request_body(content_type = "multipart/form-data", description = "One file in the `file` field"),
    responses(
        (status = 200, description = "`File uploaded successfully: <name>`", body = String, content_type = "text/plain"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 413, response = PayloadTooLargeResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn upload<S: FileStorage>(
    State(service): State<Arc<UploadService<S>>>,
    MultipartForm(mut multipart): MultipartForm,
) -> UploadResult<String> {
    let mut upload: Option<(Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        if upload.is_some() {
            return Err(UploadError::MultipleFiles);
        }

        let file_name = field.file_name().map(str::to_string);
        let data = field.bytes().await?;
        upload = Some((file_name, data.to_vec()));
    }

    let (file_name, data) = upload.ok_or(UploadError::MissingFile)?;
    let name = service.store(file_name.as_deref(), &data).await?;
    Ok(format!("File uploaded successfully: {}", name))
}
