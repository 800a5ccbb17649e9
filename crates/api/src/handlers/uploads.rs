//! Handler for admin image uploads.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Upload size cap. Matched by the router's body limit.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Accepted image content types and the extension each is stored under.
const ALLOWED_TYPES: [(&str, &str); 3] = [
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
];

/// Default key prefix when the form supplies no `folder` field.
const DEFAULT_FOLDER: &str = "uploads";

/// Response body: the public URL of the stored object.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /api/v1/admin/uploads
///
/// Multipart form with a `file` part (jpeg/png/webp) and an optional
/// `folder` text part selecting the key prefix (e.g. `artworks`).
pub async fn upload(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut file: Option<(Vec<u8>, &'static str, &'static str)> = None;
    let mut folder = DEFAULT_FOLDER.to_string();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("malformed multipart body: {e}")))?
    {
        match field.name() {
            Some("file") => {
                let content_type = field.content_type().unwrap_or("").to_string();
                let (content_type, extension) = ALLOWED_TYPES
                    .iter()
                    .find(|(ct, _)| *ct == content_type)
                    .copied()
                    .ok_or_else(|| {
                        AppError::BadRequest(format!(
                            "unsupported content type: {content_type} (expected jpeg, png, or webp)"
                        ))
                    })?;

                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("failed to read upload: {e}")))?;
                if bytes.len() > MAX_UPLOAD_BYTES {
                    return Err(AppError::BadRequest(format!(
                        "upload exceeds {MAX_UPLOAD_BYTES} bytes"
                    )));
                }
                file = Some((bytes.to_vec(), content_type, extension));
            }
            Some("folder") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("failed to read folder: {e}")))?;
                folder = sanitize_folder(&value);
            }
            _ => {}
        }
    }

    let (bytes, content_type, extension) =
        file.ok_or_else(|| AppError::BadRequest("missing 'file' part".into()))?;

    let key = format!("{folder}/{}.{extension}", Uuid::new_v4());
    let url = state.storage.upload(&key, bytes, content_type).await?;

    tracing::info!(key = %key, user_id = admin.user_id, "Image uploaded");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UploadResponse { url },
        }),
    ))
}

/// Restrict folder names to a safe slug; anything else falls back to the
/// default prefix.
fn sanitize_folder(folder: &str) -> String {
    let cleaned: String = folder
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    if cleaned.is_empty() {
        DEFAULT_FOLDER.to_string()
    } else {
        cleaned.to_lowercase()
    }
}
