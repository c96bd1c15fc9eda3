// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! PDF generation endpoint.

use crate::error::{AppError, Result};
use crate::models::GeneratePdfRequest;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/generate-pdf", post(generate_pdf))
}

/// Render the requested document and return it as a PDF attachment.
async fn generate_pdf(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<GeneratePdfRequest>, JsonRejection>,
) -> Result<Response> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::debug!(
        doc_type = %request.doc_type,
        numero = %request.document_info.numero,
        "Generating PDF"
    );

    let document = state.documents.generate(&request).await?;
    let disposition = content_disposition(&document.filename)?;

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/pdf")),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        document.pdf,
    )
        .into_response())
}

/// `attachment; filename=...` for `filename`.
///
/// Characters outside a conservative ASCII set are replaced in `filename`;
/// in that case the exact name is also sent percent-encoded in `filename*`.
fn content_disposition(filename: &str) -> Result<HeaderValue> {
    let safe: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let value = if safe == filename {
        format!("attachment; filename={safe}")
    } else {
        format!(
            "attachment; filename={safe}; filename*=UTF-8''{}",
            urlencoding::encode(filename)
        )
    };

    HeaderValue::from_str(&value)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("invalid Content-Disposition: {e}")))
}
