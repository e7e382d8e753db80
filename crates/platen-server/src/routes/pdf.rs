use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Query, RawPathParams};
use axum::http::{StatusCode, header};
use axum::response::Response;
use axum::routing::{MethodRouter, get};
use serde_json::Value;

use platen_render::pdf::RenderedPdf;
use platen_view::view::PdfView;

use crate::error::ApiError;

/// GET handler for one PDF view.
///
/// The context starts from the view's static extras, then takes every URL
/// path parameter (as a string) and every query parameter (JSON-coerced, so
/// `?download=true` arrives as a boolean). The view itself runs under
/// `spawn_blocking`: template rendering, the converter process, and the
/// optional file write are all synchronous.
pub fn pdf_get(view: PdfView) -> MethodRouter {
    let view = Arc::new(view);
    get(
        move |params: RawPathParams, Query(query): Query<HashMap<String, String>>| {
            let view = view.clone();
            async move { serve(view, params, query).await }
        },
    )
}

async fn serve(
    view: Arc<PdfView>,
    params: RawPathParams,
    query: HashMap<String, String>,
) -> Result<Response, ApiError> {
    let mut context = view.base_context();
    for (key, value) in &params {
        context.insert(key.to_string(), Value::String(value.to_string()));
    }
    for (key, value) in query {
        context.insert(key, coerce_scalar(&value));
    }

    let worker = view.clone();
    let rendered = tokio::task::spawn_blocking(move || worker.pdf_response(&context))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    pdf_http_response(&view, rendered)
}

fn pdf_http_response(view: &PdfView, rendered: RenderedPdf) -> Result<Response, ApiError> {
    let disposition = view.disposition_for(&rendered);
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, RenderedPdf::CONTENT_TYPE)
        .header(header::CONTENT_DISPOSITION, disposition)
        .body(Body::from(rendered.bytes))
        .map_err(|e| ApiError::Internal(e.to_string()))
}

/// Query values that parse as JSON booleans, numbers, or null enter the
/// context typed; everything else stays a string. The download flag only
/// fires on a real boolean, so `?download=true` works and `?download=yes`
/// stays inline.
fn coerce_scalar(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Bool(_) | Value::Number(_) | Value::Null)) => value,
        _ => Value::String(raw.to_string()),
    }
}
