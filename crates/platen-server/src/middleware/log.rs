use axum::extract::Request;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

/// Request logging middleware.
///
/// Logs every request as a structured `tracing` event once the response is
/// ready, including how the document was served (`inline` vs `attachment`)
/// so a download request can be told apart from a plain render in the logs.
pub async fn request_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");
    tracing::info!(
        method = %method,
        path = %uri,
        status = status,
        disposition = %disposition,
        "http_request"
    );

    response
}
