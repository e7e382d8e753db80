use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use platen_view::view::PdfView;

use crate::middleware;
use crate::routes;

/// Assemble the application router from `(path, view)` pairs.
pub fn router(views: Vec<(&str, PdfView)>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new().route("/health", get(routes::health::health_check));

    // PDF views answer GET only.
    for (path, view) in views {
        app = app.route(path, routes::pdf::pdf_get(view));
    }

    app.layer(axum_mw::from_fn(middleware::log::request_log))
        .layer(cors)
}
