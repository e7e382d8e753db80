use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tera::Tera;
use tower::ServiceExt;
use uuid::Uuid;

use platen_media::store::MediaStore;
use platen_render::engine::PdfEngine;
use platen_render::error::RenderError;
use platen_render::options::PdfOptions;
use platen_server::router::router;
use platen_view::view::PdfView;

const PDF_BYTES: &[u8] = b"%PDF-1.7 http-stub";

struct StubEngine;

impl PdfEngine for StubEngine {
    fn html_to_pdf(&self, _html: &str, _options: &PdfOptions) -> Result<Vec<u8>, RenderError> {
        Ok(PDF_BYTES.to_vec())
    }
}

struct Fixture {
    media_root: PathBuf,
    app: axum::Router,
}

impl Fixture {
    fn new() -> Self {
        let media_root = std::env::temp_dir().join(format!("platen-http-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&media_root).unwrap();

        let mut tera = Tera::default();
        tera.add_raw_template("invoice.html", "<h1>Invoice {{ number }}</h1>")
            .unwrap();

        let view = PdfView::new(
            Arc::new(tera),
            Arc::new(StubEngine),
            MediaStore::new(&media_root),
            "invoice.html",
        )
        .pdf_filename("invoice.pdf");

        let app = router(vec![("/invoices/{number}", view)]);

        Self { media_root, app }
    }

    async fn get(&self, uri: &str) -> axum::http::Response<Body> {
        self.app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.media_root);
    }
}

fn header_str<'a>(resp: &'a axum::http::Response<Body>, name: header::HeaderName) -> &'a str {
    resp.headers().get(name).unwrap().to_str().unwrap()
}

#[tokio::test]
async fn health_is_up() {
    let f = Fixture::new();
    let resp = f.get("/health").await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn pdf_route_serves_inline_with_default_filename() {
    let f = Fixture::new();
    let resp = f.get("/invoices/42").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header_str(&resp, header::CONTENT_TYPE), "application/pdf");
    assert_eq!(
        header_str(&resp, header::CONTENT_DISPOSITION),
        "inline; filename=\"invoice.pdf\""
    );

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], PDF_BYTES);
}

#[tokio::test]
async fn download_query_forces_attachment_and_persists() {
    let f = Fixture::new();
    let resp = f
        .get("/invoices/42?pdf_filename=inv-42.pdf&download=true")
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        header_str(&resp, header::CONTENT_DISPOSITION),
        "attachment; filename=\"inv-42.pdf\""
    );

    let persisted = f.media_root.join("generated_pdf").join("inv-42.pdf");
    assert_eq!(std::fs::read(persisted).unwrap(), PDF_BYTES);
}

#[tokio::test]
async fn non_boolean_download_stays_inline() {
    let f = Fixture::new();
    let resp = f.get("/invoices/42?pdf_filename=inv.pdf&download=yes").await;

    assert_eq!(
        header_str(&resp, header::CONTENT_DISPOSITION),
        "inline; filename=\"invoice.pdf\""
    );

    // Persistence is independent of the download flag.
    let persisted = f.media_root.join("generated_pdf").join("inv.pdf");
    assert_eq!(std::fs::read(persisted).unwrap(), PDF_BYTES);
}

/// Shared buffer handed to `tracing_subscriber` so a test can read back what
/// the request middleware logged.
#[derive(Clone, Default)]
struct LogCapture(Arc<std::sync::Mutex<Vec<u8>>>);

impl LogCapture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl std::io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[tokio::test]
async fn request_log_records_the_disposition() {
    use tracing::instrument::WithSubscriber;

    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(tracing::Level::INFO)
        .finish();

    let f = Fixture::new();
    async {
        f.get("/invoices/7?pdf_filename=inv-7.pdf&download=true").await;
        f.get("/invoices/7").await;
    }
    .with_subscriber(subscriber)
    .await;

    let logged = capture.contents();
    assert!(logged.contains("http_request"));
    assert!(logged.contains("attachment; filename="));
    assert!(logged.contains("inline; filename="));
}

#[tokio::test]
async fn missing_template_maps_to_404() {
    let media_root = std::env::temp_dir().join(format!("platen-http-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&media_root).unwrap();

    let view = PdfView::new(
        Arc::new(Tera::default()),
        Arc::new(StubEngine),
        MediaStore::new(&media_root),
        "absent.html",
    );
    let app = router(vec![("/broken", view)]);

    let resp = app
        .oneshot(Request::builder().uri("/broken").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    std::fs::remove_dir_all(&media_root).unwrap();
}
