use std::sync::Arc;

use tera::Tera;
use tracing_subscriber::EnvFilter;

use platen_media::store::MediaStore;
use platen_render::engine::{CommandEngine, PdfEngine};
use platen_server::config::ServerConfig;
use platen_server::router::router;
use platen_view::view::PdfView;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ServerConfig::from_env();

    let tera = Arc::new(Tera::new(&config.template_glob)?);
    let engine: Arc<dyn PdfEngine> = Arc::new(
        CommandEngine::from_command_line(&config.pdf_command)
            .ok_or_else(|| eyre::eyre!("PLATEN_PDF_COMMAND is empty"))?,
    );
    let media = MediaStore::new(&config.media_root);

    let invoice = PdfView::new(
        tera.clone(),
        engine.clone(),
        media.clone(),
        "invoice.html",
    )
    .pdf_filename("invoice.pdf");

    let report = PdfView::new(tera.clone(), engine.clone(), media.clone(), "report.html")
        .template_fallback("report_base.html");

    let app = router(vec![
        ("/invoices/{number}", invoice),
        ("/reports/{client}", report),
    ]);

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    tracing::info!(addr = %config.addr, "platen listening");
    axum::serve(listener, app).await?;

    Ok(())
}
