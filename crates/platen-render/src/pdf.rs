use serde_json::{Map, Value};
use tera::Tera;

use crate::engine::PdfEngine;
use crate::error::RenderError;
use crate::options::PdfOptions;
use crate::render::render_first;

/// One render request: template candidates, the full rendering context, the
/// filename to offer for download (`None` = display inline), and engine
/// options.
#[derive(Debug)]
pub struct PdfRequest<'a> {
    pub template_names: &'a [String],
    pub context: &'a Map<String, Value>,
    pub download_filename: Option<String>,
    pub options: PdfOptions,
}

/// A rendered document plus the response metadata that travels with it.
#[derive(Debug)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
    pub download_filename: Option<String>,
}

impl RenderedPdf {
    pub const CONTENT_TYPE: &'static str = "application/pdf";

    /// `Content-Disposition` value: attachment when a download filename was
    /// requested, inline otherwise.
    pub fn content_disposition(&self) -> String {
        match &self.download_filename {
            Some(name) => format!("attachment; filename=\"{name}\""),
            None => "inline".to_string(),
        }
    }
}

/// Render a template to PDF bytes.
///
/// Resolves the first existing template candidate, renders it with the given
/// context, and hands the HTML to the engine. The returned [`RenderedPdf`]
/// carries the download filename through unchanged.
pub fn render_to_pdf(
    tera: &Tera,
    engine: &dyn PdfEngine,
    request: PdfRequest<'_>,
) -> Result<RenderedPdf, RenderError> {
    let html = render_first(tera, request.template_names, request.context)?;

    tracing::debug!(
        templates = %request.template_names.join(", "),
        html_len = html.len(),
        "rendering template to PDF"
    );

    let bytes = engine.html_to_pdf(&html, &request.options)?;

    Ok(RenderedPdf {
        bytes,
        download_filename: request.download_filename,
    })
}
