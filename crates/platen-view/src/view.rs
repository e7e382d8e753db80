use std::path::PathBuf;
use std::sync::Arc;

use tera::Tera;

use platen_media::store::MediaStore;
use platen_render::engine::PdfEngine;
use platen_render::options::PdfOptions;
use platen_render::pdf::{PdfRequest, RenderedPdf, render_to_pdf};

use crate::context::{self, Context};
use crate::error::ViewError;

/// One PDF-producing view: template candidates plus render configuration,
/// with the rendering machinery injected at construction.
///
/// Views are built once at startup and shared immutably across requests.
/// Per-request behavior is driven entirely by the context passed to
/// [`PdfView::pdf_response`].
#[derive(Clone)]
pub struct PdfView {
    tera: Arc<Tera>,
    engine: Arc<dyn PdfEngine>,
    media: MediaStore,
    template_names: Vec<String>,
    pdf_filename: Option<String>,
    pdf_options: PdfOptions,
    extra_context: Context,
}

impl PdfView {
    pub fn new(
        tera: Arc<Tera>,
        engine: Arc<dyn PdfEngine>,
        media: MediaStore,
        template: impl Into<String>,
    ) -> Self {
        Self {
            tera,
            engine,
            media,
            template_names: vec![template.into()],
            pdf_filename: None,
            pdf_options: PdfOptions::new(),
            extra_context: Context::new(),
        }
    }

    /// Add a fallback template candidate, tried after the ones already set.
    pub fn template_fallback(mut self, template: impl Into<String>) -> Self {
        self.template_names.push(template.into());
        self
    }

    /// Default filename offered for inline display. Distinct from the
    /// per-request `pdf_filename` context key, which drives persistence and
    /// downloads.
    pub fn pdf_filename(mut self, filename: impl Into<String>) -> Self {
        self.pdf_filename = Some(filename.into());
        self
    }

    /// Extra options handed to the PDF engine, cloned per call.
    pub fn pdf_options(mut self, options: PdfOptions) -> Self {
        self.pdf_options = options;
        self
    }

    /// Static context merged under every request's own variables.
    pub fn extra_context(mut self, extra: Context) -> Self {
        self.extra_context = extra;
        self
    }

    pub fn template_names(&self) -> &[String] {
        &self.template_names
    }

    /// Starting context for a request: a copy of the view's static extras.
    /// Request-derived keys are inserted on top by the caller.
    pub fn base_context(&self) -> Context {
        self.extra_context.clone()
    }

    /// Render the view's template to a PDF response.
    ///
    /// Reads the control keys from `context`, renders with the full context
    /// (control keys included), persists a copy when `pdf_filename` is set
    /// (independent of the `download` flag), and returns the rendered
    /// document unchanged — persistence never alters the returned bytes.
    /// Render and persistence failures both propagate, fatal to the request.
    pub fn pdf_response(&self, context: &Context) -> Result<RenderedPdf, ViewError> {
        let pdf_file = context::pdf_filename(context);
        let pdf_root = context::pdf_root(context);

        // Attachment only on an exact boolean `true`.
        let download_filename = if context::download_requested(context) {
            pdf_file.map(str::to_string)
        } else {
            None
        };

        let rendered = render_to_pdf(
            &self.tera,
            self.engine.as_ref(),
            PdfRequest {
                template_names: &self.template_names,
                context,
                download_filename,
                options: self.pdf_options.clone(),
            },
        )?;

        if let Some(filename) = pdf_file {
            let path = match pdf_root {
                Some(root) => {
                    let path = PathBuf::from(root);
                    self.media.write_to(&path, &rendered.bytes)?;
                    path
                }
                None => self.media.write_generated(filename, &rendered.bytes)?,
            };
            tracing::info!(path = %path.display(), "persisted generated PDF");
        }

        Ok(rendered)
    }

    /// `Content-Disposition` for a rendered document, folding in the view's
    /// default inline filename when no download was requested.
    pub fn disposition_for(&self, rendered: &RenderedPdf) -> String {
        match (&rendered.download_filename, &self.pdf_filename) {
            (None, Some(name)) => format!("inline; filename=\"{name}\""),
            _ => rendered.content_disposition(),
        }
    }
}
