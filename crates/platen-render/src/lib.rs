//! platen-render
//!
//! Template rendering plus the HTML→PDF engine seam. Templates are resolved
//! and rendered with Tera; the PDF conversion itself is delegated to an
//! external engine behind [`engine::PdfEngine`].

pub mod engine;
pub mod error;
pub mod options;
pub mod pdf;
pub mod render;
