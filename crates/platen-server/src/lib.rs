//! platen-server
//!
//! HTTP surface: GET routes that hand a request-derived context to a
//! [`platen_view::view::PdfView`] and reply with the rendered PDF.

pub mod config;
pub mod error;
pub mod middleware;
pub mod router;
pub mod routes;
