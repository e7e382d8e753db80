//! platen-media
//!
//! Local filesystem persistence for generated documents. Defines the media
//! directory layout and writes bytes verbatim; nothing here knows what a PDF
//! is.

pub mod error;
pub mod store;
