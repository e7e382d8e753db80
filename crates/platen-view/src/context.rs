//! Context control keys.
//!
//! The rendering context is a plain JSON map; three well-known keys steer the
//! adapter. The full map, control keys included, is also what templates see.

use serde_json::{Map, Value};

/// Template-rendering variables for one request.
pub type Context = Map<String, Value>;

/// Desired output filename; presence triggers persistence.
pub const PDF_FILENAME: &str = "pdf_filename";

/// Absolute override of the persisted path.
pub const PDF_ROOT: &str = "pdf_root";

/// Attachment disposition toggle; must be exactly boolean `true`.
pub const DOWNLOAD: &str = "download";

/// An empty string counts as absent, for both keys below: `""` never names
/// a file and never overrides the default path.
pub fn pdf_filename(context: &Context) -> Option<&str> {
    context
        .get(PDF_FILENAME)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

pub fn pdf_root(context: &Context) -> Option<&str> {
    context
        .get(PDF_ROOT)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// True only for JSON `true`. Strings like `"true"`, numbers, and anything
/// else mean inline display.
pub fn download_requested(context: &Context) -> bool {
    matches!(context.get(DOWNLOAD), Some(Value::Bool(true)))
}
