use std::env;
use std::path::PathBuf;

/// Explicit server configuration, read once at startup. Nothing else in the
/// stack touches the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address, `PLATEN_ADDR`.
    pub addr: String,
    /// Tera glob for template discovery, `PLATEN_TEMPLATE_GLOB`.
    pub template_glob: String,
    /// Media root for persisted documents, `PLATEN_MEDIA_ROOT`.
    pub media_root: PathBuf,
    /// External HTML→PDF converter command line, `PLATEN_PDF_COMMAND`.
    /// The converter must read HTML on stdin and write PDF to stdout.
    pub pdf_command: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            addr: env::var("PLATEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            template_glob: env::var("PLATEN_TEMPLATE_GLOB")
                .unwrap_or_else(|_| "templates/**/*.html".to_string()),
            media_root: env::var("PLATEN_MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("media")),
            pdf_command: env::var("PLATEN_PDF_COMMAND")
                .unwrap_or_else(|_| "weasyprint - -".to_string()),
        }
    }
}
