use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("PDF engine failed: {0}")]
    Engine(String),

    #[error("PDF engine I/O error: {0}")]
    EngineIo(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for RenderError {
    fn from(e: tera::Error) -> Self {
        RenderError::TemplateRender(e.to_string())
    }
}
