use thiserror::Error;

use platen_media::error::MediaError;
use platen_render::error::RenderError;

/// Both failure classes are fatal to the request: no retry, no fallback to
/// an inline-only response when persistence fails.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Media(#[from] MediaError),
}
