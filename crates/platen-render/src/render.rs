use serde_json::{Map, Value};
use tera::{Context, Tera};

use crate::error::RenderError;

/// Render the first template candidate that exists in `tera`.
///
/// Candidates are tried in order; a candidate that exists but fails to render
/// is a hard error, not a reason to try the next one. If no candidate exists
/// at all, returns [`RenderError::TemplateNotFound`] naming them all.
pub fn render_first(
    tera: &Tera,
    candidates: &[String],
    context: &Map<String, Value>,
) -> Result<String, RenderError> {
    let name = candidates
        .iter()
        .find(|name| tera.get_template_names().any(|t| t == name.as_str()))
        .ok_or_else(|| RenderError::TemplateNotFound(candidates.join(", ")))?;

    let ctx = Context::from_value(Value::Object(context.clone()))
        .map_err(|e| RenderError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(name, &ctx)?;
    Ok(rendered)
}
