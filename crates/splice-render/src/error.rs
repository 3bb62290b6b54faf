/// Errors that can occur while rendering a decoded pattern.
///
/// Text rendering cannot fail; only the JSON path has an error source.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
