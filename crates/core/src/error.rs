#[derive(Debug, thiserror::Error)]
pub enum ShapeError {
    /// A raw row did not serialize to a JSON object.
    #[error("Row is not a JSON object")]
    NotAnObject,

    #[error("View model shaping failed: {0}")]
    Shape(#[from] serde_json::Error),
}
