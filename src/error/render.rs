use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("[Chart] Failed to draw: {0}")]
    DrawError(String),
    #[error("[Chart] Failed to write output {path}: {reason}")]
    OutputError { path: String, reason: String },
}
