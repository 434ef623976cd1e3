use thiserror::Error;

/// Application-level error type.
/// Everything except a missing icon image is fatal and propagates to `main`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Profile parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Document build error: {0}")]
    Docx(#[from] docx_rs::DocxError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("PDF conversion error: {0}")]
    Convert(String),
}
