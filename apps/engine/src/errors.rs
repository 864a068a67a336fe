use thiserror::Error;

/// Application-level error type.
///
/// The dialogue engine itself never fails: every turn produces a well-formed
/// `BotResponse`, degrading to fallback responses on unmatched input. Errors
/// only arise at startup, when loading configuration or a content data file.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Content data error: {0}")]
    Data(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
