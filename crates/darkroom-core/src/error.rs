use thiserror::Error;

#[derive(Error, Debug)]
pub enum DarkroomError {
    /// Gateway failure carrying the user-facing message.
    #[error("{0}")]
    Gateway(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid image payload: {0}")]
    InvalidPayload(String),

    #[error("API key not configured. Set GEMINI_API_KEY or add api_key to darkroom.toml")]
    MissingApiKey,
}

pub type Result<T> = std::result::Result<T, DarkroomError>;
