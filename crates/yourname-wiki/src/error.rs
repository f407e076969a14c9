#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("API error {code}: {info}")]
    Api { code: String, info: String },

    #[error("Malformed response: {0}")]
    Malformed(String),
}
