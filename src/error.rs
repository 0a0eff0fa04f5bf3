use thiserror::Error;

#[derive(Error, Debug)]
pub enum PackfitError {
    #[error("answer file not found: {0}")]
    AnswersNotFound(String),

    #[error("unsupported answer file format: {0}")]
    UnsupportedFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PackfitError>;
