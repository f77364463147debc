use themeloom_parser::ParseError;
use thiserror::Error;

/// Common error type that can hold any themeloom error
#[derive(Error, Debug)]
pub enum ThemeloomError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Generic(String),
}

impl From<String> for ThemeloomError {
    fn from(s: String) -> Self {
        ThemeloomError::Generic(s)
    }
}

impl From<&str> for ThemeloomError {
    fn from(s: &str) -> Self {
        ThemeloomError::Generic(s.to_string())
    }
}
