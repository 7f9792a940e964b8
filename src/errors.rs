use thiserror::Error;

#[derive(Debug, Error)]
pub enum BrieflyError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Invalid request payload: {0}")]
    InvalidPayload(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for BrieflyError {
    fn from(error: serde_json::Error) -> Self {
        if error.is_data() {
            BrieflyError::InvalidPayload(error.to_string())
        } else {
            BrieflyError::ParseError(error.to_string())
        }
    }
}

impl From<base64::DecodeError> for BrieflyError {
    fn from(error: base64::DecodeError) -> Self {
        BrieflyError::ParseError(format!("Invalid base64 body: {}", error))
    }
}

impl From<std::string::FromUtf8Error> for BrieflyError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        BrieflyError::ParseError(format!("Body is not valid UTF-8: {}", error))
    }
}
