use std::fmt;

#[derive(Debug)]
pub enum CareloopError {
    ApiError {
        status: u16,
        message: String,
    },
    ConfigError(String),
    /// The generation API answered, but without the expected
    /// candidate/content shape.
    MalformedResponse(String),
    StoreError(String),
    NetworkError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
    Other(String),
}

impl fmt::Display for CareloopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CareloopError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            CareloopError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CareloopError::MalformedResponse(msg) => {
                write!(f, "Malformed generation response: {}", msg)
            }
            CareloopError::StoreError(msg) => write!(f, "Store error: {}", msg),
            CareloopError::NetworkError(e) => write!(f, "Network error: {}", e),
            CareloopError::IoError(e) => write!(f, "IO error: {}", e),
            CareloopError::JsonError(e) => write!(f, "JSON error: {}", e),
            CareloopError::YamlError(e) => write!(f, "YAML error: {}", e),
            CareloopError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CareloopError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CareloopError::NetworkError(e) => Some(e),
            CareloopError::IoError(e) => Some(e),
            CareloopError::JsonError(e) => Some(e),
            CareloopError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CareloopError {
    fn from(err: reqwest::Error) -> Self {
        CareloopError::NetworkError(err)
    }
}

impl From<std::io::Error> for CareloopError {
    fn from(err: std::io::Error) -> Self {
        CareloopError::IoError(err)
    }
}

impl From<serde_json::Error> for CareloopError {
    fn from(err: serde_json::Error) -> Self {
        CareloopError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for CareloopError {
    fn from(err: serde_yaml::Error) -> Self {
        CareloopError::YamlError(err)
    }
}

impl From<anyhow::Error> for CareloopError {
    fn from(err: anyhow::Error) -> Self {
        CareloopError::Other(err.to_string())
    }
}

impl From<String> for CareloopError {
    fn from(msg: String) -> Self {
        CareloopError::Other(msg)
    }
}

impl From<&str> for CareloopError {
    fn from(msg: &str) -> Self {
        CareloopError::Other(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CareloopError>;
