use std::fmt;

#[derive(Debug)]
pub enum AuditError {
    ApiError {
        status: u16,
        message: String,
    },
    ConfigError(String),
    ToolError(String),
    UnknownTool(String),
    NoToolCall,
    NetworkError(reqwest::Error),
    Timeout,
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    Other(String),
}

impl fmt::Display for AuditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuditError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            AuditError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AuditError::ToolError(msg) => write!(f, "Tool error: {}", msg),
            AuditError::UnknownTool(name) => write!(f, "Unknown tool: '{}'", name),
            AuditError::NoToolCall => {
                write!(f, "Model answered without requesting the contract lookup")
            }
            AuditError::NetworkError(e) => write!(f, "Network error: {}", e),
            AuditError::Timeout => write!(f, "Request timeout"),
            AuditError::IoError(e) => write!(f, "IO error: {}", e),
            AuditError::JsonError(e) => write!(f, "JSON error: {}", e),
            AuditError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AuditError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AuditError::NetworkError(e) => Some(e),
            AuditError::IoError(e) => Some(e),
            AuditError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuditError {
    fn from(err: reqwest::Error) -> Self {
        AuditError::NetworkError(err)
    }
}

impl From<std::io::Error> for AuditError {
    fn from(err: std::io::Error) -> Self {
        AuditError::IoError(err)
    }
}

impl From<serde_json::Error> for AuditError {
    fn from(err: serde_json::Error) -> Self {
        AuditError::JsonError(err)
    }
}

pub type Result<T> = std::result::Result<T, AuditError>;
