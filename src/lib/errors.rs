use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Storage(String),
    Serialization(String),
    Telemetry(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Storage(message) => write!(formatter, "Storage error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Serialization error: {message}")
            }
            AppError::Telemetry(message) => write!(formatter, "Telemetry error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Serialization(error.to_string())
    }
}
