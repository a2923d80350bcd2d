use super::mapping_error::{EncodingError, MappingError, ParseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimitError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Could not map TMDB movie: {0}")]
    Mapping(#[from] MappingError),

    #[error("Could not encode image: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Could not parse date: {0}")]
    Parse(#[from] ParseError),
}

impl From<diesel::result::Error> for AppError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => AppError::NotFound("No matching row".to_string()),
            other => AppError::DatabaseError(other.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for AppError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        AppError::DatabaseError(format!("Connection pool: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return AppError::ExternalServiceError("TMDB request timed out".to_string());
        }
        if err.is_connect() {
            return AppError::ExternalServiceError("Could not reach TMDB".to_string());
        }

        match err.status().map(|s| s.as_u16()) {
            Some(429) => AppError::RateLimitError(err.to_string()),
            Some(404) => AppError::NotFound(err.to_string()),
            Some(401) | Some(403) => AppError::Unauthorized(err.to_string()),
            _ => AppError::ApiError(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Blocking task failed: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
