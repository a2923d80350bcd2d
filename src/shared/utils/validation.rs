use regex::Regex;
use std::sync::OnceLock;

use crate::shared::errors::AppError;

fn collection_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-zA-Z0-9\s\-_]+$").expect("static regex is valid"))
}

pub struct Validator;

impl Validator {
    pub fn validate_movie_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if title.len() > 255 {
            return Err(AppError::ValidationError(
                "Title too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_vote_average(score: f32) -> Result<(), AppError> {
        if !(0.0..=10.0).contains(&score) {
            return Err(AppError::ValidationError(
                "Vote average must be between 0 and 10".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_runtime(runtime: i32) -> Result<(), AppError> {
        if runtime < 0 {
            return Err(AppError::ValidationError(
                "Runtime cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_collection_name(name: &str) -> Result<(), AppError> {
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "Collection name cannot be empty".to_string(),
            ));
        }
        if name.len() > 100 {
            return Err(AppError::ValidationError(
                "Collection name too long (max 100 characters)".to_string(),
            ));
        }

        // Alphanumeric, spaces, dashes and underscores
        if !collection_name_pattern().is_match(name) {
            return Err(AppError::ValidationError(
                "Collection name contains invalid characters".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_tmdb_id(tmdb_id: i32) -> Result<(), AppError> {
        if tmdb_id <= 0 {
            return Err(AppError::ValidationError(
                "TMDB ID must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_names() {
        assert!(Validator::validate_collection_name("All").is_ok());
        assert!(Validator::validate_collection_name("Sci-Fi Night_2").is_ok());
        assert!(Validator::validate_collection_name("").is_err());
        assert!(Validator::validate_collection_name("Drop; table").is_err());
        assert!(Validator::validate_collection_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_vote_average_bounds() {
        assert!(Validator::validate_vote_average(0.0).is_ok());
        assert!(Validator::validate_vote_average(10.0).is_ok());
        assert!(Validator::validate_vote_average(10.5).is_err());
    }
}
