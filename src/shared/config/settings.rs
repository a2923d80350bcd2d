use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// What to do with a US certification that is not in the rating table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CertificationFallback {
    /// Fail the mapping with a `RatingResolutionError`
    #[default]
    Fail,
    /// Log and use `MovieRating::NR`
    NotRated,
}

impl FromStr for CertificationFallback {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fail" | "error" => Ok(CertificationFallback::Fail),
            "not_rated" | "notrated" | "nr" => Ok(CertificationFallback::NotRated),
            other => Err(AppError::ConfigError(format!(
                "Unknown certification fallback '{}', expected 'fail' or 'not_rated'",
                other
            ))),
        }
    }
}

/// Connection settings for the TMDB API and its image/video hosts
#[derive(Debug, Clone)]
pub struct TmdbSettings {
    pub api_key: String,
    pub base_url: String,
    pub base_image_path: String,
    pub base_youtube_path: String,
    pub timeout_seconds: u64,
}

impl TmdbSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.themoviedb.org/3".to_string(),
            base_image_path: "https://image.tmdb.org/t/p".to_string(),
            base_youtube_path: "https://www.youtube.com/watch?v=".to_string(),
            timeout_seconds: 10,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

/// Catalog defaults applied while importing
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub poster_size: String,
    pub backdrop_size: String,
    pub default_cast_image: String,
    pub default_collection: String,
    pub certification_fallback: CertificationFallback,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            poster_size: "original".to_string(),
            backdrop_size: "original".to_string(),
            default_cast_image: "/img/DefaultCastImage.png".to_string(),
            default_collection: "All".to_string(),
            certification_fallback: CertificationFallback::default(),
        }
    }
}

/// Process-wide settings, read once at startup and shared immutably
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub tmdb: TmdbSettings,
    pub catalog: CatalogSettings,
    pub database_url: Option<String>,
}

impl AppSettings {
    pub fn new(tmdb: TmdbSettings, catalog: CatalogSettings) -> Self {
        Self {
            tmdb,
            catalog,
            database_url: None,
        }
    }

    /// Load settings from the environment (and a `.env` file when present)
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = read("TMDB_API_KEY").ok_or_else(|| {
            AppError::ConfigError("TMDB_API_KEY environment variable not found".to_string())
        })?;

        let mut tmdb = TmdbSettings::new(api_key);
        if let Some(v) = read("TMDB_BASE_URL") {
            tmdb.base_url = v;
        }
        if let Some(v) = read("TMDB_BASE_IMAGE_PATH") {
            tmdb.base_image_path = v;
        }
        if let Some(v) = read("TMDB_BASE_YOUTUBE_PATH") {
            tmdb.base_youtube_path = v;
        }
        if let Some(v) = read("TMDB_TIMEOUT_SECONDS") {
            tmdb.timeout_seconds = v.trim().parse().map_err(|e| {
                AppError::ConfigError(format!("Invalid TMDB_TIMEOUT_SECONDS '{}': {}", v, e))
            })?;
        }

        let mut catalog = CatalogSettings::default();
        if let Some(v) = read("DEFAULT_POSTER_SIZE") {
            catalog.poster_size = v;
        }
        if let Some(v) = read("DEFAULT_BACKDROP_SIZE") {
            catalog.backdrop_size = v;
        }
        if let Some(v) = read("DEFAULT_CAST_IMAGE") {
            catalog.default_cast_image = v;
        }
        if let Some(v) = read("DEFAULT_COLLECTION") {
            let name = v.trim().to_string();
            Validator::validate_collection_name(&name).map_err(|e| {
                AppError::ConfigError(format!("Invalid DEFAULT_COLLECTION '{}': {}", v, e))
            })?;
            catalog.default_collection = name;
        }
        if let Some(v) = read("CERTIFICATION_FALLBACK") {
            catalog.certification_fallback = v.parse()?;
        }

        Ok(Self {
            tmdb,
            catalog,
            database_url: read("DATABASE_URL"),
        })
    }
}
