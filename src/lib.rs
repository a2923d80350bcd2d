//! Movie catalog backend: imports TMDB metadata, maps it into a local
//! PostgreSQL schema and organizes movies into collections.
//!
//! A host application builds one [`AppContext`] at startup and hands its
//! services to its own request handlers.

pub mod modules;
mod schema;
pub mod shared;

use modules::{
    collection::{CollectionRepository, CollectionRepositoryImpl, CollectionService},
    media::{HttpImageEncoder, ImageEncoder},
    movie::{ActorService, MovieRepository, MovieRepositoryImpl, MovieService},
    provider::{MovieProviderRepository, TmdbAdapter, TmdbMapper},
};
use shared::config::AppSettings;
use shared::errors::{AppError, AppResult};
use shared::utils::init_logger;
use shared::Database;
use std::sync::Arc;

/// Fully wired services sharing one database pool and one TMDB client
pub struct AppContext {
    pub settings: Arc<AppSettings>,
    pub database: Arc<Database>,
    pub movie_service: Arc<MovieService>,
    pub actor_service: Arc<ActorService>,
    pub collection_service: Arc<CollectionService>,
}

impl AppContext {
    /// Load settings from the environment and initialize everything
    pub fn from_env() -> AppResult<Self> {
        Self::initialize(AppSettings::from_env()?)
    }

    pub fn initialize(settings: AppSettings) -> AppResult<Self> {
        init_logger();

        let database_url = settings.database_url.clone().ok_or_else(|| {
            AppError::ConfigError("DATABASE_URL environment variable not found".to_string())
        })?;

        let database = Arc::new(Database::new(&database_url)?);
        database.run_migrations()?;

        let settings = Arc::new(settings);

        let encoder: Arc<dyn ImageEncoder> =
            Arc::new(HttpImageEncoder::new(settings.tmdb.timeout()));
        let provider: Arc<dyn MovieProviderRepository> =
            Arc::new(TmdbAdapter::new(&settings.tmdb));
        let mapper = TmdbMapper::new(Arc::clone(&settings), Arc::clone(&encoder));

        // Initialize repositories with proper database
        let movie_repo: Arc<dyn MovieRepository> =
            Arc::new(MovieRepositoryImpl::new(Arc::clone(&database)));
        let collection_repo: Arc<dyn CollectionRepository> =
            Arc::new(CollectionRepositoryImpl::new(Arc::clone(&database)));

        let collection_service = Arc::new(CollectionService::new(
            Arc::clone(&collection_repo),
            Arc::clone(&movie_repo),
        ));

        let movie_service = Arc::new(MovieService::new(
            Arc::clone(&movie_repo),
            Arc::clone(&provider),
            mapper.clone(),
            Arc::clone(&encoder),
            Arc::clone(&collection_service),
            settings.catalog.default_collection.clone(),
        ));

        let actor_service = Arc::new(ActorService::new(Arc::clone(&provider), mapper));

        log::info!("Catalog services initialized");

        Ok(Self {
            settings,
            database,
            movie_service,
            actor_service,
            collection_service,
        })
    }
}
