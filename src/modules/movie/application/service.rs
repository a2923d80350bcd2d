use crate::modules::collection::{Collection, CollectionService};
use crate::modules::media::domain::ImageEncoder;
use crate::modules::movie::domain::{
    entities::Movie,
    repositories::MovieRepository,
    value_objects::{EncodedImage, ImageUpload, MovieRating},
};
use crate::modules::provider::domain::MovieProviderRepository;
use crate::modules::provider::infrastructure::adapters::tmdb::{MovieSummary, TmdbMapper};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation, Validator};
use crate::{log_debug, log_info, log_warn};
use chrono::NaiveDate;
use std::sync::Arc;

/// Result of asking for a TMDB movie to be imported
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    /// The catalog already holds this TMDB id under the given local id
    AlreadyImported(i32),
    Imported(Movie),
}

/// A movie entered by hand rather than imported
#[derive(Debug, Clone)]
pub struct NewMovieInput {
    pub tmdb_id: i32,
    pub title: String,
    pub tagline: String,
    pub overview: String,
    pub runtime: i32,
    pub release_date: NaiveDate,
    pub rating: MovieRating,
    pub vote_average: f32,
    pub trailer_url: Option<String>,
    pub poster: Option<ImageUpload>,
    pub backdrop: Option<ImageUpload>,
}

/// Replacement values for an existing movie. Images are only replaced when
/// a new upload is supplied.
#[derive(Debug, Clone)]
pub struct MovieEdit {
    pub title: String,
    pub tagline: String,
    pub overview: String,
    pub runtime: i32,
    pub release_date: NaiveDate,
    pub rating: MovieRating,
    pub vote_average: f32,
    pub trailer_url: Option<String>,
    pub poster: Option<ImageUpload>,
    pub backdrop: Option<ImageUpload>,
}

pub struct MovieService {
    movie_repo: Arc<dyn MovieRepository>,
    provider: Arc<dyn MovieProviderRepository>,
    mapper: TmdbMapper,
    encoder: Arc<dyn ImageEncoder>,
    collections: Arc<CollectionService>,
    default_collection: String,
}

impl MovieService {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        provider: Arc<dyn MovieProviderRepository>,
        mapper: TmdbMapper,
        encoder: Arc<dyn ImageEncoder>,
        collections: Arc<CollectionService>,
        default_collection: impl Into<String>,
    ) -> Self {
        Self {
            movie_repo,
            provider,
            mapper,
            encoder,
            collections,
            default_collection: default_collection.into(),
        }
    }

    /// Import a TMDB movie into the catalog and file it under the default
    /// collection. Importing the same TMDB id twice is a no-op, apart from
    /// restoring a missing default-collection link.
    pub async fn import_movie(&self, tmdb_id: i32) -> AppResult<ImportOutcome> {
        Validator::validate_tmdb_id(tmdb_id)?;

        if let Some(existing) = self.movie_repo.find_by_tmdb_id(tmdb_id).await? {
            let local_id = persisted_id(&existing)?;
            let (collection_id, collection) = self.resolve_default_collection().await?;
            if !collection.contains_movie(local_id) {
                log_warn!(
                    "Movie {} was stored without its default collection link, relinking",
                    local_id
                );
                self.collections
                    .add_movie_to_collection(collection_id, local_id)
                    .await?;
            }
            LogContext::import_progress(tmdb_id, &existing.title, "already imported");
            return Ok(ImportOutcome::AlreadyImported(local_id));
        }

        let timer = TimedOperation::new(&format!("Import TMDB movie {}", tmdb_id));

        let movie = self.fetch_and_map(tmdb_id).await?;
        // Resolve the link target before saving so a failure leaves nothing behind
        let (collection_id, _) = self.resolve_default_collection().await?;
        let saved = self.movie_repo.save(&movie).await?;
        self.collections
            .add_movie_to_collection(collection_id, persisted_id(&saved)?)
            .await?;

        LogContext::import_progress(tmdb_id, &saved.title, "imported");
        timer.finish_with_info(&format!("{} cast, {} crew", saved.cast.len(), saved.crew.len()));

        Ok(ImportOutcome::Imported(saved))
    }

    /// Every movie in the catalog, without cast and crew
    pub async fn library(&self) -> AppResult<Vec<Movie>> {
        self.movie_repo.get_all().await
    }

    /// A catalog movie with its cast and crew
    pub async fn local_details(&self, id: i32) -> AppResult<Movie> {
        self.movie_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", id)))
    }

    /// A TMDB movie mapped for display, without storing it
    pub async fn remote_details(&self, tmdb_id: i32) -> AppResult<Movie> {
        Validator::validate_tmdb_id(tmdb_id)?;
        self.fetch_and_map(tmdb_id).await
    }

    pub async fn search_remote(&self, query: &str, limit: usize) -> AppResult<Vec<MovieSummary>> {
        self.provider.search_movies(query, limit).await
    }

    /// Add a hand-entered movie to the catalog and to `collection_id`
    pub async fn create_movie(&self, input: NewMovieInput, collection_id: i32) -> AppResult<Movie> {
        Validator::validate_tmdb_id(input.tmdb_id)?;
        validate_fields(&input.title, input.runtime, input.vote_average)?;

        if self.movie_repo.find_by_tmdb_id(input.tmdb_id).await?.is_some() {
            return Err(AppError::ValidationError(format!(
                "A movie with TMDB ID {} already exists",
                input.tmdb_id
            )));
        }

        // Fail before writing anything if the target collection is gone
        self.collections
            .get_collection(collection_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Collection with ID {} not found", collection_id))
            })?;

        let (poster, backdrop) = futures::try_join!(
            self.encode_upload(input.poster.as_ref()),
            self.encode_upload(input.backdrop.as_ref()),
        )?;

        let mut movie = Movie::new(input.tmdb_id, input.title, input.release_date);
        movie.tagline = input.tagline;
        movie.overview = input.overview;
        movie.runtime = input.runtime;
        movie.rating = input.rating;
        movie.vote_average = input.vote_average;
        movie.trailer_url = input.trailer_url;
        movie.poster = poster;
        movie.backdrop = backdrop;

        let saved = self.movie_repo.save(&movie).await?;
        self.collections
            .add_movie_to_collection(collection_id, persisted_id(&saved)?)
            .await?;

        log_info!("Created movie '{}' ({:?})", saved.title, saved.id);
        Ok(saved)
    }

    pub async fn update_movie(&self, id: i32, edit: MovieEdit) -> AppResult<Movie> {
        validate_fields(&edit.title, edit.runtime, edit.vote_average)?;

        let mut movie = self.local_details(id).await?;

        movie.title = edit.title;
        movie.tagline = edit.tagline;
        movie.overview = edit.overview;
        movie.runtime = edit.runtime;
        movie.release_date = edit.release_date;
        movie.rating = edit.rating;
        movie.vote_average = edit.vote_average;
        movie.trailer_url = edit.trailer_url;

        if let Some(upload) = edit.poster.as_ref() {
            movie.poster = self.encoder.encode(upload).await?;
        }
        if let Some(upload) = edit.backdrop.as_ref() {
            movie.backdrop = self.encoder.encode(upload).await?;
        }

        log_debug!("Updating movie {}", id);
        self.movie_repo.update(&movie).await
    }

    pub async fn delete_movie(&self, id: i32) -> AppResult<()> {
        self.movie_repo.delete(id).await?;
        log_info!("Deleted movie {}", id);
        Ok(())
    }

    async fn resolve_default_collection(&self) -> AppResult<(i32, Collection)> {
        let collection = self
            .collections
            .ensure_collection(&self.default_collection)
            .await?;
        let id = collection.id.ok_or_else(|| {
            AppError::InternalError("Default collection has no local id".to_string())
        })?;
        Ok((id, collection))
    }

    async fn fetch_and_map(&self, tmdb_id: i32) -> AppResult<Movie> {
        let detail = self
            .provider
            .movie_detail(tmdb_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("TMDB movie {} not found", tmdb_id)))?;

        Ok(self.mapper.map_movie_detail(&detail).await?)
    }

    async fn encode_upload(&self, upload: Option<&ImageUpload>) -> AppResult<EncodedImage> {
        match upload {
            Some(upload) => Ok(self.encoder.encode(upload).await?),
            None => Ok(EncodedImage::empty()),
        }
    }
}

fn persisted_id(movie: &Movie) -> AppResult<i32> {
    movie.id.ok_or_else(|| {
        AppError::InternalError(format!("Movie '{}' has no local id after save", movie.title))
    })
}

fn validate_fields(title: &str, runtime: i32, vote_average: f32) -> AppResult<()> {
    Validator::validate_movie_title(title)?;
    Validator::validate_runtime(runtime)?;
    Validator::validate_vote_average(vote_average)
}
