/// In-memory stand-ins for the database and TMDB seams.
///
/// `mockall` mocks are only generated under `cfg(test)` inside the library,
/// so integration tests use these instead.
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use cinevault::modules::collection::{Collection, CollectionRepository};
use cinevault::modules::media::ImageEncoder;
use cinevault::modules::movie::domain::value_objects::{EncodedImage, ImageUpload};
use cinevault::modules::movie::{ActorDetail, Movie, MovieRepository};
use cinevault::modules::provider::{MovieDetail, MovieProviderRepository, MovieSummary};
use cinevault::shared::errors::{AppError, AppResult, EncodingError};
use std::sync::Arc;

#[derive(Default)]
pub struct InMemoryMovieRepository {
    movies: Mutex<Vec<Movie>>,
    next_id: AtomicUsize,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.movies.lock().unwrap().len()
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Movie>> {
        let movies = self.movies.lock().unwrap();
        Ok(movies.iter().find(|m| m.id == Some(id)).cloned())
    }

    async fn find_by_tmdb_id(&self, tmdb_id: i32) -> AppResult<Option<Movie>> {
        let movies = self.movies.lock().unwrap();
        Ok(movies.iter().find(|m| m.tmdb_id == tmdb_id).cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<Movie>> {
        let mut all: Vec<Movie> = self
            .movies
            .lock()
            .unwrap()
            .iter()
            .map(|m| Movie {
                cast: Vec::new(),
                crew: Vec::new(),
                ..m.clone()
            })
            .collect();
        all.sort_by(|a, b| a.title.cmp(&b.title));
        Ok(all)
    }

    async fn save(&self, movie: &Movie) -> AppResult<Movie> {
        let mut movies = self.movies.lock().unwrap();
        if movies.iter().any(|m| m.tmdb_id == movie.tmdb_id) {
            return Err(AppError::ValidationError(format!(
                "Movie with TMDB ID {} already exists",
                movie.tmdb_id
            )));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1;
        let mut saved = movie.clone();
        saved.id = Some(id);
        movies.push(saved.clone());
        Ok(saved)
    }

    async fn update(&self, movie: &Movie) -> AppResult<Movie> {
        let mut movies = self.movies.lock().unwrap();
        let slot = movies
            .iter_mut()
            .find(|m| m.id.is_some() && m.id == movie.id)
            .ok_or_else(|| AppError::NotFound(format!("Movie {:?} not found", movie.id)))?;
        let credits = (slot.cast.clone(), slot.crew.clone());
        *slot = movie.clone();
        slot.cast = credits.0;
        slot.crew = credits.1;
        Ok(slot.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut movies = self.movies.lock().unwrap();
        let before = movies.len();
        movies.retain(|m| m.id != Some(id));
        if movies.len() == before {
            return Err(AppError::NotFound(format!("Movie with ID {} not found", id)));
        }
        Ok(())
    }
}

pub struct InMemoryCollectionRepository {
    collections: Mutex<Vec<Collection>>,
    next_id: AtomicUsize,
    movies: Arc<InMemoryMovieRepository>,
}

impl InMemoryCollectionRepository {
    pub fn new(movies: Arc<InMemoryMovieRepository>) -> Self {
        Self {
            collections: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(0),
            movies,
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.collections
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.name.clone())
            .collect()
    }
}

#[async_trait]
impl CollectionRepository for InMemoryCollectionRepository {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Collection>> {
        let collections = self.collections.lock().unwrap();
        Ok(collections.iter().find(|c| c.id == Some(id)).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Collection>> {
        let collections = self.collections.lock().unwrap();
        Ok(collections.iter().find(|c| c.has_name(name)).cloned())
    }

    async fn get_all(&self) -> AppResult<Vec<Collection>> {
        let mut all = self.collections.lock().unwrap().clone();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn save(&self, collection: &Collection) -> AppResult<Collection> {
        let mut collections = self.collections.lock().unwrap();
        if collections.iter().any(|c| c.has_name(&collection.name)) {
            return Err(AppError::ValidationError(format!(
                "Collection with name '{}' already exists",
                collection.name
            )));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i32 + 1;
        let mut saved = collection.clone();
        saved.id = Some(id);
        saved.movie_ids = Vec::new();
        collections.push(saved.clone());
        Ok(saved)
    }

    async fn update(&self, collection: &Collection) -> AppResult<Collection> {
        let mut collections = self.collections.lock().unwrap();
        let slot = collections
            .iter_mut()
            .find(|c| c.id.is_some() && c.id == collection.id)
            .ok_or_else(|| AppError::NotFound("Collection not found".to_string()))?;
        slot.name = collection.name.clone();
        slot.description = collection.description.clone();
        slot.updated_at = Utc::now();
        Ok(slot.clone())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut collections = self.collections.lock().unwrap();
        let before = collections.len();
        collections.retain(|c| c.id != Some(id));
        if collections.len() == before {
            return Err(AppError::NotFound(format!("Collection with ID {} not found", id)));
        }
        Ok(())
    }

    async fn add_movie_to_collection(&self, collection_id: i32, movie_id: i32) -> AppResult<()> {
        let mut collections = self.collections.lock().unwrap();
        let collection = collections
            .iter_mut()
            .find(|c| c.id == Some(collection_id))
            .ok_or_else(|| AppError::NotFound("Collection not found".to_string()))?;
        if !collection.movie_ids.contains(&movie_id) {
            collection.movie_ids.push(movie_id);
        }
        Ok(())
    }

    async fn remove_movie_from_collection(
        &self,
        collection_id: i32,
        movie_id: i32,
    ) -> AppResult<()> {
        let mut collections = self.collections.lock().unwrap();
        let collection = collections
            .iter_mut()
            .find(|c| c.id == Some(collection_id))
            .ok_or_else(|| AppError::NotFound("Collection not found".to_string()))?;
        if !collection.remove_movie(movie_id) {
            return Err(AppError::NotFound("Movie not found in collection".to_string()));
        }
        Ok(())
    }

    async fn get_collection_movies(&self, collection_id: i32) -> AppResult<Vec<Movie>> {
        let ids = self
            .collections
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == Some(collection_id))
            .map(|c| c.movie_ids.clone())
            .unwrap_or_default();

        let mut out = Vec::new();
        for id in ids.into_iter().rev() {
            if let Some(movie) = self.movies.find_by_id(id).await? {
                out.push(movie);
            }
        }
        Ok(out)
    }
}

/// Canned TMDB responses keyed by id, counting every call
#[derive(Default)]
pub struct FakeProvider {
    movies: HashMap<i32, MovieDetail>,
    actors: HashMap<i32, ActorDetail>,
    search_results: Vec<MovieSummary>,
    calls: AtomicUsize,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_movie(mut self, detail: MovieDetail) -> Self {
        self.movies.insert(detail.id, detail);
        self
    }

    pub fn with_actor(mut self, actor: ActorDetail) -> Self {
        self.actors.insert(actor.id, actor);
        self
    }

    pub fn with_search_results(mut self, results: Vec<MovieSummary>) -> Self {
        self.search_results = results;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MovieProviderRepository for FakeProvider {
    async fn movie_detail(&self, tmdb_id: i32) -> AppResult<Option<MovieDetail>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.movies.get(&tmdb_id).cloned())
    }

    async fn actor_detail(&self, person_id: i32) -> AppResult<Option<ActorDetail>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.actors.get(&person_id).cloned())
    }

    async fn search_movies(&self, query: &str, limit: usize) -> AppResult<Vec<MovieSummary>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if query.trim().is_empty() {
            return Err(AppError::ValidationError("Search query cannot be empty".to_string()));
        }
        Ok(self.search_results.iter().take(limit).cloned().collect())
    }
}

/// Returns the URL's bytes instead of downloading, and remembers every URL
#[derive(Default)]
pub struct RecordingEncoder {
    urls: Mutex<Vec<String>>,
}

impl RecordingEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageEncoder for RecordingEncoder {
    async fn encode(&self, upload: &ImageUpload) -> Result<EncodedImage, EncodingError> {
        Ok(EncodedImage::new(
            upload.data.clone(),
            upload.content_type.clone(),
        ))
    }

    async fn encode_from_url(&self, url: &str) -> Result<Vec<u8>, EncodingError> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(url.as_bytes().to_vec())
    }
}
