use crate::modules::movie::domain::entities::Movie;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Movie>>;
    async fn find_by_tmdb_id(&self, tmdb_id: i32) -> AppResult<Option<Movie>>;
    /// All movies without their cast and crew, ordered by title
    async fn get_all(&self) -> AppResult<Vec<Movie>>;
    /// Insert a new movie with its cast and crew; returns it with its local id
    async fn save(&self, movie: &Movie) -> AppResult<Movie>;
    /// Replace the stored scalar fields and images of an existing movie
    async fn update(&self, movie: &Movie) -> AppResult<Movie>;
    async fn delete(&self, id: i32) -> AppResult<()>;
}
