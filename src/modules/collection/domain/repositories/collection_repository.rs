use crate::modules::collection::domain::entities::Collection;
use crate::modules::movie::domain::entities::Movie;
use crate::shared::errors::AppResult;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Collection>>;
    /// Case-insensitive lookup
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Collection>>;
    async fn get_all(&self) -> AppResult<Vec<Collection>>;
    async fn save(&self, collection: &Collection) -> AppResult<Collection>;
    async fn update(&self, collection: &Collection) -> AppResult<Collection>;
    async fn delete(&self, id: i32) -> AppResult<()>;

    // Collection-movie relationship methods
    async fn add_movie_to_collection(&self, collection_id: i32, movie_id: i32) -> AppResult<()>;

    async fn remove_movie_from_collection(&self, collection_id: i32, movie_id: i32)
        -> AppResult<()>;

    /// Movies in a collection, most recently added first, without credits
    async fn get_collection_movies(&self, collection_id: i32) -> AppResult<Vec<Movie>>;
}
