use async_trait::async_trait;

use crate::{
    modules::movie::domain::entities::ActorDetail,
    modules::provider::infrastructure::adapters::tmdb::models::{MovieDetail, MovieSummary},
    shared::errors::AppResult,
};

/// Remote movie metadata source.
///
/// Lookups return `Ok(None)` when the provider has no record for the id;
/// every other failure is an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieProviderRepository: Send + Sync {
    /// Full movie payload including videos, credits and release dates
    async fn movie_detail(&self, tmdb_id: i32) -> AppResult<Option<MovieDetail>>;

    async fn actor_detail(&self, person_id: i32) -> AppResult<Option<ActorDetail>>;

    async fn search_movies(&self, query: &str, limit: usize) -> AppResult<Vec<MovieSummary>>;
}
