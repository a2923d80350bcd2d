use crate::{
    modules::movie::domain::entities::ActorDetail,
    modules::provider::domain::MovieProviderRepository,
    modules::provider::infrastructure::http_client::RateLimitClient,
    shared::config::TmdbSettings,
    shared::errors::{AppError, AppResult},
    shared::utils::{LogContext, TimedOperation},
};
use async_trait::async_trait;

use super::models::*;

/// Blocks appended to a movie lookup so one request carries everything the mapper needs
pub const MOVIE_APPENDS: &str = "videos,credits,release_dates";

/// TMDB (The Movie Database) REST adapter
pub struct TmdbAdapter {
    http_client: RateLimitClient,
    base_url: String,
    api_key: String,
}

impl TmdbAdapter {
    pub fn new(settings: &TmdbSettings) -> Self {
        Self::with_client(RateLimitClient::for_tmdb(settings.timeout()), settings)
    }

    /// Create adapter with custom HTTP client (for testing)
    pub fn with_client(http_client: RateLimitClient, settings: &TmdbSettings) -> Self {
        Self {
            http_client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings.api_key.clone(),
        }
    }

    /// Check if a request can be made immediately (for testing and monitoring)
    pub fn can_make_request_now(&self) -> bool {
        self.http_client.can_make_request_now()
    }

    /// Build URL with API key and additional query parameters
    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}{}?api_key={}",
            self.base_url,
            endpoint,
            urlencoding::encode(&self.api_key)
        );
        for (key, value) in params {
            url.push_str(&format!("&{}={}", key, urlencoding::encode(value)));
        }
        url
    }

    // 404 means the id is unknown to TMDB
    async fn get_optional<T>(&self, endpoint: &str, url: &str) -> AppResult<Option<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let timer = TimedOperation::new(&format!("TMDB {}", endpoint));

        match self.http_client.get::<T>(url).await {
            Ok(body) => {
                LogContext::api_call("TMDB", endpoint, "ok", timer.elapsed_ms());
                Ok(Some(body))
            }
            Err(AppError::NotFound(_)) => {
                LogContext::api_call("TMDB", endpoint, "not found", timer.elapsed_ms());
                Ok(None)
            }
            Err(e) => {
                LogContext::api_call("TMDB", endpoint, "failed", timer.elapsed_ms());
                Err(e)
            }
        }
    }
}

#[async_trait]
impl MovieProviderRepository for TmdbAdapter {
    async fn movie_detail(&self, tmdb_id: i32) -> AppResult<Option<MovieDetail>> {
        let endpoint = format!("/movie/{}", tmdb_id);
        let url = self.build_url(&endpoint, &[("append_to_response", MOVIE_APPENDS)]);

        log::info!("TMDB: Getting movie for ID '{}'", tmdb_id);
        self.get_optional(&endpoint, &url).await
    }

    async fn actor_detail(&self, person_id: i32) -> AppResult<Option<ActorDetail>> {
        let endpoint = format!("/person/{}", person_id);
        let url = self.build_url(&endpoint, &[]);

        log::info!("TMDB: Getting person for ID '{}'", person_id);
        self.get_optional(&endpoint, &url).await
    }

    async fn search_movies(&self, query: &str, limit: usize) -> AppResult<Vec<MovieSummary>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::ValidationError(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = self.build_url(
            "/search/movie",
            &[
                ("query", query),
                ("page", "1"),
                ("include_adult", "false"),
                ("language", "en-US"),
            ],
        );

        let response: TmdbSearchResponse = self.http_client.get(&url).await?;
        let results: Vec<MovieSummary> = response.results.into_iter().take(limit).collect();

        LogContext::search_operation(query, results.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> TmdbAdapter {
        let mut settings = TmdbSettings::new("k3y");
        settings.base_url = "https://api.example.test/3/".to_string();
        TmdbAdapter::new(&settings)
    }

    #[test]
    fn test_build_url_encodes_params() {
        let url = adapter().build_url("/search/movie", &[("query", "Alien & Aliens")]);
        assert_eq!(
            url,
            "https://api.example.test/3/search/movie?api_key=k3y&query=Alien%20%26%20Aliens"
        );
    }

    #[test]
    fn test_movie_url_appends_blocks() {
        let url = adapter().build_url("/movie/603", &[("append_to_response", MOVIE_APPENDS)]);
        assert!(url.ends_with("append_to_response=videos%2Ccredits%2Crelease_dates"));
    }

    #[test]
    fn test_empty_search_is_rejected() {
        let result = tokio_test::block_on(adapter().search_movies("   ", 5));
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
