mod utils;

use cinevault::modules::provider::infrastructure::{RateLimitClient, RetryPolicy, TmdbAdapter};
use cinevault::modules::provider::MovieProviderRepository;
use cinevault::shared::errors::AppError;
use std::time::Duration;
use utils::factories::{settings_with_api, KEANU_JSON, MATRIX_JSON, SEARCH_JSON};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter_for(server: &MockServer) -> TmdbAdapter {
    let settings = settings_with_api(&server.uri());
    let client = RateLimitClient::new(
        "TMDB",
        RetryPolicy::immediate(1),
        RateLimitClient::create_rate_limiter(100.0, 100),
        Duration::from_secs(5),
    );
    TmdbAdapter::with_client(client, &settings.tmdb)
}

#[tokio::test]
async fn test_movie_detail_requests_appended_blocks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/603"))
        .and(query_param("api_key", "test-key"))
        .and(query_param("append_to_response", "videos,credits,release_dates"))
        .respond_with(ResponseTemplate::new(200).set_body_string(MATRIX_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let detail = adapter_for(&server)
        .movie_detail(603)
        .await
        .unwrap()
        .expect("movie exists");

    assert_eq!(detail.id, 603);
    assert_eq!(detail.title, "The Matrix");
    assert_eq!(detail.videos.results.len(), 2);
    assert_eq!(detail.credits.cast.len(), 4);
    assert_eq!(detail.credits.crew.len(), 3);
    assert!(detail
        .release_dates
        .results
        .iter()
        .any(|c| c.iso_3166_1 == "US"));
}

#[tokio::test]
async fn test_unknown_movie_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/999999"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"{"status_code":34,"status_message":"not found"}"#),
        )
        .mount(&server)
        .await;

    let detail = adapter_for(&server).movie_detail(999999).await.unwrap();
    assert!(detail.is_none());
}

#[tokio::test]
async fn test_rejected_api_key_is_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/603"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let result = adapter_for(&server).movie_detail(603).await;
    assert!(matches!(result, Err(AppError::Unauthorized(_))));
}

#[tokio::test]
async fn test_server_error_is_retried_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/person/6384"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/3/person/6384"))
        .respond_with(ResponseTemplate::new(200).set_body_string(KEANU_JSON))
        .mount(&server)
        .await;

    let actor = adapter_for(&server)
        .actor_detail(6384)
        .await
        .unwrap()
        .expect("person exists");

    assert_eq!(actor.name, "Keanu Reeves");
    assert_eq!(actor.birthday, "1964-09-02");
}

#[tokio::test]
async fn test_search_sends_query_and_truncates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/search/movie"))
        .and(query_param("query", "the matrix"))
        .and(query_param("include_adult", "false"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_JSON))
        .mount(&server)
        .await;

    let results = adapter_for(&server)
        .search_movies("  the matrix ", 2)
        .await
        .unwrap();

    let ids: Vec<i32> = results.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![603, 604]);
}

#[tokio::test]
async fn test_blank_search_never_hits_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let result = adapter_for(&server).search_movies("   ", 5).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn test_malformed_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/3/movie/603"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&server)
        .await;

    let result = adapter_for(&server).movie_detail(603).await;
    assert!(matches!(result, Err(AppError::SerializationError(_))));
}
