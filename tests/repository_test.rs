//! Repository tests against a real PostgreSQL database.
//!
//! Run with `TEST_DATABASE_URL=... cargo test --test repository_test -- --ignored`.

mod utils;

use cinevault::modules::collection::{
    Collection, CollectionRepository, CollectionRepositoryImpl,
};
use cinevault::modules::movie::domain::value_objects::EncodedImage;
use cinevault::modules::movie::{MovieRepository, MovieRepositoryImpl};
use cinevault::modules::provider::TmdbMapper;
use cinevault::shared::errors::AppError;
use std::sync::Arc;
use utils::db::{get_test_database, unique_tmdb_id};
use utils::factories::{matrix, settings};
use utils::fakes::RecordingEncoder;

async fn mapped_matrix(tmdb_id: i32) -> cinevault::modules::movie::Movie {
    let mapper = TmdbMapper::new(Arc::new(settings()), Arc::new(RecordingEncoder::new()));
    let mut detail = matrix();
    detail.id = tmdb_id;
    mapper.map_movie_detail(&detail).await.unwrap()
}

#[tokio::test]
#[ignore]
async fn test_movie_round_trip_keeps_credit_order() {
    let repo = MovieRepositoryImpl::new(get_test_database());
    let movie = mapped_matrix(unique_tmdb_id()).await;

    let saved = repo.save(&movie).await.unwrap();
    let loaded = repo
        .find_by_tmdb_id(movie.tmdb_id)
        .await
        .unwrap()
        .expect("saved movie is found");

    assert_eq!(loaded.id, saved.id);
    assert_eq!(loaded.cast, movie.cast);
    assert_eq!(loaded.crew, movie.crew);
    assert_eq!(loaded.poster, movie.poster);
    assert_eq!(loaded.rating, movie.rating);

    repo.delete(saved.id.unwrap()).await.unwrap();
    assert!(repo.find_by_id(saved.id.unwrap()).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn test_movie_update_replaces_images() {
    let repo = MovieRepositoryImpl::new(get_test_database());
    let mut saved = repo.save(&mapped_matrix(unique_tmdb_id()).await).await.unwrap();

    saved.title = "The Matrix (Remastered)".to_string();
    saved.poster = EncodedImage::new(vec![9, 9, 9], "image/png");
    let updated = repo.update(&saved).await.unwrap();

    assert_eq!(updated.title, "The Matrix (Remastered)");
    assert_eq!(updated.poster.content_type, "image/png");
    assert_eq!(updated.cast.len(), saved.cast.len());

    repo.delete(saved.id.unwrap()).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_movie_is_not_found() {
    let repo = MovieRepositoryImpl::new(get_test_database());
    assert!(matches!(repo.delete(i32::MAX).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
#[ignore]
async fn test_collection_membership() {
    let db = get_test_database();
    let movies = MovieRepositoryImpl::new(db.clone());
    let collections = CollectionRepositoryImpl::new(db);

    let name = format!("Repo Test {}", unique_tmdb_id());
    let collection = collections.save(&Collection::new(name.clone())).await.unwrap();
    let collection_id = collection.id.unwrap();

    let found = collections
        .find_by_name(&name.to_uppercase())
        .await
        .unwrap()
        .expect("lookup ignores case");
    assert_eq!(found.id, Some(collection_id));

    let duplicate = collections.save(&Collection::new(name.to_lowercase())).await;
    assert!(matches!(duplicate, Err(AppError::ValidationError(_))));

    let movie = movies.save(&mapped_matrix(unique_tmdb_id()).await).await.unwrap();
    let movie_id = movie.id.unwrap();

    collections.add_movie_to_collection(collection_id, movie_id).await.unwrap();
    // linking twice is absorbed by the composite key
    collections.add_movie_to_collection(collection_id, movie_id).await.unwrap();

    let reloaded = collections.find_by_id(collection_id).await.unwrap().unwrap();
    assert_eq!(reloaded.movie_ids, vec![movie_id]);

    let listed = collections.get_collection_movies(collection_id).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].tmdb_id, movie.tmdb_id);

    // deleting the movie cascades to the link
    movies.delete(movie_id).await.unwrap();
    let reloaded = collections.find_by_id(collection_id).await.unwrap().unwrap();
    assert!(reloaded.movie_ids.is_empty());

    collections.delete(collection_id).await.unwrap();
}
