use super::super::domain::{entities::Collection, repositories::CollectionRepository};
use crate::modules::movie::domain::{entities::Movie, repositories::MovieRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info, log_warn};
use std::sync::Arc;

pub struct CollectionService {
    collection_repo: Arc<dyn CollectionRepository>,
    movie_repo: Arc<dyn MovieRepository>,
}

impl CollectionService {
    pub fn new(
        collection_repo: Arc<dyn CollectionRepository>,
        movie_repo: Arc<dyn MovieRepository>,
    ) -> Self {
        Self {
            collection_repo,
            movie_repo,
        }
    }

    pub async fn create_collection(
        &self,
        name: String,
        description: Option<String>,
    ) -> AppResult<Collection> {
        let name = name.trim().to_string();
        Validator::validate_collection_name(&name)?;

        // Check if collection with same name exists
        if self.collection_repo.find_by_name(&name).await?.is_some() {
            return Err(AppError::ValidationError(format!(
                "Collection with name '{}' already exists",
                name
            )));
        }

        let mut collection = Collection::new(name);
        if let Some(desc) = description {
            collection = collection.with_description(desc);
        }

        let saved = self.collection_repo.save(&collection).await?;
        log_info!("Created collection '{}' ({:?})", saved.name, saved.id);

        Ok(saved)
    }

    pub async fn get_collection(&self, id: i32) -> AppResult<Option<Collection>> {
        self.collection_repo.find_by_id(id).await
    }

    pub async fn get_all_collections(&self) -> AppResult<Vec<Collection>> {
        self.collection_repo.get_all().await
    }

    pub async fn update_collection(
        &self,
        id: i32,
        name: Option<String>,
        description: Option<String>,
    ) -> AppResult<Collection> {
        let mut collection = self.require_collection(id).await?;

        if let Some(new_name) = name {
            let new_name = new_name.trim().to_string();
            Validator::validate_collection_name(&new_name)?;

            // Check if another collection has this name
            if let Some(existing) = self.collection_repo.find_by_name(&new_name).await? {
                if existing.id != collection.id {
                    return Err(AppError::ValidationError(format!(
                        "Collection with name '{}' already exists",
                        new_name
                    )));
                }
            }

            collection.rename(new_name);
        }

        if description.is_some() {
            collection.update_description(description);
        }

        self.collection_repo.update(&collection).await
    }

    pub async fn delete_collection(&self, id: i32) -> AppResult<()> {
        self.require_collection(id).await?;
        self.collection_repo.delete(id).await
    }

    pub async fn add_movie_to_collection(&self, collection_id: i32, movie_id: i32) -> AppResult<()> {
        log_debug!("Adding movie {} to collection {}", movie_id, collection_id);

        let mut collection = self.require_collection(collection_id).await?;

        self.movie_repo
            .find_by_id(movie_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", movie_id)))?;

        if collection.contains_movie(movie_id) {
            return Err(AppError::ValidationError(
                "Movie already exists in this collection".to_string(),
            ));
        }

        self.collection_repo
            .add_movie_to_collection(collection_id, movie_id)
            .await?;

        // The link is already stored; a failed timestamp bump is not worth failing for
        collection.add_movie(movie_id);
        if let Err(e) = self.collection_repo.update(&collection).await {
            log_warn!(
                "Linked movie {} but could not update collection {}: {}",
                movie_id,
                collection_id,
                e
            );
        }

        log_info!(
            "Successfully added movie {} to collection {}",
            movie_id,
            collection_id
        );
        Ok(())
    }

    pub async fn remove_movie_from_collection(
        &self,
        collection_id: i32,
        movie_id: i32,
    ) -> AppResult<()> {
        let mut collection = self.require_collection(collection_id).await?;

        if !collection.contains_movie(movie_id) {
            return Err(AppError::ValidationError(
                "Movie not found in this collection".to_string(),
            ));
        }

        self.collection_repo
            .remove_movie_from_collection(collection_id, movie_id)
            .await?;

        collection.remove_movie(movie_id);
        if let Err(e) = self.collection_repo.update(&collection).await {
            log_warn!(
                "Unlinked movie {} but could not update collection {}: {}",
                movie_id,
                collection_id,
                e
            );
        }

        Ok(())
    }

    pub async fn get_collection_movies(&self, collection_id: i32) -> AppResult<Vec<Movie>> {
        self.require_collection(collection_id).await?;
        self.collection_repo.get_collection_movies(collection_id).await
    }

    /// Find a collection by name (case-insensitive), creating it when missing
    pub async fn ensure_collection(&self, name: &str) -> AppResult<Collection> {
        if let Some(existing) = self.collection_repo.find_by_name(name).await? {
            return Ok(existing);
        }

        match self.create_collection(name.to_string(), None).await {
            Ok(created) => Ok(created),
            // Another caller may have created it in the meantime
            Err(e @ AppError::ValidationError(_)) => self
                .collection_repo
                .find_by_name(name)
                .await?
                .ok_or(e),
            Err(e) => Err(e),
        }
    }

    async fn require_collection(&self, id: i32) -> AppResult<Collection> {
        self.collection_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Collection with ID {} not found", id)))
    }
}
