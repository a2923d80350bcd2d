use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tokio::task;

use crate::modules::collection::domain::{entities::Collection, repositories::CollectionRepository};
use crate::modules::collection::infrastructure::models::{
    CollectionChangeset, CollectionModel, CollectionMovieModel, NewCollection, NewCollectionMovie,
};
use crate::modules::movie::domain::entities::Movie;
use crate::modules::movie::infrastructure::models::MovieModel;
use crate::schema::{collection_movies, collections, movies};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

pub struct CollectionRepositoryImpl {
    db: Arc<Database>,
}

impl CollectionRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CollectionRepository for CollectionRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Collection>> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<Option<CollectionModel>> {
            let mut conn = db.get_connection()?;
            let m = collections::table
                .filter(collections::id.eq(id))
                .select(CollectionModel::as_select())
                .first::<CollectionModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        match model {
            Some(m) => {
                let out = self.load_collections_with_movie_ids(vec![m]).await?;
                Ok(out.into_iter().next())
            }
            None => Ok(None),
        }
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Collection>> {
        use diesel::dsl::sql;
        use diesel::sql_types::{Bool, Text};

        let db = Arc::clone(&self.db);
        let needle = name.trim().to_string();

        let model = task::spawn_blocking(move || -> AppResult<Option<CollectionModel>> {
            let mut conn = db.get_connection()?;

            // Case-insensitive equality with bindings (no interpolation).
            let pred = sql::<Bool>("LOWER(name) = LOWER(")
                .bind::<Text, _>(needle)
                .sql(")");

            let m = collections::table
                .filter(pred)
                .select(CollectionModel::as_select())
                .first::<CollectionModel>(&mut conn)
                .optional()?;
            Ok(m)
        })
        .await??;

        match model {
            Some(m) => {
                let out = self.load_collections_with_movie_ids(vec![m]).await?;
                Ok(out.into_iter().next())
            }
            None => Ok(None),
        }
    }

    async fn get_all(&self) -> AppResult<Vec<Collection>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<CollectionModel>> {
            let mut conn = db.get_connection()?;
            let rows = collections::table
                .select(CollectionModel::as_select())
                .order(collections::name.asc())
                .load::<CollectionModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        self.load_collections_with_movie_ids(models).await
    }

    async fn save(&self, collection: &Collection) -> AppResult<Collection> {
        let db = Arc::clone(&self.db);
        let new_collection = NewCollection {
            name: collection.name.clone(),
            description: collection.description.clone(),
        };

        let model = task::spawn_blocking(move || -> AppResult<CollectionModel> {
            let mut conn = db.get_connection()?;
            let name = new_collection.name.clone();

            diesel::insert_into(collections::table)
                .values(&new_collection)
                .returning(CollectionModel::as_returning())
                .get_result::<CollectionModel>(&mut conn)
                .map_err(|e| duplicate_name_error(e, &name))
        })
        .await??;

        Ok(model.into_entity(Vec::new()))
    }

    async fn update(&self, collection: &Collection) -> AppResult<Collection> {
        let id = collection.id.ok_or_else(|| {
            AppError::ValidationError(
                "Cannot update a collection that has not been saved".to_string(),
            )
        })?;
        let db = Arc::clone(&self.db);
        let changes = CollectionChangeset {
            name: collection.name.clone(),
            description: collection.description.clone(),
            updated_at: collection.updated_at,
        };

        let model = task::spawn_blocking(move || -> AppResult<Option<CollectionModel>> {
            let mut conn = db.get_connection()?;
            let name = changes.name.clone();

            diesel::update(collections::table.filter(collections::id.eq(id)))
                .set(&changes)
                .returning(CollectionModel::as_returning())
                .get_result::<CollectionModel>(&mut conn)
                .optional()
                .map_err(|e| duplicate_name_error(e, &name))
        })
        .await??
        .ok_or_else(|| AppError::NotFound(format!("Collection with ID {} not found", id)))?;

        let out = self.load_collections_with_movie_ids(vec![model]).await?;
        out.into_iter()
            .next()
            .ok_or_else(|| AppError::InternalError("Failed to reload updated collection".into()))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            let n = diesel::delete(collections::table.filter(collections::id.eq(id)))
                .execute(&mut conn)?;
            if n == 0 {
                return Err(AppError::NotFound(format!(
                    "Collection with ID {} not found",
                    id
                )));
            }
            Ok(())
        })
        .await?
    }

    async fn add_movie_to_collection(&self, collection_id: i32, movie_id: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            // relies on PRIMARY KEY (collection_id, movie_id) in DB
            diesel::insert_into(collection_movies::table)
                .values(&NewCollectionMovie {
                    collection_id,
                    movie_id,
                })
                .on_conflict((collection_movies::collection_id, collection_movies::movie_id))
                .do_nothing()
                .execute(&mut conn)?;

            Ok(())
        })
        .await?
    }

    async fn remove_movie_from_collection(
        &self,
        collection_id: i32,
        movie_id: i32,
    ) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;

            let n = diesel::delete(
                collection_movies::table
                    .filter(collection_movies::collection_id.eq(collection_id))
                    .filter(collection_movies::movie_id.eq(movie_id)),
            )
            .execute(&mut conn)?;

            if n == 0 {
                return Err(AppError::NotFound("Movie not found in collection".into()));
            }
            Ok(())
        })
        .await?
    }

    async fn get_collection_movies(&self, collection_id: i32) -> AppResult<Vec<Movie>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<MovieModel>> {
            let mut conn = db.get_connection()?;

            // join + select only movie columns; maintain ordering by added_at
            let rows = collection_movies::table
                .inner_join(movies::table)
                .filter(collection_movies::collection_id.eq(collection_id))
                .select(MovieModel::as_select())
                .order(collection_movies::added_at.desc())
                .load::<MovieModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models
            .into_iter()
            .map(|m| m.into_entity(Vec::new(), Vec::new()))
            .collect())
    }
}

impl CollectionRepositoryImpl {
    /// Load collections with their movie IDs, in the order the movies were added.
    async fn load_collections_with_movie_ids(
        &self,
        collection_models: Vec<CollectionModel>,
    ) -> AppResult<Vec<Collection>> {
        if collection_models.is_empty() {
            return Ok(Vec::new());
        }

        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Vec<Collection>> {
            let mut conn = db.get_connection()?;

            let links: Vec<CollectionMovieModel> =
                CollectionMovieModel::belonging_to(&collection_models)
                    .select(CollectionMovieModel::as_select())
                    .order(collection_movies::added_at.asc())
                    .load::<CollectionMovieModel>(&mut conn)?;

            let grouped = links.grouped_by(&collection_models);

            let out = collection_models
                .into_iter()
                .zip(grouped)
                .map(|(model, entries)| {
                    let ids = entries.into_iter().map(|e| e.movie_id).collect();
                    model.into_entity(ids)
                })
                .collect();

            Ok(out)
        })
        .await?
    }
}

fn duplicate_name_error(err: DieselError, name: &str) -> AppError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            AppError::ValidationError(format!("Collection with name '{}' already exists", name))
        }
        other => other.into(),
    }
}
