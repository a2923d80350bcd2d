use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tokio::task;

use crate::log_debug;
use crate::modules::movie::domain::{entities::Movie, repositories::MovieRepository};
use crate::modules::movie::infrastructure::models::{
    CastModel, CrewModel, MovieChangeset, MovieModel, NewCast, NewCrew, NewMovie,
};
use crate::schema::{movie_cast, movie_crew, movies};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use crate::shared::Database;

pub struct MovieRepositoryImpl {
    db: Arc<Database>,
}

impl MovieRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    // Helper: attach ordered cast and crew to a movie row
    fn load_credits(conn: &mut PgConnection, model: MovieModel) -> AppResult<Movie> {
        let cast = CastModel::belonging_to(&model)
            .select(CastModel::as_select())
            .order(movie_cast::position.asc())
            .load::<CastModel>(conn)?;

        let crew = CrewModel::belonging_to(&model)
            .select(CrewModel::as_select())
            .order(movie_crew::position.asc())
            .load::<CrewModel>(conn)?;

        Ok(model.into_entity(
            cast.into_iter().map(Into::into).collect(),
            crew.into_iter().map(Into::into).collect(),
        ))
    }
}

#[async_trait]
impl MovieRepository for MovieRepositoryImpl {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Movie>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Movie>> {
            let mut conn = db.get_connection()?;
            let model = movies::table
                .filter(movies::id.eq(id))
                .select(MovieModel::as_select())
                .first::<MovieModel>(&mut conn)
                .optional()?;

            model
                .map(|m| Self::load_credits(&mut conn, m))
                .transpose()
        })
        .await?
    }

    async fn find_by_tmdb_id(&self, tmdb_id: i32) -> AppResult<Option<Movie>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Movie>> {
            let mut conn = db.get_connection()?;
            let model = movies::table
                .filter(movies::tmdb_id.eq(tmdb_id))
                .select(MovieModel::as_select())
                .first::<MovieModel>(&mut conn)
                .optional()?;

            model
                .map(|m| Self::load_credits(&mut conn, m))
                .transpose()
        })
        .await?
    }

    async fn get_all(&self) -> AppResult<Vec<Movie>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<MovieModel>> {
            let mut conn = db.get_connection()?;
            let rows = movies::table
                .select(MovieModel::as_select())
                .order(movies::title.asc())
                .load::<MovieModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models
            .into_iter()
            .map(|m| m.into_entity(Vec::new(), Vec::new()))
            .collect())
    }

    async fn save(&self, movie: &Movie) -> AppResult<Movie> {
        let db = Arc::clone(&self.db);
        let movie = movie.clone();

        task::spawn_blocking(move || -> AppResult<Movie> {
            let mut conn = db.get_connection()?;
            let start = std::time::Instant::now();

            let saved = conn.transaction::<Movie, AppError, _>(|conn| {
                log_debug!("Starting database transaction for movie: {}", movie.title);

                let model = diesel::insert_into(movies::table)
                    .values(NewMovie::from(&movie))
                    .returning(MovieModel::as_returning())
                    .get_result::<MovieModel>(conn)
                    .map_err(|e| duplicate_tmdb_id_error(e, movie.tmdb_id))?;

                let cast_rows: Vec<NewCast> = movie
                    .cast
                    .iter()
                    .enumerate()
                    .map(|(position, member)| NewCast::from_member(model.id, position, member))
                    .collect();
                if !cast_rows.is_empty() {
                    diesel::insert_into(movie_cast::table)
                        .values(&cast_rows)
                        .execute(conn)?;
                }

                let crew_rows: Vec<NewCrew> = movie
                    .crew
                    .iter()
                    .enumerate()
                    .map(|(position, member)| NewCrew::from_member(model.id, position, member))
                    .collect();
                if !crew_rows.is_empty() {
                    diesel::insert_into(movie_crew::table)
                        .values(&crew_rows)
                        .execute(conn)?;
                }

                Ok(model.into_entity(movie.cast.clone(), movie.crew.clone()))
            })?;

            LogContext::db_operation("insert", "movies", start.elapsed().as_millis() as u64);
            Ok(saved)
        })
        .await?
    }

    async fn update(&self, movie: &Movie) -> AppResult<Movie> {
        let id = movie.id.ok_or_else(|| {
            AppError::ValidationError("Cannot update a movie that has not been saved".to_string())
        })?;
        let db = Arc::clone(&self.db);
        let changes = MovieChangeset::from(movie);

        task::spawn_blocking(move || -> AppResult<Movie> {
            let mut conn = db.get_connection()?;

            let model = diesel::update(movies::table.filter(movies::id.eq(id)))
                .set(&changes)
                .returning(MovieModel::as_returning())
                .get_result::<MovieModel>(&mut conn)
                .optional()?
                .ok_or_else(|| AppError::NotFound(format!("Movie with ID {} not found", id)))?;

            Self::load_credits(&mut conn, model)
        })
        .await?
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<()> {
            let mut conn = db.get_connection()?;
            // Credits and collection links go with it (ON DELETE CASCADE)
            let n = diesel::delete(movies::table.filter(movies::id.eq(id))).execute(&mut conn)?;
            if n == 0 {
                return Err(AppError::NotFound(format!("Movie with ID {} not found", id)));
            }
            Ok(())
        })
        .await?
    }
}

fn duplicate_tmdb_id_error(err: DieselError, tmdb_id: i32) -> AppError {
    match err {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            AppError::ValidationError(format!("A movie with TMDB ID {} already exists", tmdb_id))
        }
        other => other.into(),
    }
}
