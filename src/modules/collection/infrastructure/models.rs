use crate::modules::collection::domain::entities::{Collection, CollectionMovie};
use crate::modules::movie::infrastructure::models::MovieModel;
use crate::schema::{collection_movies, collections};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

// ============= COLLECTION MODELS =============

// For reading from database - with associations support
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = collections)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CollectionModel {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new collections
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = collections)]
pub struct NewCollection {
    pub name: String,
    pub description: Option<String>,
}

// For updating existing collections (excludes id and created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = collections)]
#[diesel(treat_none_as_null = true)]
pub struct CollectionChangeset {
    pub name: String,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl CollectionModel {
    pub fn into_entity(self, movie_ids: Vec<i32>) -> Collection {
        Collection {
            id: Some(self.id),
            name: self.name,
            description: self.description,
            movie_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

// ============= COLLECTION-MOVIE ASSOCIATION =============

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(CollectionModel, foreign_key = collection_id))]
#[diesel(belongs_to(MovieModel, foreign_key = movie_id))]
#[diesel(table_name = collection_movies)]
#[diesel(primary_key(collection_id, movie_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CollectionMovieModel {
    pub collection_id: i32,
    pub movie_id: i32,
    pub added_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = collection_movies)]
pub struct NewCollectionMovie {
    pub collection_id: i32,
    pub movie_id: i32,
}

impl From<CollectionMovieModel> for CollectionMovie {
    fn from(model: CollectionMovieModel) -> Self {
        Self {
            collection_id: model.collection_id,
            movie_id: model.movie_id,
            added_at: model.added_at,
        }
    }
}
