use crate::modules::movie::domain::entities::{CastMember, CrewMember, Movie};
use crate::modules::movie::domain::value_objects::{EncodedImage, MovieRating};
use crate::schema::{movie_cast, movie_crew, movies};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

// ============= MOVIE MODELS =============

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MovieModel {
    pub id: i32,
    pub tmdb_id: i32,
    pub title: String,
    pub tagline: String,
    pub overview: String,
    pub runtime: i32,
    pub release_date: NaiveDate,
    pub rating: MovieRating,
    pub vote_average: f32,
    pub poster: Vec<u8>,
    pub poster_type: String,
    pub backdrop: Vec<u8>,
    pub backdrop_type: String,
    pub trailer_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movies)]
pub struct NewMovie {
    pub tmdb_id: i32,
    pub title: String,
    pub tagline: String,
    pub overview: String,
    pub runtime: i32,
    pub release_date: NaiveDate,
    pub rating: MovieRating,
    pub vote_average: f32,
    pub poster: Vec<u8>,
    pub poster_type: String,
    pub backdrop: Vec<u8>,
    pub backdrop_type: String,
    pub trailer_url: Option<String>,
}

// Excludes id, tmdb_id and created_at
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = movies)]
#[diesel(treat_none_as_null = true)]
pub struct MovieChangeset {
    pub title: String,
    pub tagline: String,
    pub overview: String,
    pub runtime: i32,
    pub release_date: NaiveDate,
    pub rating: MovieRating,
    pub vote_average: f32,
    pub poster: Vec<u8>,
    pub poster_type: String,
    pub backdrop: Vec<u8>,
    pub backdrop_type: String,
    pub trailer_url: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Movie> for NewMovie {
    fn from(movie: &Movie) -> Self {
        Self {
            tmdb_id: movie.tmdb_id,
            title: movie.title.clone(),
            tagline: movie.tagline.clone(),
            overview: movie.overview.clone(),
            runtime: movie.runtime,
            release_date: movie.release_date,
            rating: movie.rating,
            vote_average: movie.vote_average,
            poster: movie.poster.data.clone(),
            poster_type: movie.poster.content_type.clone(),
            backdrop: movie.backdrop.data.clone(),
            backdrop_type: movie.backdrop.content_type.clone(),
            trailer_url: movie.trailer_url.clone(),
        }
    }
}

impl From<&Movie> for MovieChangeset {
    fn from(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            tagline: movie.tagline.clone(),
            overview: movie.overview.clone(),
            runtime: movie.runtime,
            release_date: movie.release_date,
            rating: movie.rating,
            vote_average: movie.vote_average,
            poster: movie.poster.data.clone(),
            poster_type: movie.poster.content_type.clone(),
            backdrop: movie.backdrop.data.clone(),
            backdrop_type: movie.backdrop.content_type.clone(),
            trailer_url: movie.trailer_url.clone(),
            updated_at: Utc::now(),
        }
    }
}

impl MovieModel {
    pub fn into_entity(self, cast: Vec<CastMember>, crew: Vec<CrewMember>) -> Movie {
        Movie {
            id: Some(self.id),
            tmdb_id: self.tmdb_id,
            title: self.title,
            tagline: self.tagline,
            overview: self.overview,
            runtime: self.runtime,
            release_date: self.release_date,
            rating: self.rating,
            vote_average: self.vote_average,
            poster: EncodedImage::new(self.poster, self.poster_type),
            backdrop: EncodedImage::new(self.backdrop, self.backdrop_type),
            trailer_url: self.trailer_url,
            cast,
            crew,
        }
    }
}

// ============= CREDIT MODELS =============

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(MovieModel, foreign_key = movie_id))]
#[diesel(table_name = movie_cast)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CastModel {
    pub id: i32,
    pub movie_id: i32,
    pub position: i32,
    pub tmdb_person_id: i32,
    pub department: String,
    pub name: String,
    pub character_name: String,
    pub image_url: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movie_cast)]
pub struct NewCast {
    pub movie_id: i32,
    pub position: i32,
    pub tmdb_person_id: i32,
    pub department: String,
    pub name: String,
    pub character_name: String,
    pub image_url: String,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(MovieModel, foreign_key = movie_id))]
#[diesel(table_name = movie_crew)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CrewModel {
    pub id: i32,
    pub movie_id: i32,
    pub position: i32,
    pub tmdb_person_id: i32,
    pub department: String,
    pub name: String,
    pub job: String,
    pub image_url: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = movie_crew)]
pub struct NewCrew {
    pub movie_id: i32,
    pub position: i32,
    pub tmdb_person_id: i32,
    pub department: String,
    pub name: String,
    pub job: String,
    pub image_url: String,
}

impl NewCast {
    pub fn from_member(movie_id: i32, position: usize, member: &CastMember) -> Self {
        Self {
            movie_id,
            position: position as i32,
            tmdb_person_id: member.tmdb_person_id,
            department: member.department.clone(),
            name: member.name.clone(),
            character_name: member.character.clone(),
            image_url: member.image_url.clone(),
        }
    }
}

impl NewCrew {
    pub fn from_member(movie_id: i32, position: usize, member: &CrewMember) -> Self {
        Self {
            movie_id,
            position: position as i32,
            tmdb_person_id: member.tmdb_person_id,
            department: member.department.clone(),
            name: member.name.clone(),
            job: member.job.clone(),
            image_url: member.image_url.clone(),
        }
    }
}

impl From<CastModel> for CastMember {
    fn from(model: CastModel) -> Self {
        Self {
            tmdb_person_id: model.tmdb_person_id,
            department: model.department,
            name: model.name,
            character: model.character_name,
            image_url: model.image_url,
        }
    }
}

impl From<CrewModel> for CrewMember {
    fn from(model: CrewModel) -> Self {
        Self {
            tmdb_person_id: model.tmdb_person_id,
            department: model.department,
            name: model.name,
            job: model.job,
            image_url: model.image_url,
        }
    }
}
