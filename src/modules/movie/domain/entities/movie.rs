use super::credits::{CastMember, CrewMember};
use crate::modules::movie::domain::value_objects::{EncodedImage, MovieRating};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Most cast or crew entries kept per movie
pub const MAX_CREDITS: usize = 20;

/// A movie as stored in the local catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Local identifier, `None` until the movie is persisted
    pub id: Option<i32>,
    pub tmdb_id: i32,
    pub title: String,
    pub tagline: String,
    pub overview: String,
    /// Minutes
    pub runtime: i32,
    pub release_date: NaiveDate,
    pub rating: MovieRating,
    pub vote_average: f32,
    pub poster: EncodedImage,
    pub backdrop: EncodedImage,
    pub trailer_url: Option<String>,
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

impl Movie {
    pub fn new(tmdb_id: i32, title: impl Into<String>, release_date: NaiveDate) -> Self {
        Self {
            id: None,
            tmdb_id,
            title: title.into(),
            tagline: String::new(),
            overview: String::new(),
            runtime: 0,
            release_date,
            rating: MovieRating::default(),
            vote_average: 0.0,
            poster: EncodedImage::empty(),
            backdrop: EncodedImage::empty(),
            trailer_url: None,
            cast: Vec::new(),
            crew: Vec::new(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Same movie with the local identifier cleared
    pub fn without_local_id(&self) -> Self {
        Self {
            id: None,
            ..self.clone()
        }
    }

    pub fn release_year(&self) -> i32 {
        use chrono::Datelike;
        self.release_date.year()
    }
}
