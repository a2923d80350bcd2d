use super::builders::{cast_image_url, image_type, image_url, trailer_url};
use super::models::{Cast, Crew, MovieDetail};
use super::rating::RatingResolver;
use crate::modules::media::domain::ImageEncoder;
use crate::modules::movie::domain::entities::{
    ActorDetail, CastMember, CrewMember, Movie, MAX_CREDITS, NOT_AVAILABLE,
};
use crate::modules::movie::domain::value_objects::EncodedImage;
use crate::shared::config::AppSettings;
use crate::shared::errors::{EncodingError, MappingError, ParseError};
use crate::shared::utils::LogContext;
use chrono::NaiveDate;
use std::collections::HashSet;
use std::hash::Hash;
use std::sync::Arc;

const TMDB_DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%b %d, %Y";

/// Turns TMDB payloads into catalog records.
///
/// Holds only immutable settings and the image encoder, so one instance can
/// serve any number of concurrent imports.
#[derive(Clone)]
pub struct TmdbMapper {
    settings: Arc<AppSettings>,
    encoder: Arc<dyn ImageEncoder>,
    rating: RatingResolver,
}

impl TmdbMapper {
    pub fn new(settings: Arc<AppSettings>, encoder: Arc<dyn ImageEncoder>) -> Self {
        let rating = RatingResolver::new(settings.catalog.certification_fallback);
        Self {
            settings,
            encoder,
            rating,
        }
    }

    /// Map a full movie payload (with videos, credits and release dates
    /// appended) into an unsaved `Movie`.
    pub async fn map_movie_detail(&self, detail: &MovieDetail) -> Result<Movie, MappingError> {
        let result = self.build_movie(detail).await;

        if let Err(e) = &result {
            LogContext::error_with_context(e, &format!("Mapping TMDB movie {}", detail.id));
        }

        result
    }

    async fn build_movie(&self, detail: &MovieDetail) -> Result<Movie, MappingError> {
        let release_date = parse_date(&detail.release_date)?;
        let trailer_url = trailer_url(&detail.videos.results, &self.settings.tmdb.base_youtube_path);

        let catalog = &self.settings.catalog;
        let (backdrop, poster) = futures::try_join!(
            self.encode_remote(detail.backdrop_path.as_deref(), &catalog.backdrop_size),
            self.encode_remote(detail.poster_path.as_deref(), &catalog.poster_size),
        )?;

        let rating = self.rating.resolve(&detail.release_dates)?;

        let cast = top_credits(&detail.credits.cast, |c| c.popularity, |c| c.cast_id)
            .into_iter()
            .map(|c| self.cast_member(c))
            .collect();

        let crew = top_credits(&detail.credits.crew, |c| c.popularity, |c| c.id)
            .into_iter()
            .map(|c| self.crew_member(c))
            .collect();

        Ok(Movie {
            id: None,
            tmdb_id: detail.id,
            title: detail.title.clone(),
            tagline: detail.tagline.clone(),
            overview: detail.overview.clone(),
            runtime: detail.runtime.unwrap_or_default(),
            release_date,
            rating,
            vote_average: detail.vote_average,
            poster,
            backdrop,
            trailer_url,
            cast,
            crew,
        })
    }

    /// Normalize a person record for display. The input is left untouched.
    pub fn map_actor_detail(&self, actor: &ActorDetail) -> Result<ActorDetail, ParseError> {
        let birthday = if actor.birthday.trim().is_empty() {
            NOT_AVAILABLE.to_string()
        } else {
            parse_date(&actor.birthday)?
                .format(DISPLAY_DATE_FORMAT)
                .to_string()
        };

        Ok(ActorDetail {
            profile_path: self.profile_image(Some(&actor.profile_path)),
            biography: or_not_available(&actor.biography),
            place_of_birth: or_not_available(&actor.place_of_birth),
            birthday,
            ..actor.clone()
        })
    }

    // Empty paths produce an empty image without touching the encoder
    async fn encode_remote(
        &self,
        path: Option<&str>,
        size: &str,
    ) -> Result<EncodedImage, EncodingError> {
        let path = match path.map(str::trim) {
            Some(p) if !p.is_empty() => p,
            _ => return Ok(EncodedImage::empty()),
        };

        let url = image_url(&self.settings.tmdb.base_image_path, size, path);
        let data = self.encoder.encode_from_url(&url).await?;

        Ok(EncodedImage::new(data, image_type(path)))
    }

    fn profile_image(&self, profile_path: Option<&str>) -> String {
        cast_image_url(
            profile_path,
            &self.settings.tmdb.base_image_path,
            &self.settings.catalog.poster_size,
            &self.settings.catalog.default_cast_image,
        )
    }

    fn cast_member(&self, cast: &Cast) -> CastMember {
        CastMember {
            tmdb_person_id: cast.id,
            department: cast.known_for_department.clone(),
            name: cast.name.clone(),
            character: cast.character.clone(),
            image_url: self.profile_image(cast.profile_path.as_deref()),
        }
    }

    fn crew_member(&self, crew: &Crew) -> CrewMember {
        CrewMember {
            tmdb_person_id: crew.id,
            department: crew.department.clone(),
            name: crew.name.clone(),
            job: crew.job.clone(),
            image_url: self.profile_image(crew.profile_path.as_deref()),
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value.trim(), TMDB_DATE_FORMAT).map_err(|source| ParseError {
        value: value.to_string(),
        source,
    })
}

fn or_not_available(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

// NaN sorts last; -0.0 and 0.0 compare equal
fn popularity_key(popularity: f32) -> f32 {
    if popularity.is_nan() {
        f32::NEG_INFINITY
    } else {
        popularity + 0.0
    }
}

/// Most popular credits first (stable on ties), first occurrence of each
/// identity kept, capped at `MAX_CREDITS`.
fn top_credits<T, K>(
    credits: &[T],
    popularity: impl Fn(&T) -> f32,
    identity: impl Fn(&T) -> K,
) -> Vec<&T>
where
    K: Eq + Hash,
{
    let mut sorted: Vec<&T> = credits.iter().collect();
    sorted.sort_by(|a, b| popularity_key(popularity(b)).total_cmp(&popularity_key(popularity(a))));

    let mut seen = HashSet::new();
    sorted
        .into_iter()
        .filter(|credit| seen.insert(identity(credit)))
        .take(MAX_CREDITS)
        .collect()
}
