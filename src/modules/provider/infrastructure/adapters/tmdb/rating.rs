use super::models::ReleaseDates;
use crate::modules::movie::domain::value_objects::MovieRating;
use crate::shared::config::CertificationFallback;
use crate::shared::errors::RatingResolutionError;

/// Country whose certification board decides the catalog rating
pub const TARGET_COUNTRY: &str = "US";

/// Derives a `MovieRating` from TMDB's per-country release data
#[derive(Debug, Clone)]
pub struct RatingResolver {
    country: String,
    fallback: CertificationFallback,
}

impl RatingResolver {
    pub fn new(fallback: CertificationFallback) -> Self {
        Self {
            country: TARGET_COUNTRY.to_string(),
            fallback,
        }
    }

    pub fn resolve(&self, release_dates: &ReleaseDates) -> Result<MovieRating, RatingResolutionError> {
        let certification = release_dates
            .results
            .iter()
            .find(|entry| entry.iso_3166_1 == self.country)
            .and_then(|entry| {
                entry
                    .release_dates
                    .iter()
                    .map(|release| release.certification.trim())
                    .find(|certification| !certification.is_empty())
            });

        let Some(certification) = certification else {
            return Ok(MovieRating::NR);
        };

        match MovieRating::from_certification(certification) {
            Some(rating) => Ok(rating),
            None => match self.fallback {
                CertificationFallback::Fail => Err(RatingResolutionError {
                    certification: certification.to_string(),
                }),
                CertificationFallback::NotRated => {
                    log::warn!(
                        "Unknown {} certification '{}', storing as NR",
                        self.country,
                        certification
                    );
                    Ok(MovieRating::NR)
                }
            },
        }
    }
}

impl Default for RatingResolver {
    fn default() -> Self {
        Self::new(CertificationFallback::default())
    }
}
