/// Test data factories
///
/// Realistic TMDB payloads come from `tests/fixtures`; the builders below
/// produce synthetic credits for ordering and capping checks.
use cinevault::modules::movie::domain::entities::ActorDetail;
use cinevault::modules::provider::infrastructure::adapters::tmdb::models::{
    Cast, CountryReleaseDates, Crew, MovieDetail, MovieSummary, ReleaseDate, ReleaseDates,
    TmdbSearchResponse,
};
use cinevault::shared::config::{AppSettings, CatalogSettings, TmdbSettings};

pub const MATRIX_JSON: &str = include_str!("../fixtures/tmdb_movie_603.json");
pub const KEANU_JSON: &str = include_str!("../fixtures/tmdb_person_6384.json");
pub const SEARCH_JSON: &str = include_str!("../fixtures/tmdb_search_matrix.json");

pub fn matrix() -> MovieDetail {
    serde_json::from_str(MATRIX_JSON).expect("fixture is valid")
}

pub fn keanu() -> ActorDetail {
    serde_json::from_str(KEANU_JSON).expect("fixture is valid")
}

pub fn search_results() -> Vec<MovieSummary> {
    serde_json::from_str::<TmdbSearchResponse>(SEARCH_JSON)
        .expect("fixture is valid")
        .results
}

pub fn settings() -> AppSettings {
    AppSettings::new(TmdbSettings::new("test-key"), CatalogSettings::default())
}

pub fn settings_with_api(base_url: &str) -> AppSettings {
    let mut tmdb = TmdbSettings::new("test-key");
    tmdb.base_url = format!("{}/3", base_url);
    tmdb.base_image_path = format!("{}/t/p", base_url);
    AppSettings::new(tmdb, CatalogSettings::default())
}

pub struct MovieDetailFactory {
    detail: MovieDetail,
}

impl MovieDetailFactory {
    pub fn new(tmdb_id: i32) -> Self {
        Self {
            detail: MovieDetail {
                id: tmdb_id,
                title: format!("Movie {}", tmdb_id),
                release_date: "2001-01-01".to_string(),
                runtime: Some(100),
                vote_average: 7.0,
                ..Default::default()
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.detail.title = title.to_string();
        self
    }

    pub fn release_date(mut self, date: &str) -> Self {
        self.detail.release_date = date.to_string();
        self
    }

    pub fn poster(mut self, path: &str) -> Self {
        self.detail.poster_path = Some(path.to_string());
        self
    }

    pub fn backdrop(mut self, path: &str) -> Self {
        self.detail.backdrop_path = Some(path.to_string());
        self
    }

    pub fn us_certification(mut self, certification: &str) -> Self {
        self.detail.release_dates = ReleaseDates {
            results: vec![CountryReleaseDates {
                iso_3166_1: "US".to_string(),
                release_dates: vec![ReleaseDate {
                    certification: certification.to_string(),
                    ..Default::default()
                }],
            }],
        };
        self
    }

    /// `(person id, cast id, popularity)` triples in payload order
    pub fn cast(mut self, entries: &[(i32, i32, f32)]) -> Self {
        self.detail.credits.cast = entries
            .iter()
            .map(|&(id, cast_id, popularity)| Cast {
                id,
                cast_id,
                name: format!("Actor {}", id),
                character: format!("Role {}", cast_id),
                known_for_department: "Acting".to_string(),
                popularity,
                ..Default::default()
            })
            .collect();
        self
    }

    /// `(person id, job, popularity)` triples in payload order
    pub fn crew(mut self, entries: &[(i32, &str, f32)]) -> Self {
        self.detail.credits.crew = entries
            .iter()
            .map(|&(id, job, popularity)| Crew {
                id,
                name: format!("Person {}", id),
                department: "Production".to_string(),
                job: job.to_string(),
                popularity,
                ..Default::default()
            })
            .collect();
        self
    }

    pub fn build(self) -> MovieDetail {
        self.detail
    }
}
