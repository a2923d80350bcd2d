use serde::{Deserialize, Deserializer, Serialize};

// TMDB uses `null` and missing keys interchangeably for empty text
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// Response envelopes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmdbSearchResponse {
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// Search result entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: i32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: Option<f32>,
    #[serde(default)]
    pub popularity: Option<f32>,
}

/// `/movie/{id}` with `append_to_response=videos,credits,release_dates`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i32,
    #[serde(default)]
    pub adult: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub original_title: Option<String>,
    #[serde(default)]
    pub original_language: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tagline: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub overview: String,
    #[serde(default)]
    pub runtime: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f32,
    #[serde(default)]
    pub vote_count: Option<u32>,
    #[serde(default)]
    pub popularity: Option<f32>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub budget: Option<i64>,
    #[serde(default)]
    pub revenue: Option<i64>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    #[serde(default)]
    pub videos: Videos,
    #[serde(default)]
    pub credits: Credits,
    #[serde(default)]
    pub release_dates: ReleaseDates,
}

// Videos
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Videos {
    #[serde(default)]
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Video {
    #[serde(default)]
    pub iso_639_1: Option<String>,
    #[serde(default)]
    pub iso_3166_1: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub key: String, // YouTube video ID
    #[serde(default)]
    pub site: String,
    #[serde(default)]
    pub size: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub r#type: String, // "Trailer", "Teaser", "Clip", "Featurette", ...
    #[serde(default)]
    pub official: bool,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub id: String,
}

// Credits
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Credits {
    #[serde(default)]
    pub cast: Vec<Cast>,
    #[serde(default)]
    pub crew: Vec<Crew>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cast {
    /// Person id, shared across all of a person's credits
    pub id: i32,
    /// Credit-specific id, unique per role on this movie
    #[serde(default)]
    pub cast_id: i32,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub gender: Option<u8>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub known_for_department: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub popularity: f32,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub character: String,
    #[serde(default)]
    pub credit_id: Option<String>,
    #[serde(default)]
    pub order: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Crew {
    pub id: i32,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub gender: Option<u8>,
    #[serde(default)]
    pub known_for_department: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default)]
    pub original_name: Option<String>,
    #[serde(default)]
    pub popularity: f32,
    #[serde(default)]
    pub profile_path: Option<String>,
    #[serde(default)]
    pub credit_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub department: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job: String,
}

// Release dates / certifications
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReleaseDates {
    #[serde(default)]
    pub results: Vec<CountryReleaseDates>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CountryReleaseDates {
    pub iso_3166_1: String,
    #[serde(default)]
    pub release_dates: Vec<ReleaseDate>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReleaseDate {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub certification: String,
    #[serde(default)]
    pub iso_639_1: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    /// 1 premiere, 2 limited theatrical, 3 theatrical, 4 digital, 5 physical, 6 TV
    #[serde(default)]
    pub r#type: Option<u8>,
    #[serde(default)]
    pub note: Option<String>,
}

// Supporting types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub origin_country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    #[serde(default)]
    pub english_name: Option<String>,
    pub iso_639_1: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_payload_deserializes() {
        let detail: MovieDetail =
            serde_json::from_str(r#"{"id": 603, "title": "The Matrix", "tagline": null}"#)
                .unwrap();

        assert_eq!(detail.id, 603);
        assert_eq!(detail.tagline, "");
        assert!(detail.credits.cast.is_empty());
        assert!(detail.videos.results.is_empty());
        assert!(detail.release_dates.results.is_empty());
    }

    #[test]
    fn test_nested_blocks_deserialize() {
        let json = r#"{
            "id": 603,
            "title": "The Matrix",
            "release_date": "1999-03-30",
            "videos": {"results": [{"key": "abc", "type": "Trailer", "site": "YouTube"}]},
            "credits": {
                "cast": [{"id": 6384, "cast_id": 34, "name": "Keanu Reeves", "character": "Neo", "popularity": 40.1}],
                "crew": [{"id": 9339, "name": "Lilly Wachowski", "department": "Directing", "job": "Director"}]
            },
            "release_dates": {"results": [
                {"iso_3166_1": "US", "release_dates": [{"certification": "R", "type": 3}]}
            ]}
        }"#;

        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.videos.results[0].r#type, "Trailer");
        assert_eq!(detail.credits.cast[0].cast_id, 34);
        assert_eq!(detail.credits.crew[0].job, "Director");
        assert_eq!(
            detail.release_dates.results[0].release_dates[0].certification,
            "R"
        );
    }
}
