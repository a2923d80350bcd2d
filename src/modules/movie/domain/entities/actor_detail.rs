use serde::{Deserialize, Serialize};

/// Text shown in place of a missing profile field
pub const NOT_AVAILABLE: &str = "Not Available";

/// Person profile as returned by TMDB's `/person/{id}` endpoint.
///
/// The same shape is used before and after normalization; normalized values
/// carry display-ready strings (formatted birthday, absolute image URL).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActorDetail {
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub biography: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub birthday: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub place_of_birth: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub profile_path: String,
    #[serde(default)]
    pub known_for_department: Option<String>,
    #[serde(default)]
    pub deathday: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub popularity: Option<f32>,
}

// TMDB sends `null` for unknown profile fields
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}
