use serde::{Deserialize, Serialize};

/// An actor's role on a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastMember {
    pub tmdb_person_id: i32,
    pub department: String,
    pub name: String,
    pub character: String,
    pub image_url: String,
}

/// A crew member's job on a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewMember {
    pub tmdb_person_id: i32,
    pub department: String,
    pub name: String,
    pub job: String,
    pub image_url: String,
}
