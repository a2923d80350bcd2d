use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse content classification, MPAA style
#[derive(
    diesel_derive_enum::DbEnum,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
)]
#[ExistingTypePath = "crate::schema::sql_types::MovieRating"]
pub enum MovieRating {
    #[db_rename = "g"]
    G,
    #[db_rename = "pg"]
    PG,
    #[db_rename = "pg13"]
    PG13,
    #[db_rename = "r"]
    R,
    #[db_rename = "nc17"]
    NC17,
    #[default]
    #[db_rename = "nr"]
    NR,
}

impl MovieRating {
    /// Look up a certification string such as `"PG-13"` or `"nc-17"`.
    ///
    /// Hyphens are ignored and the match is case-insensitive. Anything that
    /// is not one of the known symbols returns `None`.
    pub fn from_certification(certification: &str) -> Option<Self> {
        let symbol: String = certification
            .trim()
            .chars()
            .filter(|c| *c != '-')
            .collect::<String>()
            .to_uppercase();

        match symbol.as_str() {
            "G" => Some(MovieRating::G),
            "PG" => Some(MovieRating::PG),
            "PG13" => Some(MovieRating::PG13),
            "R" => Some(MovieRating::R),
            "NC17" => Some(MovieRating::NC17),
            "NR" => Some(MovieRating::NR),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MovieRating::G => "G",
            MovieRating::PG => "PG",
            MovieRating::PG13 => "PG-13",
            MovieRating::R => "R",
            MovieRating::NC17 => "NC-17",
            MovieRating::NR => "NR",
        }
    }
}

impl fmt::Display for MovieRating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
