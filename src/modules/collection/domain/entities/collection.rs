use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Local identifier, `None` until the collection is persisted
    pub id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub movie_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Membership of one movie in one collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionMovie {
    pub collection_id: i32,
    pub movie_id: i32,
    pub added_at: DateTime<Utc>,
}

impl Collection {
    pub fn new(name: String) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name,
            description: None,
            movie_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = Some(description);
        self
    }

    pub fn add_movie(&mut self, movie_id: i32) -> bool {
        if !self.movie_ids.contains(&movie_id) {
            self.movie_ids.push(movie_id);
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }

    pub fn remove_movie(&mut self, movie_id: i32) -> bool {
        let original_len = self.movie_ids.len();
        self.movie_ids.retain(|id| *id != movie_id);

        if self.movie_ids.len() < original_len {
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }

    pub fn contains_movie(&self, movie_id: i32) -> bool {
        self.movie_ids.contains(&movie_id)
    }

    pub fn movie_count(&self) -> usize {
        self.movie_ids.len()
    }

    pub fn rename(&mut self, new_name: String) {
        self.name = new_name;
        self.updated_at = Utc::now();
    }

    pub fn update_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Case-insensitive name comparison, matching the database's uniqueness rule
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership_changes() {
        let mut collection = Collection::new("Favorites".to_string());

        assert!(collection.add_movie(7));
        assert!(!collection.add_movie(7));
        assert!(collection.contains_movie(7));
        assert_eq!(collection.movie_count(), 1);

        assert!(collection.remove_movie(7));
        assert!(!collection.remove_movie(7));
        assert!(collection.movie_ids.is_empty());
    }

    #[test]
    fn test_has_name_ignores_case() {
        let collection = Collection::new("Sci-Fi".to_string());
        assert!(collection.has_name("sci-fi"));
        assert!(collection.has_name(" SCI-FI "));
        assert!(!collection.has_name("Horror"));
    }
}
