//! Movie entity models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A movie in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Movie {
    /// Unique movie identifier.
    pub id: i64,
    /// Movie title.
    pub title: String,
    /// Plot description.
    pub description: String,
    /// Theatrical release date.
    pub release_date: NaiveDate,
    /// Rating on a 0..=10 scale.
    pub rating: i32,
}

/// Movie read model carrying the full names of all credited actors,
/// aggregated by the listing queries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MovieWithActors {
    /// Unique movie identifier.
    pub id: i64,
    /// Movie title.
    pub title: String,
    /// Plot description.
    pub description: String,
    /// Theatrical release date.
    pub release_date: NaiveDate,
    /// Rating on a 0..=10 scale.
    pub rating: i32,
    /// Full names of every credited actor.
    pub actors: Vec<String>,
}

/// Data required to create a new movie.
///
/// `actor_ids` lists the credited actors; ids that do not exist in the
/// catalog are skipped with a warning rather than failing the create.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMovie {
    /// Movie title.
    pub title: String,
    /// Plot description.
    pub description: String,
    /// Theatrical release date.
    pub release_date: NaiveDate,
    /// Rating on a 0..=10 scale.
    pub rating: i32,
    /// Identifiers of the credited actors.
    pub actor_ids: Vec<i64>,
}

/// Partial update of a movie. Every field is optional; an update
/// carrying no fields at all is rejected before it reaches the store.
/// Supplying `actor_ids` replaces the credited actor set wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateMovie {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New release date.
    pub release_date: Option<NaiveDate>,
    /// New rating.
    pub rating: Option<i32>,
    /// Replacement set of credited actor identifiers.
    pub actor_ids: Option<Vec<i64>>,
}

impl UpdateMovie {
    /// Whether the patch carries at least one field.
    pub fn has_changes(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.release_date.is_some()
            || self.rating.is_some()
            || self.actor_ids.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_has_no_changes() {
        assert!(!UpdateMovie::default().has_changes());
    }

    #[test]
    fn test_actor_ids_alone_count_as_changes() {
        let patch = UpdateMovie {
            actor_ids: Some(vec![1, 2]),
            ..Default::default()
        };
        assert!(patch.has_changes());
    }
}
