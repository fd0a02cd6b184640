//! Actor entity models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An actor in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Actor {
    /// Unique actor identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Free-form gender string.
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
}

/// Actor read model carrying the titles of all movies the actor
/// appears in, aggregated by the listing queries.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ActorWithMovies {
    /// Unique actor identifier.
    pub id: i64,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Free-form gender string.
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Titles of every movie the actor is credited in.
    pub movies: Vec<String>,
}

/// Data required to create a new actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewActor {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Free-form gender string.
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
}

/// Partial update of an actor. Every field is optional; an update
/// carrying no fields at all is rejected before it reaches the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateActor {
    /// New given name.
    pub first_name: Option<String>,
    /// New family name.
    pub last_name: Option<String>,
    /// New gender string.
    pub gender: Option<String>,
    /// New date of birth.
    pub date_of_birth: Option<NaiveDate>,
}

impl UpdateActor {
    /// Whether the patch carries at least one field.
    pub fn has_changes(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.gender.is_some()
            || self.date_of_birth.is_some()
    }
}
