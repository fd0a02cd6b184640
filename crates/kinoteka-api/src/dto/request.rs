//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use kinoteka_entity::actor::{NewActor, UpdateActor};
use kinoteka_entity::movie::{NewMovie, UpdateMovie};

/// Sign-up request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    /// Username.
    #[validate(length(min = 3, max = 100, message = "Username must be 3 to 100 characters"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Whether the account is created with administrator privileges.
    /// Fixed at sign-up; nothing in the API changes it afterwards.
    #[serde(default)]
    pub is_admin: bool,
}

/// Sign-in request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignInRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create actor request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateActorRequest {
    /// First name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: String,
    /// Last name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: String,
    /// Gender.
    #[validate(length(min = 1, max = 50))]
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
}

impl CreateActorRequest {
    /// Converts to the entity insert model.
    pub fn into_new_actor(self) -> NewActor {
        NewActor {
            first_name: self.first_name,
            last_name: self.last_name,
            gender: self.gender,
            date_of_birth: self.date_of_birth,
        }
    }
}

/// Partial actor update request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateActorRequest {
    /// New first name.
    #[validate(length(min = 1, max = 100))]
    pub first_name: Option<String>,
    /// New last name.
    #[validate(length(min = 1, max = 100))]
    pub last_name: Option<String>,
    /// New gender.
    #[validate(length(min = 1, max = 50))]
    pub gender: Option<String>,
    /// New date of birth.
    pub date_of_birth: Option<NaiveDate>,
}

impl UpdateActorRequest {
    /// Converts to the entity patch model.
    pub fn into_patch(self) -> UpdateActor {
        UpdateActor {
            first_name: self.first_name,
            last_name: self.last_name,
            gender: self.gender,
            date_of_birth: self.date_of_birth,
        }
    }
}

/// Create movie request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMovieRequest {
    /// Title.
    #[validate(length(min = 1, max = 150))]
    pub title: String,
    /// Description.
    #[validate(length(max = 1000))]
    pub description: String,
    /// Release date.
    pub release_date: NaiveDate,
    /// Rating from 0 to 10.
    #[validate(range(min = 0, max = 10, message = "Rating must be between 0 and 10"))]
    pub rating: i32,
    /// Ids of actors appearing in the movie.
    #[serde(default)]
    pub actor_ids: Vec<i64>,
}

impl CreateMovieRequest {
    /// Converts to the entity insert model.
    pub fn into_new_movie(self) -> NewMovie {
        NewMovie {
            title: self.title,
            description: self.description,
            release_date: self.release_date,
            rating: self.rating,
            actor_ids: self.actor_ids,
        }
    }
}

/// Partial movie update request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateMovieRequest {
    /// New title.
    #[validate(length(min = 1, max = 150))]
    pub title: Option<String>,
    /// New description.
    #[validate(length(max = 1000))]
    pub description: Option<String>,
    /// New release date.
    pub release_date: Option<NaiveDate>,
    /// New rating from 0 to 10.
    #[validate(range(min = 0, max = 10, message = "Rating must be between 0 and 10"))]
    pub rating: Option<i32>,
    /// Replacement actor id list. `None` leaves the cast untouched.
    pub actor_ids: Option<Vec<i64>>,
}

impl UpdateMovieRequest {
    /// Converts to the entity patch model.
    pub fn into_patch(self) -> UpdateMovie {
        UpdateMovie {
            title: self.title,
            description: self.description,
            release_date: self.release_date,
            rating: self.rating,
            actor_ids: self.actor_ids,
        }
    }
}

/// Query parameters for the movie listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListQuery {
    /// Sort order: "rating", "title", or "date". Defaults to rating.
    pub sort: Option<String>,
}

/// Query parameters for the movie search endpoint.
///
/// Exactly one of the two criteria must be supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSearchQuery {
    /// Title fragment, matched case-insensitively.
    pub title: Option<String>,
    /// Actor name fragment, matched case-insensitively.
    pub actor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        let mut req = CreateMovieRequest {
            title: "Heat".to_string(),
            description: "Crime drama".to_string(),
            release_date: NaiveDate::from_ymd_opt(1995, 12, 15).unwrap(),
            rating: 10,
            actor_ids: vec![],
        };
        assert!(req.validate().is_ok());

        req.rating = 11;
        assert!(req.validate().is_err());

        req.rating = -1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_short_password_rejected() {
        let req = SignUpRequest {
            username: "alice".to_string(),
            password: "short".to_string(),
            is_admin: false,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_is_admin_defaults_to_false() {
        let req: SignUpRequest =
            serde_json::from_str(r#"{"username": "alice", "password": "correct horse"}"#).unwrap();
        assert!(!req.is_admin);
    }

    #[test]
    fn test_update_validation_skips_absent_fields() {
        let req = UpdateMovieRequest {
            title: None,
            description: None,
            release_date: None,
            rating: None,
            actor_ids: None,
        };
        assert!(req.validate().is_ok());
    }
}
