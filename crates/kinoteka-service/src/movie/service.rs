//! Movie catalog operations.

use std::sync::Arc;

use tracing::{info, warn};

use kinoteka_core::error::AppError;
use kinoteka_core::result::AppResult;
use kinoteka_database::repositories::{ActorRepository, MovieRepository};
use kinoteka_entity::movie::{MovieSort, MovieWithActors, NewMovie, UpdateMovie};

use crate::context::RequestContext;

/// Handles movie catalog use cases.
#[derive(Debug, Clone)]
pub struct MovieService {
    /// Movie repository.
    movie_repo: Arc<MovieRepository>,
    /// Actor repository, used to validate credited actor ids.
    actor_repo: Arc<ActorRepository>,
}

impl MovieService {
    /// Creates a new movie service.
    pub fn new(movie_repo: Arc<MovieRepository>, actor_repo: Arc<ActorRepository>) -> Self {
        Self {
            movie_repo,
            actor_repo,
        }
    }

    /// Creates a movie, returning its assigned identifier.
    ///
    /// Credited actor ids that do not exist are dropped with a warning
    /// rather than failing the request.
    pub async fn create(&self, ctx: &RequestContext, mut data: NewMovie) -> AppResult<i64> {
        data.actor_ids = self.known_actor_ids(data.actor_ids).await?;

        let id = self.movie_repo.create(&data).await?;
        info!(user_id = ctx.user_id, movie_id = id, "Movie created");
        Ok(id)
    }

    /// Lists all movies together with their credited actor names.
    pub async fn list(&self, sort: MovieSort) -> AppResult<Vec<MovieWithActors>> {
        self.movie_repo.find_all_with_actors(sort).await
    }

    /// Fetches a single movie together with its credited actor names.
    pub async fn get(&self, id: i64) -> AppResult<MovieWithActors> {
        self.movie_repo
            .find_with_actors(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Movie {id} not found")))
    }

    /// Applies a partial update to a movie. A patch carrying
    /// `actor_ids` replaces the credited actor set.
    pub async fn update(&self, ctx: &RequestContext, id: i64, mut patch: UpdateMovie) -> AppResult<()> {
        if !patch.has_changes() {
            return Err(AppError::validation("Update request has no fields"));
        }

        if let Some(ids) = patch.actor_ids.take() {
            patch.actor_ids = Some(self.known_actor_ids(ids).await?);
        }

        if !self.movie_repo.update(id, &patch).await? {
            return Err(AppError::not_found(format!("Movie {id} not found")));
        }

        info!(user_id = ctx.user_id, movie_id = id, "Movie updated");
        Ok(())
    }

    /// Deletes a movie and its actor links.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.movie_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Movie {id} not found")));
        }

        info!(user_id = ctx.user_id, movie_id = id, "Movie deleted");
        Ok(())
    }

    /// Searches movies by a case-insensitive title fragment.
    pub async fn search_by_title(&self, fragment: &str) -> AppResult<Vec<MovieWithActors>> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Err(AppError::validation("Search fragment must not be empty"));
        }
        self.movie_repo.search_by_title(fragment).await
    }

    /// Searches movies by a case-insensitive actor name fragment.
    pub async fn search_by_actor(&self, fragment: &str) -> AppResult<Vec<MovieWithActors>> {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            return Err(AppError::validation("Search fragment must not be empty"));
        }
        self.movie_repo.search_by_actor(fragment).await
    }

    /// Keep only actor ids that exist in the catalog, warning about the
    /// rest.
    async fn known_actor_ids(&self, ids: Vec<i64>) -> AppResult<Vec<i64>> {
        if ids.is_empty() {
            return Ok(ids);
        }

        let existing = self.actor_repo.find_existing_ids(&ids).await?;
        let skipped: Vec<i64> = ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect();
        if !skipped.is_empty() {
            warn!(skipped = ?skipped, "Ignoring unknown actor ids");
        }

        Ok(existing)
    }
}
