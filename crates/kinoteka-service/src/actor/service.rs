//! Actor catalog operations.

use std::sync::Arc;

use tracing::info;

use kinoteka_core::error::AppError;
use kinoteka_core::result::AppResult;
use kinoteka_database::repositories::ActorRepository;
use kinoteka_entity::actor::{ActorWithMovies, NewActor, UpdateActor};

use crate::context::RequestContext;

/// Handles actor catalog use cases.
#[derive(Debug, Clone)]
pub struct ActorService {
    /// Actor repository.
    actor_repo: Arc<ActorRepository>,
}

impl ActorService {
    /// Creates a new actor service.
    pub fn new(actor_repo: Arc<ActorRepository>) -> Self {
        Self { actor_repo }
    }

    /// Creates an actor, returning its assigned identifier.
    pub async fn create(&self, ctx: &RequestContext, data: NewActor) -> AppResult<i64> {
        let id = self.actor_repo.create(&data).await?;
        info!(user_id = ctx.user_id, actor_id = id, "Actor created");
        Ok(id)
    }

    /// Lists all actors together with the titles of their movies.
    pub async fn list(&self) -> AppResult<Vec<ActorWithMovies>> {
        self.actor_repo.find_all_with_movies().await
    }

    /// Fetches a single actor together with the titles of their movies.
    pub async fn get(&self, id: i64) -> AppResult<ActorWithMovies> {
        self.actor_repo
            .find_with_movies(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Actor {id} not found")))
    }

    /// Applies a partial update to an actor.
    pub async fn update(&self, ctx: &RequestContext, id: i64, patch: UpdateActor) -> AppResult<()> {
        if !patch.has_changes() {
            return Err(AppError::validation("Update request has no fields"));
        }

        if !self.actor_repo.update(id, &patch).await? {
            return Err(AppError::not_found(format!("Actor {id} not found")));
        }

        info!(user_id = ctx.user_id, actor_id = id, "Actor updated");
        Ok(())
    }

    /// Deletes an actor. Movie credits pointing at it are removed with it.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<()> {
        if !self.actor_repo.delete(id).await? {
            return Err(AppError::not_found(format!("Actor {id} not found")));
        }

        info!(user_id = ctx.user_id, actor_id = id, "Actor deleted");
        Ok(())
    }
}
