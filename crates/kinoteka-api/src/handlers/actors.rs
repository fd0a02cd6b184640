//! Actor catalog handlers.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use kinoteka_entity::actor::ActorWithMovies;

use crate::dto::request::{CreateActorRequest, UpdateActorRequest};
use crate::dto::response::{ApiResponse, IdResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

/// GET /api/actors
pub async fn list_actors(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<ActorWithMovies>>>, ApiError> {
    let actors = state.actor_service.list().await?;
    Ok(Json(ApiResponse::ok(actors)))
}

/// GET /api/actors/{id}
pub async fn get_actor(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ActorWithMovies>>, ApiError> {
    let actor = state.actor_service.get(id).await?;
    Ok(Json(ApiResponse::ok(actor)))
}

/// POST /api/actors (admin)
pub async fn create_actor(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateActorRequest>,
) -> Result<Json<ApiResponse<IdResponse>>, ApiError> {
    rbac::require_admin(&state, &auth).await?;
    req.validate()?;

    let id = state
        .actor_service
        .create(&auth, req.into_new_actor())
        .await?;

    Ok(Json(ApiResponse::ok(IdResponse { id })))
}

/// PUT /api/actors/{id} (admin)
pub async fn update_actor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateActorRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    rbac::require_admin(&state, &auth).await?;
    req.validate()?;

    state.actor_service.update(&auth, id, req.into_patch()).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Actor {id} updated"),
    })))
}

/// DELETE /api/actors/{id} (admin)
pub async fn delete_actor(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    rbac::require_admin(&state, &auth).await?;

    state.actor_service.delete(&auth, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Actor {id} deleted"),
    })))
}
