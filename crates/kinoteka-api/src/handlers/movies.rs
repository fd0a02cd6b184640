//! Movie catalog handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use validator::Validate;

use kinoteka_core::error::AppError;
use kinoteka_entity::movie::{MovieSort, MovieWithActors};

use crate::dto::request::{
    CreateMovieRequest, MovieListQuery, MovieSearchQuery, UpdateMovieRequest,
};
use crate::dto::response::{ApiResponse, IdResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

/// GET /api/movies?sort=rating|title|date
pub async fn list_movies(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<MovieListQuery>,
) -> Result<Json<ApiResponse<Vec<MovieWithActors>>>, ApiError> {
    let sort = match params.sort.as_deref() {
        Some(value) => value.parse()?,
        None => MovieSort::default(),
    };

    let movies = state.movie_service.list(sort).await?;
    Ok(Json(ApiResponse::ok(movies)))
}

/// GET /api/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MovieWithActors>>, ApiError> {
    let movie = state.movie_service.get(id).await?;
    Ok(Json(ApiResponse::ok(movie)))
}

/// GET /api/movies/search?title=... | ?actor=...
pub async fn search_movies(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<MovieSearchQuery>,
) -> Result<Json<ApiResponse<Vec<MovieWithActors>>>, ApiError> {
    let movies = match (params.title.as_deref(), params.actor.as_deref()) {
        (Some(title), None) => state.movie_service.search_by_title(title).await?,
        (None, Some(actor)) => state.movie_service.search_by_actor(actor).await?,
        _ => {
            return Err(AppError::validation(
                "Search requires exactly one of 'title' or 'actor'",
            )
            .into());
        }
    };

    Ok(Json(ApiResponse::ok(movies)))
}

/// POST /api/movies (admin)
pub async fn create_movie(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateMovieRequest>,
) -> Result<Json<ApiResponse<IdResponse>>, ApiError> {
    rbac::require_admin(&state, &auth).await?;
    req.validate()?;

    let id = state
        .movie_service
        .create(&auth, req.into_new_movie())
        .await?;

    Ok(Json(ApiResponse::ok(IdResponse { id })))
}

/// PUT /api/movies/{id} (admin)
pub async fn update_movie(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateMovieRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    rbac::require_admin(&state, &auth).await?;
    req.validate()?;

    state.movie_service.update(&auth, id, req.into_patch()).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Movie {id} updated"),
    })))
}

/// DELETE /api/movies/{id} (admin)
pub async fn delete_movie(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    rbac::require_admin(&state, &auth).await?;

    state.movie_service.delete(&auth, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Movie {id} deleted"),
    })))
}
