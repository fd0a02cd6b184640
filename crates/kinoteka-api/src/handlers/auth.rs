//! Auth handlers — sign-up and sign-in.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use crate::dto::request::{SignInRequest, SignUpRequest};
use crate::dto::response::{ApiResponse, IdResponse, TokenResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /auth/sign-up
pub async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignUpRequest>,
) -> Result<Json<ApiResponse<IdResponse>>, ApiError> {
    req.validate()?;

    let id = state
        .auth_service
        .sign_up(&req.username, &req.password, req.is_admin)
        .await?;

    Ok(Json(ApiResponse::ok(IdResponse { id })))
}

/// POST /auth/sign-in
pub async fn sign_in(
    State(state): State<AppState>,
    Json(req): Json<SignInRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    req.validate()?;

    let token = state
        .auth_service
        .sign_in(&req.username, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(TokenResponse { token })))
}
