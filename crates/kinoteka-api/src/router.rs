//! Route definitions for the Kinoteka HTTP API.
//!
//! Catalog routes live under `/api` and require a bearer token via the
//! `AuthUser` extractor; sign-up, sign-in, and the health check are public.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new().merge(actor_routes()).merge(movie_routes());

    Router::new()
        .merge(auth_routes())
        .merge(health_routes())
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: sign-up, sign-in (no token required)
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/sign-up", post(handlers::auth::sign_up))
        .route("/auth/sign-in", post(handlers::auth::sign_in))
}

/// Actor catalog: reads for any account, mutations for admins
fn actor_routes() -> Router<AppState> {
    Router::new()
        .route("/actors", get(handlers::actors::list_actors))
        .route("/actors", post(handlers::actors::create_actor))
        .route("/actors/{id}", get(handlers::actors::get_actor))
        .route("/actors/{id}", put(handlers::actors::update_actor))
        .route("/actors/{id}", delete(handlers::actors::delete_actor))
}

/// Movie catalog: reads and search for any account, mutations for admins
fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/movies", get(handlers::movies::list_movies))
        .route("/movies", post(handlers::movies::create_movie))
        .route("/movies/search", get(handlers::movies::search_movies))
        .route("/movies/{id}", get(handlers::movies::get_movie))
        .route("/movies/{id}", put(handlers::movies::update_movie))
        .route("/movies/{id}", delete(handlers::movies::delete_movie))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}
