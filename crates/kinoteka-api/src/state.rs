//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use kinoteka_auth::jwt::decoder::JwtDecoder;
use kinoteka_auth::service::AuthService;
use kinoteka_core::config::AppConfig;
use kinoteka_database::DatabasePool;
use kinoteka_service::actor::service::ActorService;
use kinoteka_service::movie::service::MovieService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone (`Arc` or pool handles).
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Account sign-up, sign-in, and admin lookups
    pub auth_service: Arc<AuthService>,

    // ── Services ─────────────────────────────────────────────
    /// Actor catalog service
    pub actor_service: Arc<ActorService>,
    /// Movie catalog service
    pub movie_service: Arc<MovieService>,
}
