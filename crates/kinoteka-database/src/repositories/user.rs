//! User repository implementation.
//!
//! This is the account store behind authentication and the admin gate.
//! The interface is deliberately narrow: accounts are created at sign-up,
//! looked up by credential pair at sign-in, and re-read for their admin
//! flag on every privileged request. Nothing else mutates them.

use sqlx::PgPool;

use kinoteka_core::error::{AppError, ErrorKind};
use kinoteka_core::result::AppResult;
use kinoteka_entity::user::{NewUser, User};

/// Repository for account storage and role lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new account, returning its assigned identifier.
    pub async fn create(&self, data: &NewUser) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>(
            "INSERT INTO users (username, password_hash, is_admin) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(&data.username)
        .bind(&data.password_hash)
        .bind(data.is_admin)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_username_key") =>
            {
                AppError::conflict(format!("Username '{}' already exists", data.username))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Find an account by its exact username and password digest.
    ///
    /// Username matching is case-sensitive. A wrong password and an
    /// unknown username are indistinguishable here; both return `None`.
    pub async fn find_by_credentials(
        &self,
        username: &str,
        password_hash: &str,
    ) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE username = $1 AND password_hash = $2",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find user by credentials", e)
        })
    }

    /// Read the current admin flag for an account.
    ///
    /// Returns `None` when the account does not exist. Read fresh on
    /// every call so that demotion takes effect on the next request.
    pub async fn is_admin(&self, id: i64) -> AppResult<Option<bool>> {
        sqlx::query_scalar::<_, bool>("SELECT is_admin FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to read admin flag", e)
            })
    }
}
