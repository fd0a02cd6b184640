//! Account sign-up, sign-in, and role lookup flows.

use std::sync::Arc;

use tracing::{info, warn};

use kinoteka_core::error::AppError;
use kinoteka_core::result::AppResult;
use kinoteka_database::repositories::UserRepository;
use kinoteka_entity::user::NewUser;

use crate::jwt::JwtEncoder;
use crate::password::PasswordHasher;

/// Orchestrates account creation, credential verification, and the
/// per-request admin flag lookup.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// Account store.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    password_hasher: Arc<PasswordHasher>,
    /// JWT encoder for token issuance.
    jwt_encoder: Arc<JwtEncoder>,
}

impl AuthService {
    /// Creates a new auth service with its dependencies.
    pub fn new(
        user_repo: Arc<UserRepository>,
        password_hasher: Arc<PasswordHasher>,
        jwt_encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            password_hasher,
            jwt_encoder,
        }
    }

    /// Creates a new account and returns its assigned identifier.
    ///
    /// The admin flag is fixed here; nothing in the exposed API mutates
    /// it afterwards.
    pub async fn sign_up(&self, username: &str, password: &str, is_admin: bool) -> AppResult<i64> {
        let new_user = NewUser {
            username: username.to_string(),
            password_hash: self.password_hasher.hash_password(password),
            is_admin,
        };

        let id = self.user_repo.create(&new_user).await?;
        info!(user_id = id, username = %username, is_admin, "Account created");
        Ok(id)
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// An unknown username and a wrong password fail identically so
    /// callers cannot enumerate which usernames exist.
    pub async fn sign_in(&self, username: &str, password: &str) -> AppResult<String> {
        let digest = self.password_hasher.hash_password(password);

        let user = self
            .user_repo
            .find_by_credentials(username, &digest)
            .await?
            .ok_or_else(|| {
                warn!(username = %username, "Failed sign-in attempt");
                AppError::authentication("Invalid username or password")
            })?;

        let token = self.jwt_encoder.generate(user.id)?;
        info!(user_id = user.id, "Sign-in successful");
        Ok(token)
    }

    /// Reads the current admin flag for an account.
    ///
    /// Looked up fresh on every call; promotion or demotion takes
    /// effect on the next request even for tokens issued earlier. A
    /// valid token whose account row has since been deleted fails
    /// authentication.
    pub async fn is_admin(&self, user_id: i64) -> AppResult<bool> {
        self.user_repo
            .is_admin(user_id)
            .await?
            .ok_or_else(|| AppError::authentication("Account no longer exists"))
    }
}
