//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account in the Kinoteka system.
///
/// The admin flag is fixed at creation time; no exposed operation
/// mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique account identifier, assigned by the store.
    pub id: i64,
    /// Unique login name, matched case-sensitively.
    pub username: String,
    /// Salted SHA-256 password digest. The plaintext is never stored.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Whether the account holds administrator privileges.
    pub is_admin: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    /// Desired username.
    pub username: String,
    /// Pre-hashed password digest.
    pub password_hash: String,
    /// Whether the account is created as an administrator.
    pub is_admin: bool,
}
