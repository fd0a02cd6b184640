//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
///
/// Both secrets are process-wide: they are loaded once at startup and
/// injected into the token codec and the password hasher at construction
/// time. Rotation requires a restart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Bearer token TTL in hours.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_hours: i64,
    /// System-wide salt mixed into password digests.
    #[serde(default = "default_password_salt")]
    pub password_salt: String,
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_token_ttl() -> i64 {
    12
}

fn default_password_salt() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}
