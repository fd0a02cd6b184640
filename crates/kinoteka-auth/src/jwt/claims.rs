//! JWT claims structure for bearer tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// JWT claims payload embedded in every bearer token.
///
/// The field names are the wire format: `user_id` carries the subject
/// account identifier, `iat` and `exp` are Unix epoch seconds. Tokens
/// carry no role information; privileges are resolved against the
/// store at request time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject account identifier.
    pub user_id: i64,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Checks whether this token has expired against the wall clock.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
