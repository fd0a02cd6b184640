//! Admin gate for mutation routes.

use kinoteka_core::error::AppError;

use crate::extractors::AuthUser;
use crate::state::AppState;

/// Checks that the authenticated user currently holds the admin flag.
///
/// The flag is looked up in the store on every call rather than read from
/// the token, so promotions and demotions take effect on the next request
/// made with an existing token. Called as the first statement of every
/// admin-only handler, before any side effect.
pub async fn require_admin(state: &AppState, auth: &AuthUser) -> Result<(), AppError> {
    if !state.auth_service.is_admin(auth.user_id).await? {
        return Err(AppError::authorization("Administrator privileges required"));
    }
    Ok(())
}
