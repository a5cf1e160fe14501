//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use auth_core::entities::UserRecord;

use super::responses::CurrentUserResponse;

// ============================================================================
// User Mappers
// ============================================================================

impl From<&UserRecord> for CurrentUserResponse {
    fn from(user: &UserRecord) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            disabled: user.disabled,
        }
    }
}

impl From<UserRecord> for CurrentUserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            disabled: user.disabled,
        }
    }
}
