use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

/// Result of a successful sign-in: the user plus the delegate-issued
/// access token, passed through opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthSession {
    pub user: AuthUser,
    pub access_token: String,
}
