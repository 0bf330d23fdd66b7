use serde::Serialize;

use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::database::models::{PublicUser, User};
use crate::error::ApiError;

/// Body returned by both login and register: a bearer token plus the
/// public projection of the account it belongs to.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: PublicUser,
    pub expires_in: u64,
}

pub fn session_response(user: &User) -> Result<SessionResponse, ApiError> {
    let claims = Claims::new(user.id, user.name.clone(), user.role, user.field);
    let token = generate_jwt(&claims)?;

    Ok(SessionResponse {
        token,
        user: user.to_public(),
        expires_in: config::config().security.jwt_expiry_hours * 3600,
    })
}
