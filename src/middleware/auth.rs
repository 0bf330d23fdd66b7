use axum::{
    extract::Request,
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{Json, Response},
};
use uuid::Uuid;

use crate::auth::{validate_jwt, Claims};
use crate::database::models::{Field, Role};
use crate::error::ApiError;

/// Authenticated user context extracted from JWT
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: Uuid,
    pub name: String,
    pub role: Role,
    pub field: Option<Field>,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            name: claims.name,
            role: claims.role,
            field: claims.field,
        }
    }
}

impl AuthUser {
    /// Field the caller works in; technician queue access requires one.
    pub fn technician_field(&self) -> Result<Field, ApiError> {
        self.field.ok_or_else(|| {
            ApiError::bad_request("User is not a technician or has no field assigned.")
        })
    }

    /// Technician endpoints are off-limits to plain employees.
    pub fn require_technician(&self) -> Result<(), ApiError> {
        match self.role {
            Role::Technician | Role::Admin => Ok(()),
            Role::Employee => Err(ApiError::forbidden("Technician role required")),
        }
    }
}

/// JWT authentication middleware that validates tokens and extracts user context
pub async fn jwt_auth_middleware(
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, (StatusCode, Json<serde_json::Value>)> {
    // Extract JWT from Authorization header
    let token = extract_jwt_from_headers(&headers).map_err(|msg| {
        let api_error = ApiError::unauthorized(msg);
        (
            StatusCode::from_u16(api_error.status_code()).unwrap(),
            Json(api_error.to_json()),
        )
    })?;

    // Validate and decode JWT
    let claims = validate_jwt(&token).map_err(|err| {
        let api_error = ApiError::unauthorized(err.to_string());
        (
            StatusCode::from_u16(api_error.status_code()).unwrap(),
            Json(api_error.to_json()),
        )
    })?;

    // Convert claims to AuthUser and inject into request
    let auth_user = AuthUser::from(claims);
    request.extensions_mut().insert(auth_user);

    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<String, String> {
    let auth_header = headers
        .get("authorization")
        .or_else(|| headers.get("Authorization"))
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    if let Some(token) = auth_str.strip_prefix("Bearer ") {
        if token.trim().is_empty() {
            return Err("Empty JWT token".to_string());
        }
        Ok(token.to_string())
    } else {
        Err("Authorization header must use Bearer token format".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_jwt_from_headers(&headers).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn rejects_missing_and_malformed_headers() {
        assert!(extract_jwt_from_headers(&HeaderMap::new()).is_err());
        assert!(extract_jwt_from_headers(&headers_with("Basic abc")).is_err());
        assert!(extract_jwt_from_headers(&headers_with("Bearer ")).is_err());
    }

    #[test]
    fn role_guards() {
        let employee = AuthUser {
            user_id: Uuid::new_v4(),
            name: "bob".to_string(),
            role: Role::Employee,
            field: None,
        };
        assert!(employee.require_technician().is_err());
        assert!(employee.technician_field().is_err());

        let tech = AuthUser {
            role: Role::Technician,
            field: Some(Field::Software),
            ..employee.clone()
        };
        assert!(tech.require_technician().is_ok());
        assert_eq!(tech.technician_field().unwrap(), Field::Software);
    }
}
