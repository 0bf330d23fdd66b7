use thiserror::Error;
use uuid::Uuid;

use crate::auth::password::{self, HashError};
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Field, Role, User};

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User already exists")]
    AlreadyExists,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: String,
    pub is_technician: bool,
}

/// Domain name of an email address: the `x` of `user@x.com`.
pub fn get_domain_name(email: &str) -> Option<&str> {
    let (_, after_at) = email.rsplit_once('@')?;
    let domain = after_at.strip_suffix(".com")?;
    if domain.is_empty() {
        return None;
    }
    Some(domain)
}

/// Derive the account role (and technician field) from the email address.
///
/// `@admin.com` addresses become admins. When the technician checkbox is
/// set, the mail domain must name a tech field (`@hardware.com`,
/// `@software.com`). Everyone else is a plain employee.
pub fn derive_role(email: &str, is_technician: bool) -> Result<(Role, Option<Field>), UserError> {
    if email.ends_with("@admin.com") {
        return Ok((Role::Admin, None));
    }

    if is_technician {
        let domain = get_domain_name(email)
            .ok_or_else(|| UserError::InvalidEmail("Invalid email format".to_string()))?;

        let field = Field::from_domain(domain).ok_or_else(|| {
            UserError::InvalidEmail(
                "Technician email must end in a valid field domain (e.g. @hardware.com, @software.com)"
                    .to_string(),
            )
        })?;

        return Ok((Role::Technician, Some(field)));
    }

    Ok((Role::Employee, None))
}

const USER_COLUMNS: &str = "id, email, name, password_hash, role, field, created_at, updated_at";

pub async fn get_user_by_email(email: &str) -> Result<Option<User>, UserError> {
    let pool = DatabaseManager::pool().await?;

    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE email = $1",
        USER_COLUMNS
    ))
    .bind(email)
    .fetch_optional(&pool)
    .await?;

    Ok(user)
}

pub async fn get_user_by_id(id: Uuid) -> Result<Option<User>, UserError> {
    let pool = DatabaseManager::pool().await?;

    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {} FROM users WHERE id = $1",
        USER_COLUMNS
    ))
    .bind(id)
    .fetch_optional(&pool)
    .await?;

    Ok(user)
}

/// Create a new account. The role is derived from the email, never taken
/// from the request. Duplicate emails are rejected both up front and via
/// the unique constraint, so concurrent registrations cannot both win.
pub async fn register_user(input: RegisterInput) -> Result<User, UserError> {
    let (role, field) = derive_role(&input.email, input.is_technician)?;

    if get_user_by_email(&input.email).await?.is_some() {
        return Err(UserError::AlreadyExists);
    }

    let password_hash = password::hash_password(&input.password)?;

    let pool = DatabaseManager::pool().await?;
    let user = sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (email, name, password_hash, role, field)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING {}",
        USER_COLUMNS
    ))
    .bind(&input.email)
    .bind(&input.name)
    .bind(&password_hash)
    .bind(role)
    .bind(field)
    .fetch_one(&pool)
    .await
    .map_err(|e| {
        // unique_violation: someone registered the same email concurrently
        let unique_violation = e
            .as_database_error()
            .and_then(|d| d.code())
            .map(|code| code == "23505")
            .unwrap_or(false);
        if unique_violation {
            UserError::AlreadyExists
        } else {
            UserError::Sqlx(e)
        }
    })?;

    Ok(user)
}

/// Look up a user by email and verify the password.
pub async fn authenticate(email: &str, pass: &str) -> Result<User, UserError> {
    let user = get_user_by_email(email)
        .await?
        .ok_or(UserError::InvalidCredentials)?;

    if !password::verify_password(pass, &user.password_hash) {
        return Err(UserError::InvalidCredentials);
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_domain_name() {
        assert_eq!(get_domain_name("alice@hardware.com"), Some("hardware"));
        assert_eq!(get_domain_name("a@b@software.com"), Some("software"));
        assert_eq!(get_domain_name("alice@hardware.org"), None);
        assert_eq!(get_domain_name("alice"), None);
        assert_eq!(get_domain_name("alice@.com"), None);
    }

    #[test]
    fn admin_domain_wins() {
        let (role, field) = derive_role("root@admin.com", false).unwrap();
        assert_eq!(role, Role::Admin);
        assert_eq!(field, None);

        // Even with the technician checkbox set
        let (role, _) = derive_role("root@admin.com", true).unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn technician_requires_field_domain() {
        let (role, field) = derive_role("bob@hardware.com", true).unwrap();
        assert_eq!(role, Role::Technician);
        assert_eq!(field, Some(Field::Hardware));

        assert!(matches!(
            derive_role("bob@gmail.com", true),
            Err(UserError::InvalidEmail(_))
        ));
        assert!(matches!(
            derive_role("not-an-email", true),
            Err(UserError::InvalidEmail(_))
        ));
    }

    #[test]
    fn everyone_else_is_an_employee() {
        let (role, field) = derive_role("carol@gmail.com", false).unwrap();
        assert_eq!(role, Role::Employee);
        assert_eq!(field, None);

        // Field domains without the checkbox stay employees too
        let (role, field) = derive_role("dave@software.com", false).unwrap();
        assert_eq!(role, Role::Employee);
        assert_eq!(field, None);
    }
}
