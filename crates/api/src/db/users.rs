//! User repository.

use sqlx::PgPool;

use gadgetz_core::{Email, UserRole};

use super::RepositoryError;
use crate::models::{NewUser, User};

const USER_COLUMNS: &str = "id, email, name, image, role, created_at";

/// Get a user by email.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn get_by_email(pool: &PgPool, email: &Email) -> Result<Option<User>, RepositoryError> {
    let user = sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Create a user if none exists for the email, otherwise return the existing
/// row untouched.
///
/// The insert is race-benign: a concurrent signup for the same email loses
/// the `ON CONFLICT DO NOTHING` and falls back to reading the winner's row.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if a query fails, or
/// `RepositoryError::DataCorruption` if the row vanishes between statements.
pub async fn create_if_absent(
    pool: &PgPool,
    email: &Email,
    new_user: &NewUser,
) -> Result<User, RepositoryError> {
    if let Some(existing) = get_by_email(pool, email).await? {
        return Ok(existing);
    }

    let inserted = sqlx::query_as::<_, User>(&format!(
        "INSERT INTO users (email, name, image, role)
         VALUES ($1, $2, $3, $4)
         ON CONFLICT (email) DO NOTHING
         RETURNING {USER_COLUMNS}"
    ))
    .bind(email)
    .bind(&new_user.name)
    .bind(&new_user.image)
    .bind(UserRole::Customer)
    .fetch_optional(pool)
    .await?;

    if let Some(user) = inserted {
        return Ok(user);
    }

    // Lost the race; the winner's row must exist now.
    get_by_email(pool, email).await?.ok_or_else(|| {
        RepositoryError::DataCorruption(format!("user {email} missing after conflict"))
    })
}

/// Get just the role for an email, `None` when no account exists.
///
/// # Errors
///
/// Returns `RepositoryError::Database` if the query fails.
pub async fn get_role(pool: &PgPool, email: &Email) -> Result<Option<UserRole>, RepositoryError> {
    let role = sqlx::query_scalar::<_, UserRole>("SELECT role FROM users WHERE email = $1")
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(role)
}
