//! User account management commands.
//!
//! # Usage
//!
//! ```bash
//! # Promote an account to seller
//! gadgetz-cli user set-role -e seller@example.com -r seller
//!
//! # Promote an account to admin
//! gadgetz-cli user set-role -e admin@example.com -r admin
//! ```
//!
//! Accounts self-register through the API with the `customer` role; this is
//! the only path that grants a higher one.

use gadgetz_core::{Email, UserRole};

use super::{CommandError, connect};

/// Change an existing account's role.
///
/// # Errors
///
/// Returns an error if the role or email is invalid, the account does not
/// exist, or the database is unreachable.
pub async fn set_role(email: &str, role: &str) -> Result<(), CommandError> {
    let role: UserRole = role
        .parse()
        .map_err(|_| CommandError::InvalidRole(role.to_owned()))?;

    let email = Email::parse(email).map_err(|e| CommandError::InvalidEmail(e.to_string()))?;

    let pool = connect().await?;

    tracing::info!("Setting role for {} to {}", email, role);

    let result = sqlx::query("UPDATE users SET role = $2 WHERE email = $1")
        .bind(&email)
        .bind(role)
        .execute(&pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(CommandError::UserNotFound(email.to_string()));
    }

    tracing::info!("Role updated successfully!");
    Ok(())
}
