//! # Database Queries
//!
//! SQL queries for the slice of the schema the running service reads.
//! Each function performs a specific database operation and returns
//! `Result<T, DatabaseError>`.

use deadpool_postgres::Pool;
use tokio_postgres::Row;
use tracing::debug;
use uuid::Uuid;

use super::models::{UserRecord, UserRole, UserStatus};
use super::DatabaseError;

/// Helper to convert a database row to a UserRecord.
fn row_to_user(row: &Row) -> Result<UserRecord, DatabaseError> {
    let role: String = row.get("role");
    let status: String = row.get("status");

    Ok(UserRecord {
        id: row.get("id"),
        phone_number: row.get("phone_number"),
        role: role.parse::<UserRole>().map_err(DatabaseError::DecodeError)?,
        status: status
            .parse::<UserStatus>()
            .map_err(DatabaseError::DecodeError)?,
    })
}

/// Look up a user's identity columns by primary key.
///
/// Returns `Ok(None)` when no such user exists; the caller decides
/// whether that is a 401 (authentication) or a 404 (lookup).
pub async fn find_user_by_id(pool: &Pool, id: Uuid) -> Result<Option<UserRecord>, DatabaseError> {
    debug!("Fetching user: {}", id);

    let client = pool
        .get()
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    let rows = client
        .query(
            r#"
            SELECT id, phone_number, role, status
            FROM users
            WHERE id = $1
            "#,
            &[&id],
        )
        .await?;

    match rows.first() {
        Some(row) => Ok(Some(row_to_user(row)?)),
        None => Ok(None),
    }
}
