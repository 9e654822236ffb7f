//! User records and the views of them returned by the auth flow.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

/// Row of the `users` table. `password` holds the bcrypt hash.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub password: String,
    pub created_at: DateTime<Utc>,
}

/// Returned by a successful registration. Never carries the hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    pub id: i64,
    pub username: String,
}

/// Returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for AuthenticatedUser {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            created_at: row.created_at,
        }
    }
}
