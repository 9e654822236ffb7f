//! Queries: users, contacts, feedback. One parameterized statement each.

use crate::error::{AppError, AppResult};
use crate::models::{ContactMessage, RegisteredUser, UserRow};

use super::DbPool;

// ---- User ----

/// Insert a user. The `users_username_unique` constraint is the only duplicate
/// check; a violation maps to [`AppError::DuplicateUsername`].
pub async fn user_create(
    pool: &DbPool,
    username: &str,
    password_hash: &str,
) -> AppResult<RegisteredUser> {
    let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
        .bind(username)
        .bind(password_hash)
        .execute(pool)
        .await
        .map_err(map_unique_violation)?;
    Ok(RegisteredUser {
        id: result.last_insert_id() as i64,
        username: username.to_string(),
    })
}

pub async fn user_find_by_username(pool: &DbPool, username: &str) -> AppResult<Option<UserRow>> {
    let row = sqlx::query_as::<_, UserRow>(
        "SELECT id, username, password, created_at FROM users WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

fn map_unique_violation(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::DuplicateUsername
        }
        _ => AppError::Db(err),
    }
}

// ---- Contacts ----

pub async fn contact_create(pool: &DbPool, contact: &ContactMessage) -> AppResult<u64> {
    let result = sqlx::query("INSERT INTO contacts (name, email, message) VALUES (?, ?, ?)")
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.message)
        .execute(pool)
        .await?;
    Ok(result.last_insert_id())
}

// ---- Feedback ----

pub async fn feedback_create(pool: &DbPool, feedback_text: &str) -> AppResult<u64> {
    let result = sqlx::query("INSERT INTO feedback (feedback_text) VALUES (?)")
        .bind(feedback_text)
        .execute(pool)
        .await?;
    Ok(result.last_insert_id())
}
