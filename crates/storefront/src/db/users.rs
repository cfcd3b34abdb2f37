//! User repository for database operations.
//!
//! Queries use runtime-bound `query_as` so the crate builds without a live
//! database; rows decode through the `naksu-core` newtype codecs.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use naksu_core::{Email, PersonName};

use super::RepositoryError;
use crate::models::user::User;

/// Database row for a user, including the stored password hash.
///
/// This type never crosses the repository boundary whole: callers get a
/// [`User`] (no hash) and, for login, the hash as a separate value.
#[derive(sqlx::FromRow)]
struct UserRow {
    id: i32,
    first_name: PersonName,
    last_name: PersonName,
    email: Email,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_parts(self) -> (User, String) {
        (
            User {
                id: self.id,
                first: self.first_name,
                last: self.last_name,
                email: self.email,
                created_at: self.created_at,
            },
            self.password_hash,
        )
    }
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user with a pre-hashed password.
    ///
    /// The insert is atomic; the UNIQUE index on `email` is the
    /// authoritative duplicate guard, so two concurrent signups for the
    /// same address cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        first: &PersonName,
        last: &PersonName,
        email: &Email,
        password_hash: &str,
    ) -> Result<User, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            INSERT INTO users (first_name, last_name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email, password_hash, created_at
            ",
        )
        .bind(first)
        .bind(last)
        .bind(email)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        let (user, _hash) = row.into_parts();
        Ok(user)
    }

    /// Look up a user by email, returning the record and its password hash.
    ///
    /// Returns `None` if no user has this email.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_email(
        &self,
        email: &Email,
    ) -> Result<Option<(User, String)>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            r"
            SELECT id, first_name, last_name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(UserRow::into_parts))
    }
}
