//! Review repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use naksu_core::PersonName;

use super::RepositoryError;
use crate::models::review::{Review, ReviewSample};

#[derive(sqlx::FromRow)]
struct ReviewRow {
    id: i32,
    first_name: PersonName,
    last_name: PersonName,
    review_text: String,
    created_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Self {
            id: row.id,
            first: row.first_name,
            last: row.last_name,
            review_text: row.review_text,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ReviewSampleRow {
    first_name: PersonName,
    review_text: String,
}

impl From<ReviewSampleRow> for ReviewSample {
    fn from(row: ReviewSampleRow) -> Self {
        Self {
            first: row.first_name,
            review_text: row.review_text,
        }
    }
}

/// Repository for review database operations.
pub struct ReviewRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReviewRepository<'a> {
    /// Create a new review repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Persist a new review with a store-assigned timestamp.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(
        &self,
        first: &PersonName,
        last: &PersonName,
        review_text: &str,
    ) -> Result<Review, RepositoryError> {
        let row = sqlx::query_as::<_, ReviewRow>(
            r"
            INSERT INTO reviews (first_name, last_name, review_text)
            VALUES ($1, $2, $3)
            RETURNING id, first_name, last_name, review_text, created_at
            ",
        )
        .bind(first)
        .bind(last)
        .bind(review_text)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    /// Draw a random sample of up to `limit` reviews without replacement.
    ///
    /// Sampling is the store's: `ORDER BY random()` makes each call an
    /// independent draw with no ordering guarantee across calls. Only the
    /// reviewer's first name and the review text are projected.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn sample(&self, limit: i64) -> Result<Vec<ReviewSample>, RepositoryError> {
        let rows = sqlx::query_as::<_, ReviewSampleRow>(
            r"
            SELECT first_name, review_text
            FROM reviews
            ORDER BY random()
            LIMIT $1
            ",
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
