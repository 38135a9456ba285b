//! Database operations for the `staged_headlines` table.

use hldb_core::RawRow;
use sqlx::PgPool;

use crate::DbError;

/// Stage one raw row without annotation and return its generated id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_staged_headline(pool: &PgPool, row: &RawRow) -> Result<i64, DbError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO staged_headlines (date, headline) \
         VALUES ($1, $2) \
         RETURNING id",
    )
    .bind(&row.date)
    .bind(&row.headline)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Count rows in `staged_headlines`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_staged_headlines(pool: &PgPool) -> Result<i64, DbError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM staged_headlines")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
