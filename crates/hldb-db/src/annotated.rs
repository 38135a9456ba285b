//! Database operations for the `annotated_headlines` table.

use chrono::{DateTime, Utc};
use hldb_core::{AnnotatedRecord, SentimentLabel};
use serde::Serialize;
use sqlx::PgPool;

use crate::DbError;

// ---------------------------------------------------------------------------
// Row types
// ---------------------------------------------------------------------------

/// A row from the `annotated_headlines` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AnnotatedHeadlineRow {
    pub id: i64,
    pub date: String,
    pub headline: String,
    pub entities: Vec<String>,
    pub sentiment_label: String,
    pub created_at: DateTime<Utc>,
}

impl AnnotatedHeadlineRow {
    /// Parse the stored label.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::InvalidRecord`] if the column holds an unknown label.
    pub fn label(&self) -> Result<SentimentLabel, DbError> {
        self.sentiment_label
            .parse()
            .map_err(DbError::InvalidRecord)
    }
}

/// One group of the entity ranking: how many entity mentions share this
/// `(entity, sentiment_label)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct EntitySentimentCount {
    pub entity: String,
    pub sentiment_label: String,
    pub count: i64,
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Insert one annotated headline and return its generated id.
///
/// There is no existence check: inserting the same record twice stores it
/// twice.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the insert fails.
pub async fn insert_annotated_headline(
    pool: &PgPool,
    record: &AnnotatedRecord,
) -> Result<i64, DbError> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO annotated_headlines (date, headline, entities, sentiment_label) \
         VALUES ($1, $2, $3, $4) \
         RETURNING id",
    )
    .bind(&record.date)
    .bind(&record.headline)
    .bind(&record.entities)
    .bind(record.sentiment_label.as_str())
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Return every annotated headline whose entity list contains `entity`
/// exactly (case-sensitive), in insertion order.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn find_headlines_by_entity(
    pool: &PgPool,
    entity: &str,
) -> Result<Vec<AnnotatedHeadlineRow>, DbError> {
    let rows = sqlx::query_as::<_, AnnotatedHeadlineRow>(
        "SELECT id, date, headline, entities, sentiment_label, created_at \
         FROM annotated_headlines \
         WHERE entities @> ARRAY[$1]::text[] \
         ORDER BY id",
    )
    .bind(entity)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Rank `(entity, sentiment_label)` pairs by how many entity mentions they
/// cover, highest first, returning at most `limit` groups.
///
/// A headline with k entities contributes k mentions. Ties keep the order in
/// which the pair first appeared, then fall back to entity and label so the
/// output is stable across runs.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn top_entity_sentiment_counts(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<EntitySentimentCount>, DbError> {
    let rows = sqlx::query_as::<_, EntitySentimentCount>(
        "SELECT e.entity AS entity, h.sentiment_label AS sentiment_label, COUNT(*) AS count \
         FROM annotated_headlines h \
         CROSS JOIN LATERAL unnest(h.entities) AS e(entity) \
         GROUP BY e.entity, h.sentiment_label \
         ORDER BY COUNT(*) DESC, MIN(h.id) ASC, e.entity ASC, h.sentiment_label ASC \
         LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Count rows in `annotated_headlines`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_annotated_headlines(pool: &PgPool) -> Result<i64, DbError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM annotated_headlines")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
