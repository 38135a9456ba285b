use std::time::Instant;

use hldb_core::SentimentLabel;
use hldb_db::{AnnotatedHeadlineRow, EntitySentimentCount};
use serde::Serialize;
use sqlx::PgPool;

use crate::elapsed_secs;

/// JSON shape for one headline of `headlines-for-entity --json`.
#[derive(Debug, Serialize)]
struct HeadlineOutput {
    date: String,
    headline: String,
    entities: Vec<String>,
    sentiment_label: SentimentLabel,
}

impl TryFrom<AnnotatedHeadlineRow> for HeadlineOutput {
    type Error = hldb_db::DbError;

    fn try_from(row: AnnotatedHeadlineRow) -> Result<Self, Self::Error> {
        let sentiment_label = row.label()?;
        Ok(Self {
            date: row.date,
            headline: row.headline,
            entities: row.entities,
            sentiment_label,
        })
    }
}

pub(crate) async fn run_top_entities(pool: &PgPool, limit: i64, json: bool) -> anyhow::Result<()> {
    let started = Instant::now();
    let groups = hldb_db::top_entity_sentiment_counts(pool, limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        tracing::info!(groups = groups.len(), elapsed_secs = %elapsed_secs(started), "ranking retrieved");
        return Ok(());
    }

    for (index, group) in groups.iter().enumerate() {
        println!("{}", rank_line(index + 1, group));
    }
    println!(
        "Top {limit} Entities with Types retrieved in {} seconds.",
        elapsed_secs(started)
    );
    Ok(())
}

pub(crate) async fn run_headlines_for_entity(
    pool: &PgPool,
    entity: &str,
    json: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();
    let rows = hldb_db::find_headlines_by_entity(pool, entity).await?;

    if json {
        let output = rows
            .into_iter()
            .map(HeadlineOutput::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        println!("{}", serde_json::to_string_pretty(&output)?);
        tracing::info!(matches = output.len(), elapsed_secs = %elapsed_secs(started), "headlines retrieved");
        return Ok(());
    }

    println!("Headlines for Entity: {entity}");
    for (index, row) in rows.iter().enumerate() {
        println!("{}. {}", index + 1, row.headline);
    }
    println!(
        "All headlines for {entity} retrieved in {} seconds.",
        elapsed_secs(started)
    );
    Ok(())
}

fn rank_line(rank: usize, group: &EntitySentimentCount) -> String {
    format!(
        "{rank}. Entity: {} ({}), Count: {}",
        group.entity, group.sentiment_label, group.count
    )
}
