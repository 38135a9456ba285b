use std::path::Path;
use std::time::Instant;

use hldb_core::AnnotatedRecord;
use hldb_nlp::annotate_headline;
use sqlx::PgPool;

use crate::elapsed_secs;
use crate::ingest::{ingest_rows, open_lines};

/// Stage every parseable row of `path` without annotation.
pub(crate) async fn run_import(
    pool: &PgPool,
    path: &Path,
    max_concurrent: usize,
) -> anyhow::Result<()> {
    let started = Instant::now();
    tracing::info!(path = %path.display(), max_concurrent, "staging headlines");

    let lines = open_lines(path).await?;
    let written = ingest_rows(
        lines,
        max_concurrent,
        |row| async move {
            hldb_db::insert_staged_headline(pool, &row).await?;
            Ok(())
        },
        |_| {},
    )
    .await?;

    tracing::info!(rows = written, "staging complete");
    println!(
        "Data imported and stored successfully in {} seconds.",
        elapsed_secs(started)
    );
    Ok(())
}

/// Annotate every parseable row of `path` and persist the results, printing
/// the running count as rows are stored.
pub(crate) async fn run_annotate(
    pool: &PgPool,
    path: &Path,
    max_concurrent: usize,
) -> anyhow::Result<()> {
    let started = Instant::now();
    tracing::info!(path = %path.display(), max_concurrent, "annotating headlines");

    let lines = open_lines(path).await?;
    let written = ingest_rows(
        lines,
        max_concurrent,
        |row| async move {
            let annotation = annotate_headline(&row.headline);
            let record = AnnotatedRecord::new(row, annotation);
            let id = hldb_db::insert_annotated_headline(pool, &record).await?;
            tracing::debug!(
                id,
                entities = record.entities.len(),
                sentiment = %record.sentiment_label,
                "stored annotated headline"
            );
            Ok(())
        },
        |count| println!("{count}"),
    )
    .await?;

    tracing::info!(rows = written, "annotation complete");
    println!(
        "Entities extracted and sentiment analyzed in {} seconds.",
        elapsed_secs(started)
    );
    Ok(())
}

pub(crate) async fn preview_import(path: &Path) -> anyhow::Result<()> {
    let lines = open_lines(path).await?;
    let rows = ingest_rows(lines, 1, |_row| async { Ok(()) }, |_| {}).await?;
    println!("dry run: {rows} rows would be staged from {}", path.display());
    Ok(())
}

/// Print each row's annotation as `label<TAB>entities<TAB>headline`.
pub(crate) async fn preview_annotate(path: &Path) -> anyhow::Result<()> {
    let lines = open_lines(path).await?;
    let rows = ingest_rows(
        lines,
        1,
        |row| async move {
            let annotation = annotate_headline(&row.headline);
            println!("{}", preview_line(&AnnotatedRecord::new(row, annotation)));
            Ok(())
        },
        |_| {},
    )
    .await?;
    println!("dry run: {rows} rows annotated, nothing stored");
    Ok(())
}

fn preview_line(record: &AnnotatedRecord) -> String {
    format!(
        "{}\t{}\t{}",
        record.sentiment_label,
        record.entities.join("; "),
        record.headline
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use hldb_core::{Annotation, RawRow, SentimentLabel};

    #[test]
    fn preview_line_is_tab_separated() {
        let record = AnnotatedRecord::new(
            RawRow {
                date: "20030219".to_string(),
                headline: "Qantas cuts jobs in Sydney".to_string(),
            },
            Annotation {
                entities: vec!["Qantas".to_string(), "Sydney".to_string()],
                sentiment: SentimentLabel::Negative,
            },
        );
        assert_eq!(
            preview_line(&record),
            "negative\tQantas; Sydney\tQantas cuts jobs in Sydney"
        );
    }

    #[test]
    fn preview_line_with_no_entities_keeps_empty_column() {
        let record = AnnotatedRecord::new(
            RawRow {
                date: "d".to_string(),
                headline: "rain expected".to_string(),
            },
            Annotation {
                entities: Vec::new(),
                sentiment: SentimentLabel::Neutral,
            },
        );
        assert_eq!(preview_line(&record), "neutral\t\train expected");
    }
}
