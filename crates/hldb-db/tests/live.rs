//! Live integration tests for hldb-db using `#[sqlx::test]`.
//!
//! Each test gets a fresh, fully-migrated Postgres database spun up by the
//! sqlx test harness, which needs `DATABASE_URL` pointing at a server it can
//! create databases on.

use hldb_core::{AnnotatedRecord, RawRow, SentimentLabel};
use hldb_db::{
    count_annotated_headlines, count_staged_headlines, find_headlines_by_entity,
    insert_annotated_headline, insert_staged_headline, top_entity_sentiment_counts,
    EntitySentimentCount,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn record(date: &str, headline: &str, entities: &[&str], label: SentimentLabel) -> AnnotatedRecord {
    AnnotatedRecord {
        date: date.to_string(),
        headline: headline.to_string(),
        entities: entities.iter().map(ToString::to_string).collect(),
        sentiment_label: label,
    }
}

async fn insert_all(pool: &PgPool, records: &[AnnotatedRecord]) {
    for r in records {
        insert_annotated_headline(pool, r)
            .await
            .unwrap_or_else(|e| panic!("insert failed for '{}': {e}", r.headline));
    }
}

fn group(entity: &str, label: &str, count: i64) -> EntitySentimentCount {
    EntitySentimentCount {
        entity: entity.to_string(),
        sentiment_label: label.to_string(),
        count,
    }
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn ranking_groups_by_entity_and_sentiment_label(pool: PgPool) {
    use SentimentLabel::{Negative, Positive};

    insert_all(
        &pool,
        &[
            record("2020-01-01", "Acme wins award", &["Acme"], Positive),
            record("2020-01-02", "Acme faces lawsuit", &["Acme"], Negative),
            record("2020-01-03", "Acme praised", &["Acme"], Positive),
            record("2020-01-04", "Acme sued again", &["Acme"], Negative),
            record("2020-01-05", "Acme thrilled", &["Acme"], Positive),
        ],
    )
    .await;

    let ranked = top_entity_sentiment_counts(&pool, 100).await.unwrap();
    assert_eq!(
        ranked,
        vec![group("Acme", "positive", 3), group("Acme", "negative", 2)]
    );
}

#[sqlx::test(migrations = "../../migrations")]
async fn ranking_counts_every_mention_and_respects_limit(pool: PgPool) {
    use SentimentLabel::{Neutral, Positive};

    insert_all(
        &pool,
        &[
            record("d1", "a", &["Sydney", "Qantas"], Neutral),
            record("d2", "b", &["Sydney", "Sydney"], Neutral),
            record("d3", "c", &["Qantas"], Positive),
            record("d4", "d", &[], Positive),
        ],
    )
    .await;

    let ranked = top_entity_sentiment_counts(&pool, 100).await.unwrap();
    assert_eq!(
        ranked,
        vec![
            group("Sydney", "neutral", 3),
            group("Qantas", "neutral", 1),
            group("Qantas", "positive", 1),
        ]
    );

    let top_one = top_entity_sentiment_counts(&pool, 1).await.unwrap();
    assert_eq!(top_one, vec![group("Sydney", "neutral", 3)]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn ranking_is_idempotent(pool: PgPool) {
    use SentimentLabel::{Negative, Neutral, Positive};

    insert_all(
        &pool,
        &[
            record("d1", "a", &["Perth", "Telstra"], Neutral),
            record("d2", "b", &["Hobart"], Positive),
            record("d3", "c", &["Telstra", "Hobart"], Negative),
        ],
    )
    .await;

    let first = top_entity_sentiment_counts(&pool, 100).await.unwrap();
    let second = top_entity_sentiment_counts(&pool, 100).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 5);
}

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn lookup_returns_matching_headlines_in_insertion_order(pool: PgPool) {
    use SentimentLabel::{Negative, Positive};

    insert_all(
        &pool,
        &[
            record("2020-01-01", "Acme opens new office", &["Acme"], Positive),
            record("2020-01-01", "Globex hires", &["Globex"], Positive),
            record("2020-01-02", "Acme faces lawsuit", &["Acme"], Negative),
        ],
    )
    .await;

    let rows = find_headlines_by_entity(&pool, "Acme").await.unwrap();
    let headlines: Vec<&str> = rows.iter().map(|r| r.headline.as_str()).collect();
    assert_eq!(headlines, vec!["Acme opens new office", "Acme faces lawsuit"]);
    assert_eq!(rows[1].label().unwrap(), Negative);
}

#[sqlx::test(migrations = "../../migrations")]
async fn lookup_is_exact_and_case_sensitive(pool: PgPool) {
    insert_all(
        &pool,
        &[record(
            "d1",
            "Acme Corp grows",
            &["Acme Corp"],
            SentimentLabel::Positive,
        )],
    )
    .await;

    assert!(find_headlines_by_entity(&pool, "Acme").await.unwrap().is_empty());
    assert!(find_headlines_by_entity(&pool, "acme corp").await.unwrap().is_empty());
    assert_eq!(
        find_headlines_by_entity(&pool, "Acme Corp").await.unwrap().len(),
        1
    );
}

// ---------------------------------------------------------------------------
// Inserts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn identical_inserts_are_not_deduplicated(pool: PgPool) {
    let r = record("d1", "same headline", &["Sydney"], SentimentLabel::Neutral);
    insert_all(&pool, &[r.clone(), r]).await;

    assert_eq!(count_annotated_headlines(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn staged_rows_live_apart_from_annotated_rows(pool: PgPool) {
    let row = RawRow {
        date: "20030219".to_string(),
        headline: "aba decides against community broadcasting licence".to_string(),
    };
    insert_staged_headline(&pool, &row).await.unwrap();
    insert_staged_headline(&pool, &row).await.unwrap();

    assert_eq!(count_staged_headlines(&pool).await.unwrap(), 2);
    assert_eq!(count_annotated_headlines(&pool).await.unwrap(), 0);

    let (entities, label): (Vec<String>, Option<String>) = sqlx::query_as(
        "SELECT entities, sentiment_label FROM staged_headlines ORDER BY id LIMIT 1",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert!(entities.is_empty());
    assert!(label.is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn ping_succeeds_on_live_pool(pool: PgPool) {
    hldb_db::ping(&pool).await.unwrap();
}
