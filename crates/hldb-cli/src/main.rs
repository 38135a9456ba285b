mod headlines;
mod ingest;
mod query;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "hldb")]
#[command(version)]
#[command(about = "Headline ingestion, entity/sentiment annotation and queries")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Stage raw (date, headline) rows from a delimited file without annotation
    #[command(alias = "import-headlines")]
    Import {
        /// Path to the delimited dataset
        path: PathBuf,
        /// Rows processed concurrently (default: `HLDB_INGEST_MAX_CONCURRENT`)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        concurrency: Option<u32>,
        /// Parse the file and report what would be staged without writing
        #[arg(long)]
        dry_run: bool,
    },
    /// Extract entities and sentiment from the dataset and store the results
    #[command(alias = "extract-entities")]
    Annotate {
        /// Dataset to read (default: `HLDB_DATASET_PATH`)
        #[arg(long)]
        file: Option<PathBuf>,
        /// Rows processed concurrently (default: `HLDB_INGEST_MAX_CONCURRENT`)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        concurrency: Option<u32>,
        /// Print annotations without writing to the database
        #[arg(long)]
        dry_run: bool,
    },
    /// Rank (entity, sentiment label) pairs by mention count.
    ///
    /// The second grouping key is the headline's sentiment label, not a
    /// person/organization/place category.
    #[command(alias = "top100entitieswithtype")]
    TopEntities {
        /// Number of groups to show (default: `HLDB_TOP_ENTITIES_LIMIT`)
        #[arg(long, value_parser = clap::value_parser!(i64).range(1..))]
        limit: Option<i64>,
        /// Print JSON instead of the ranked list
        #[arg(long)]
        json: bool,
    },
    /// List every stored headline that mentions an entity (exact match)
    #[command(alias = "allheadlinesfor")]
    HeadlinesForEntity {
        /// Entity name, matched case-sensitively
        entity: String,
        /// Print JSON instead of the numbered list
        #[arg(long)]
        json: bool,
    },
    /// Database maintenance commands
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check that the database is reachable
    Ping,
    /// Apply pending migrations
    Migrate,
    /// Show how many staged and annotated headlines are stored
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        println!("hldb: no command given; run `hldb --help` for usage");
        return Ok(());
    };

    let config = hldb_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::info!(env = %config.env, command = command_name(&command), "starting hldb");

    if let Some(result) = run_without_store(&command, &config).await {
        return result;
    }

    let (pool, applied) = open_store(&config).await?;
    let result = run_with_store(&pool, &config, applied, command).await;
    // Release connections on every exit path, including failed commands.
    pool.close().await;
    result
}

/// Connect to the store and bring its schema up to date. Returns the pool
/// and the number of migrations applied on the way.
async fn open_store(config: &hldb_core::AppConfig) -> anyhow::Result<(sqlx::PgPool, usize)> {
    let pool_config = hldb_db::PoolConfig::from_app_config(config);
    let pool = hldb_db::connect_pool(&config.database_url, pool_config).await?;
    let applied = match hldb_db::run_migrations(&pool).await {
        Ok(applied) => applied,
        Err(e) => {
            pool.close().await;
            return Err(e.into());
        }
    };
    tracing::debug!(applied, "database ready");
    Ok((pool, applied))
}

/// Dry runs work from the dataset alone and never open a connection.
async fn run_without_store(
    command: &Commands,
    config: &hldb_core::AppConfig,
) -> Option<anyhow::Result<()>> {
    match command {
        Commands::Import {
            path,
            dry_run: true,
            ..
        } => Some(headlines::preview_import(path).await),
        Commands::Annotate {
            file,
            dry_run: true,
            ..
        } => {
            let path = file.as_deref().unwrap_or(config.dataset_path.as_path());
            Some(headlines::preview_annotate(path).await)
        }
        _ => None,
    }
}

async fn run_with_store(
    pool: &sqlx::PgPool,
    config: &hldb_core::AppConfig,
    applied_migrations: usize,
    command: Commands,
) -> anyhow::Result<()> {
    let concurrency =
        |flag: Option<u32>| flag.map_or(config.ingest_max_concurrent, |n| n as usize);

    match command {
        Commands::Import {
            path, concurrency: c, ..
        } => headlines::run_import(pool, &path, concurrency(c)).await,
        Commands::Annotate {
            file,
            concurrency: c,
            ..
        } => {
            let path = file.unwrap_or_else(|| config.dataset_path.clone());
            headlines::run_annotate(pool, &path, concurrency(c)).await
        }
        Commands::TopEntities { limit, json } => {
            let limit = limit.unwrap_or(config.top_entities_limit);
            query::run_top_entities(pool, limit, json).await
        }
        Commands::HeadlinesForEntity { entity, json } => {
            query::run_headlines_for_entity(pool, &entity, json).await
        }
        Commands::Db { command } => run_db_command(pool, applied_migrations, command).await,
    }
}

async fn run_db_command(
    pool: &sqlx::PgPool,
    applied_migrations: usize,
    command: DbCommands,
) -> anyhow::Result<()> {
    match command {
        DbCommands::Ping => {
            hldb_db::ping(pool).await?;
            println!("database connection ok");
        }
        // `open_store` already ran the migrator for this invocation.
        DbCommands::Migrate => println!("{}", migrate_summary(applied_migrations)),
        DbCommands::Status => {
            let staged = hldb_db::count_staged_headlines(pool).await?;
            let annotated = hldb_db::count_annotated_headlines(pool).await?;
            println!("{:<22}{staged}", "staged headlines:");
            println!("{:<22}{annotated}", "annotated headlines:");
        }
    }
    Ok(())
}

fn migrate_summary(applied: usize) -> String {
    match applied {
        0 => "migrations up to date (nothing to apply)".to_string(),
        1 => "applied 1 migration".to_string(),
        n => format!("applied {n} migrations"),
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Import { .. } => "import",
        Commands::Annotate { .. } => "annotate",
        Commands::TopEntities { .. } => "top-entities",
        Commands::HeadlinesForEntity { .. } => "headlines-for-entity",
        Commands::Db { command: DbCommands::Ping } => "db ping",
        Commands::Db { command: DbCommands::Migrate } => "db migrate",
        Commands::Db { command: DbCommands::Status } => "db status",
    }
}

/// Seconds since `started`, formatted for the elapsed-time summaries.
pub(crate) fn elapsed_secs(started: Instant) -> String {
    format!("{:.3}", started.elapsed().as_secs_f64())
}
