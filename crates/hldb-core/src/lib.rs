pub mod app_config;
pub mod config;
pub mod headlines;
pub mod rows;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use headlines::{AnnotatedRecord, Annotation, SentimentLabel};
pub use rows::{parse_row, RawRow, FIELD_DELIMITER};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
