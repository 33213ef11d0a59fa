use config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] tokio_postgres::Error),
    #[error("Statement '{name}' failed during {step} step: {source}")]
    Statement {
        step: String,
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("Statement '{name}' timed out during {step} step after {timeout_secs} s")]
    Timeout {
        step: String,
        name: String,
        timeout_secs: f32,
    },
    #[error("Statement '{name}' requires '{requirement}' earlier in the {step} step")]
    Dependency {
        step: String,
        name: String,
        requirement: String,
    },
}
