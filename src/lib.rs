use crate::config::Config;
use crate::pipeline::error::Error;
use crate::pipeline::execute_step;
use crate::pipeline::stage::{copy, insert, schema};
use std::time::Duration;
use tracing::info;

pub mod config;
pub mod pipeline;

fn statement_timeout(config: &Config) -> Option<Duration> {
    config.cluster.statement_timeout.map(Duration::from_secs)
}

/// Rebuilds the warehouse schema: drop every table, then recreate the star
/// schema in reference order. Safe to run between schema revisions without
/// manual cleanup.
pub async fn create_tables(config: &Config) -> Result<(), Error> {
    let client = pipeline::database::connect(&config.cluster).await?;
    let timeout = statement_timeout(config);

    execute_step(&client, "drop", &schema::drop_statements(), timeout).await?;
    execute_step(&client, "create", &schema::create_statements(), timeout).await?;

    info!("schema rebuilt");
    Ok(())
}

/// Runs the load-and-transform pipeline: COPY raw data from object storage
/// into staging, then INSERT-SELECT into the analytics tables.
pub async fn run_etl(config: &Config) -> Result<(), Error> {
    let client = pipeline::database::connect(&config.cluster).await?;
    let timeout = statement_timeout(config);

    execute_step(&client, "copy", &copy::statements(&config.storage), timeout).await?;
    execute_step(&client, "insert", &insert::statements(), timeout).await?;

    info!("etl completed");
    Ok(())
}
