use crate::pipeline::database::Warehouse;
use crate::pipeline::error::Error;
use crate::pipeline::stage::{unmet_requirement, Statement};
use chrono::Local;
use std::time::Duration;
use tokio::time::timeout;
use tracing::info;

pub mod database;
pub mod error;
pub mod stage;

/// Executes a statement list strictly in order against a single warehouse
/// session. The first failure aborts the remaining statements of the step;
/// everything executed before it is already committed and stays committed.
pub async fn execute_step<W: Warehouse>(
    warehouse: &W,
    step: &str,
    statements: &[Statement],
    statement_timeout: Option<Duration>,
) -> Result<(), Error> {
    if let Some((statement, requirement)) = unmet_requirement(statements) {
        return Err(Error::Dependency {
            step: step.to_string(),
            name: statement.name.to_string(),
            requirement: requirement.to_string(),
        });
    }

    info!("{} step started with {} statements", step, statements.len());
    let step_start = Local::now().timestamp_millis();

    for statement in statements {
        info!("statement '{}' started", statement.name);
        let start = Local::now().timestamp_millis();

        let execution = warehouse.run(&statement.sql);
        let result = match statement_timeout {
            Some(limit) => timeout(limit, execution).await.map_err(|_| Error::Timeout {
                step: step.to_string(),
                name: statement.name.to_string(),
                timeout_secs: limit.as_secs_f32(),
            })?,
            None => execution.await,
        };

        result.map_err(|source| Error::Statement {
            step: step.to_string(),
            name: statement.name.to_string(),
            source,
        })?;

        let duration = Local::now().timestamp_millis() - start;
        info!(
            "statement '{}' completed in {} s",
            statement.name,
            duration as f32 / 1000.0
        );
    }

    let duration = Local::now().timestamp_millis() - step_start;
    info!(
        "{} step completed {} statements in {} s",
        step,
        statements.len(),
        duration as f32 / 1000.0
    );

    Ok(())
}
