use crate::pipeline::error::Error;
use config;
use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;
use std::path::Path;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

const CONFIG_FILE_PATH: &str = "starload.toml";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub cluster: ClusterConfig,
    pub storage: StorageConfig,
    pub logger: LoggerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ClusterConfig {
    pub host: String,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub port: u16,
    pub statement_timeout: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub log_data: String,
    pub log_jsonpath: String,
    pub song_data: String,
    pub iam_role: String,
    pub region: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggerConfig {
    pub level: String,
    pub directory: Option<String>,
    pub rotation: Option<String>,
}

fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    config::Config::builder()
        // cluster
        .set_default("cluster.port", 5439)?
        // storage
        .set_default("storage.region", "us-west-2")?
        // logger
        .set_default("logger.level", "INFO")
}

pub fn read_config() -> Result<Config, Error> {
    let mut config = defaults()?;

    let config_file = Path::new(CONFIG_FILE_PATH);
    if config_file.exists() {
        config = config.add_source(config::File::with_name(CONFIG_FILE_PATH));
    }

    let config = config.build()?;

    Ok(config.try_deserialize()?)
}

pub fn subscribe_logger(config: &LoggerConfig) {
    let level = match config.level.to_uppercase().as_str() {
        "TRACE" => Level::TRACE,
        "DEBUG" => Level::DEBUG,
        "INFO" => Level::INFO,
        "WARN" => Level::WARN,
        "ERROR" => Level::ERROR,
        level => panic!("Unknown logger level '{level}'"),
    };

    if let Some(directory) = &config.directory {
        let rotation = if let Some(rotation) = &config.rotation {
            match rotation.to_uppercase().as_str() {
                "MINUTELY" => Rotation::MINUTELY,
                "HOURLY" => Rotation::HOURLY,
                "DAILY" => Rotation::DAILY,
                rotation => panic!("Unknown log rotation '{rotation}'"),
            }
        } else {
            Rotation::DAILY
        };
        let appender = RollingFileAppender::new(rotation, directory, "starload.log");
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(appender)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }
}
