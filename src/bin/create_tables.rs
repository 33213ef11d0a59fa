use starload::config::{read_config, subscribe_logger};
use std::process::exit;
use tracing::error;

#[tokio::main]
async fn main() {
    let config = match read_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    };
    subscribe_logger(&config.logger);

    if let Err(e) = starload::create_tables(&config).await {
        error!("{}", e);
        exit(1);
    }
}
