use crate::config::ClusterConfig;
use crate::pipeline::error::Error;
use async_trait::async_trait;
use tokio_postgres::{Client, NoTls};
use tracing::{error, info};

/// The single seam between the statement executor and the warehouse wire.
/// One statement in flight at a time; the warehouse autocommits each
/// statement executed outside an explicit transaction.
#[async_trait]
pub trait Warehouse {
    async fn run(&self, request: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

#[async_trait]
impl Warehouse for Client {
    async fn run(&self, request: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.batch_execute(request).await.map_err(Into::into)
    }
}

// Connection parameters are bound by name: reordering keys in the
// configuration file cannot silently swap them.
pub fn pg_config(cluster: &ClusterConfig) -> tokio_postgres::Config {
    let mut config = tokio_postgres::Config::new();
    config
        .host(&cluster.host)
        .port(cluster.port)
        .dbname(&cluster.dbname)
        .user(&cluster.user)
        .password(&cluster.password);
    config
}

pub async fn connect(cluster: &ClusterConfig) -> Result<Client, Error> {
    info!(
        "connecting to {}:{}/{}",
        cluster.host, cluster.port, cluster.dbname
    );
    let (client, connection) = pg_config(cluster).connect(NoTls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            error!("connection error: {e}");
        }
    });
    Ok(client)
}
