use std::{net::SocketAddr, time::Duration};

use clap::Parser;

use sucursal_store::DynamoConfig;

#[derive(Debug, Clone, Parser)]
#[command(version, about = "HTTP service for sucursal records and nearest-location lookups")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:80")]
    pub bind: SocketAddr,
    /// DynamoDB table holding the sucursales
    #[arg(long, env = "TABLE_NAME", default_value = "sucursal_table")]
    pub table_name: String,
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,
    /// Override the DynamoDB endpoint, e.g. for a local emulator
    #[arg(long, env = "DYNAMODB_ENDPOINT")]
    pub endpoint: Option<String>,
    /// Timeout for each request to the store
    #[arg(long, env = "STORE_TIMEOUT_SECS", default_value_t = 10)]
    pub store_timeout_secs: u64,
    /// Keep sucursales in memory instead of DynamoDB, they are lost on exit
    #[arg(long)]
    pub memory: bool,
}

impl Args {
    pub fn dynamo_config(&self) -> DynamoConfig {
        DynamoConfig {
            table_name: self.table_name.clone(),
            region: self.region.clone(),
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.store_timeout_secs),
        }
    }
}
