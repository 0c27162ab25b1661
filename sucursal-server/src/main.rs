use std::sync::Arc;

use clap::Parser;
use log::{info, warn};
use tokio::net::TcpListener;

use sucursal_logic::{MemoryStore, SucursalService, Validator, prelude::*};
use sucursal_server::{Args, serve};
use sucursal_store::DynamoStore;

#[tokio::main]
async fn main() -> Result {
    colog::init();

    let args = Args::parse();

    info!(
        "Starting sucursal server {}",
        env!("CARGO_PKG_VERSION")
    );

    let listener = TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;

    let validator = Validator::default();

    if args.memory {
        warn!("Using the in-memory store, sucursales will be lost on exit");
        let service = SucursalService::new(Arc::new(MemoryStore::new()), validator);
        serve(listener, service).await
    } else {
        let store = DynamoStore::connect(args.dynamo_config()).await;
        info!("Using DynamoDB table {}", store.table());
        let service = SucursalService::new(Arc::new(store), validator);
        serve(listener, service).await
    }
}
