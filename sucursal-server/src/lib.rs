mod config;
mod response;
mod routes;

use log::{error, info};
use tokio::net::TcpListener;

use sucursal_logic::{Store, SucursalService, prelude::*};

pub use config::Args;
pub use response::{
    ApiError, CREATED, Created, ErrorMsg, ID_EXISTS, ID_NOT_FOUND, INTERNAL_SERVER_ERROR,
    INVALID_REQUEST_BODY, NO_SUCURSALES,
};
pub use routes::router;

/// Serve the API on `listener` until Ctrl-C
pub async fn serve<S: Store + 'static>(listener: TcpListener, service: SucursalService<S>) -> Result {
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Error while running server")
}

async fn shutdown_signal() {
    if let Err(why) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl-C, the server will only stop when killed: {why}");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
