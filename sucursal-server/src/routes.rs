use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
};
use log::debug;

use sucursal_logic::{Closest, Position, Store, Sucursal, SucursalError, SucursalService};

use crate::response::{ApiError, Created};

type Service<S> = State<Arc<SucursalService<S>>>;
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Routes for creating, fetching and locating sucursales
pub fn router<S: Store + 'static>(service: SucursalService<S>) -> Router {
    Router::new()
        .route("/sucursal", post(create_sucursal::<S>))
        .route("/sucursal/{id}", get(get_sucursal::<S>))
        .route("/sucursal/{lat}/{lon}", get(get_closest_sucursal::<S>))
        .with_state(Arc::new(service))
}

async fn create_sucursal<S: Store>(State(service): Service<S>, body: Bytes) -> ApiResult<Created> {
    let id = service.create(&body).await?;
    Ok(Json(Created::new(id)))
}

async fn get_sucursal<S: Store>(
    State(service): Service<S>,
    Path(id): Path<String>,
) -> ApiResult<Sucursal> {
    debug!("Got the following id from path variables: {id}");
    match service.get(&id).await? {
        Some(sucursal) => Ok(Json(sucursal)),
        None => Err(SucursalError::NotFound(id).into()),
    }
}

async fn get_closest_sucursal<S: Store>(
    State(service): Service<S>,
    Path((lat, lon)): Path<(String, String)>,
) -> ApiResult<Closest> {
    let point = Position::parse(&lat, &lon)?;
    let closest = service.closest(&point).await?;
    debug!(
        "Closest sucursal to ({lat}, {lon}) is {} at {}km",
        closest.sucursal.id, closest.distance_in_km
    );
    Ok(Json(closest))
}
