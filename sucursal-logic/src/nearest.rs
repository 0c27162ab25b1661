use log::{debug, warn};
use serde::Serialize;

use crate::{
    error::SucursalError,
    geo::distance_km,
    position::Position,
    prelude::*,
    store::Store,
    sucursal::Sucursal,
};

/// The sucursal nearest to a point and how far away it is
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Closest {
    pub sucursal: Sucursal,
    pub distance_in_km: f64,
}

/// Scan every stored sucursal and return the one nearest to `point`.
///
/// Ties go to whichever came first in the store's listing order.
pub async fn find_closest<S: Store>(point: &Position, store: &S) -> Result<Closest, SucursalError> {
    let items = store
        .list_all()
        .await
        .context("Failed to list sucursales")?;

    if items.is_empty() {
        warn!("No sucursales are loaded in the store");
        return Err(SucursalError::NoRecords);
    }

    let sucursales = items
        .into_iter()
        .map(Sucursal::from_item)
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to decode stored sucursales")?;

    debug!(
        "Ranking {} sucursales against ({}, {})",
        sucursales.len(),
        point.latitude,
        point.longitude
    );

    closest_of(point, sucursales).ok_or(SucursalError::NoRecords)
}

fn closest_of(point: &Position, sucursales: impl IntoIterator<Item = Sucursal>) -> Option<Closest> {
    let mut closest: Option<Closest> = None;
    for sucursal in sucursales {
        let distance = distance_km(point, &sucursal);
        if closest
            .as_ref()
            .is_none_or(|best| distance < best.distance_in_km)
        {
            closest = Some(Closest {
                sucursal,
                distance_in_km: distance,
            });
        }
    }
    closest
}
