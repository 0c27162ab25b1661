use std::sync::Arc;

use log::{debug, info};

use crate::{
    error::SucursalError,
    nearest::{Closest, find_closest},
    position::Position,
    prelude::*,
    store::{Store, StoreError},
    sucursal::Sucursal,
    validation::Validator,
};

/// Create, fetch and rank sucursales held in a [Store]
pub struct SucursalService<S: Store> {
    store: Arc<S>,
    validator: Validator,
}

impl<S: Store> SucursalService<S> {
    pub fn new(store: Arc<S>, validator: Validator) -> Self {
        Self { store, validator }
    }

    /// Validate a raw create request and insert it, returning the new sucursal's id.
    ///
    /// Nothing is written unless the payload passes validation. Not safe to retry blindly, a
    /// second attempt at a write that landed fails with [SucursalError::AlreadyExists].
    pub async fn create(&self, raw: &[u8]) -> Result<String, SucursalError> {
        let sucursal = self.validator.validate_create(raw)?;
        let id = sucursal.id.clone();

        match self.store.create(sucursal.into_item()).await {
            Ok(()) => {
                info!("Created sucursal {id}");
                Ok(id)
            }
            Err(StoreError::ConditionFailed) => {
                debug!("Sucursal {id} already exists");
                Err(SucursalError::AlreadyExists(id))
            }
            Err(StoreError::Backend(why)) => Err(SucursalError::Internal(
                why.context(format!("Failed to create sucursal {id}")),
            )),
        }
    }

    /// Look up a sucursal by id, `None` when nothing is stored under it
    pub async fn get(&self, id: &str) -> Result<Option<Sucursal>, SucursalError> {
        let Some(item) = self
            .store
            .get(id)
            .await
            .with_context(|| format!("Failed to get sucursal {id}"))?
        else {
            debug!("Sucursal {id} does not exist");
            return Ok(None);
        };

        let sucursal =
            Sucursal::from_item(item).with_context(|| format!("Failed to decode sucursal {id}"))?;
        Ok(Some(sucursal))
    }

    /// The stored sucursal nearest to `point`
    pub async fn closest(&self, point: &Position) -> Result<Closest, SucursalError> {
        find_closest(point, self.store.as_ref()).await
    }
}
