mod error;
mod geo;
mod memory;
mod nearest;
mod position;
mod service;
mod store;
mod sucursal;
mod validation;

pub use error::{Coordinate, SucursalError};
pub use geo::distance_km;
pub use memory::MemoryStore;
pub use nearest::{Closest, find_closest};
pub use position::Position;
pub use service::SucursalService;
pub use store::{KEY_ATTRIBUTE, RawItem, Store, StoreError};
pub use sucursal::Sucursal;
pub use validation::{RuleKind, VALIDATION_HEADER, ValidationContext, ValidationReport, Validator};

pub mod prelude {
    use anyhow::Error as AnyhowError;
    use std::result::Result as StdResult;
    pub type Result<T = (), E = AnyhowError> = StdResult<T, E>;
    pub use anyhow::Context;
}
