use serde_json::{Map, Value};
use thiserror::Error;

/// A single item as the store hands it back, before it is decoded into a [crate::Sucursal]
pub type RawItem = Map<String, Value>;

/// Attribute every item is keyed on
pub const KEY_ATTRIBUTE: &str = "id";

#[derive(Error, Debug)]
pub enum StoreError {
    /// A conditional write was rejected because an item with the same key already exists
    #[error("Conditional check failed, an item with this key already exists")]
    ConditionFailed,
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Key-value storage the service reads sucursales from and writes them to.
///
/// Implementations must be safe to share between concurrent requests.
pub trait Store: Send + Sync {
    /// Point lookup by id, `None` if nothing is stored under that key
    fn get(&self, id: &str)
    -> impl Future<Output = Result<Option<RawItem>, StoreError>> + Send;
    /// Insert a new item, must fail with [StoreError::ConditionFailed] rather than overwrite
    /// an item that already has the same [KEY_ATTRIBUTE]
    fn create(&self, item: RawItem) -> impl Future<Output = Result<(), StoreError>> + Send;
    /// Every stored item. Implementations backed by a paginated API are expected to walk all
    /// the pages before returning.
    fn list_all(&self) -> impl Future<Output = Result<Vec<RawItem>, StoreError>> + Send;
}

/// Read the key of an item, if it has a string one
pub(crate) fn item_key(item: &RawItem) -> Option<&str> {
    item.get(KEY_ATTRIBUTE).and_then(Value::as_str)
}
