use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::RawItem;

/// A branch location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sucursal {
    /// Unique key in the store
    pub id: String,
    pub address: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Sucursal {
    pub fn new(id: impl Into<String>, address: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            latitude: lat,
            longitude: lon,
        }
    }

    pub fn from_item(item: RawItem) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(item))
    }

    pub fn into_item(self) -> RawItem {
        let mut item = RawItem::new();
        item.insert("id".into(), Value::from(self.id));
        item.insert("address".into(), Value::from(self.address));
        item.insert("latitude".into(), Value::from(self.latitude));
        item.insert("longitude".into(), Value::from(self.longitude));
        item
    }
}
