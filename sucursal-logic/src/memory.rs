use std::sync::Mutex;

use anyhow::anyhow;

use crate::store::{KEY_ATTRIBUTE, RawItem, Store, StoreError, item_key};

/// Store that keeps items in memory, in insertion order. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<Vec<RawItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load items, `list_all` will return them in this order. Keys are not checked.
    pub fn with_items(items: impl IntoIterator<Item = RawItem>) -> Self {
        Self {
            items: Mutex::new(items.into_iter().collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Store for MemoryStore {
    async fn get(&self, id: &str) -> Result<Option<RawItem>, StoreError> {
        Ok(self
            .items
            .lock()
            .unwrap()
            .iter()
            .find(|item| item_key(item) == Some(id))
            .cloned())
    }

    async fn create(&self, item: RawItem) -> Result<(), StoreError> {
        let key = item_key(&item)
            .ok_or_else(|| anyhow!("Item has no string \"{KEY_ATTRIBUTE}\" attribute"))?
            .to_string();

        let mut items = self.items.lock().unwrap();
        if items.iter().any(|existing| item_key(existing) == Some(&key)) {
            Err(StoreError::ConditionFailed)
        } else {
            items.push(item);
            Ok(())
        }
    }

    async fn list_all(&self) -> Result<Vec<RawItem>, StoreError> {
        Ok(self.items.lock().unwrap().clone())
    }
}
