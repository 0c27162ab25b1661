use std::time::Duration;

use aws_config::{BehaviorVersion, Region, timeout::TimeoutConfig};
use aws_sdk_dynamodb::{Client, error::ProvideErrorMetadata, types::AttributeValue};
use log::debug;

use sucursal_logic::{KEY_ATTRIBUTE, RawItem, Store, StoreError, prelude::*};

use crate::attribute::{from_attributes, to_attributes};

#[derive(Debug, Clone)]
pub struct DynamoConfig {
    pub table_name: String,
    pub region: String,
    /// Defaults to the public regional endpoint
    pub endpoint: Option<String>,
    pub timeout: Duration,
}

impl DynamoConfig {
    pub fn new(table_name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            region: region.into(),
            endpoint: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// [Store] backed by a DynamoDB table keyed on [KEY_ATTRIBUTE]
pub struct DynamoStore {
    client: Client,
    table: String,
}

/// Wrap an SDK failure that isn't a condition check as a backend error
fn backend<E>(operation: &str, err: E) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    debug!("{operation} failed with code {:?}", err.code());
    anyhow::Error::new(err)
        .context(format!("{operation} failed"))
        .into()
}

impl DynamoStore {
    /// Build a client from the standard AWS configuration chain.
    ///
    /// Credentials are resolved lazily on the first request, from the environment, the shared
    /// profile files, or the container and instance roles, in that order. Requests are always
    /// signed, so local emulators need some placeholder credentials set too.
    pub async fn connect(config: DynamoConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region))
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(config.timeout)
                    .build(),
            );
        if let Some(endpoint) = &config.endpoint {
            debug!("Using DynamoDB endpoint {endpoint}");
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::from_client(Client::new(&sdk_config), config.table_name)
    }

    pub fn from_client(client: Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

impl Store for DynamoStore {
    async fn get(&self, id: &str) -> Result<Option<RawItem>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key(KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|err| backend("GetItem", err.into_service_error()))?;

        match output.item() {
            Some(item) => Ok(Some(from_attributes(item)?)),
            None => Ok(None),
        }
    }

    async fn create(&self, item: RawItem) -> Result<(), StoreError> {
        let res = self
            .client
            .put_item()
            .table_name(&self.table)
            .set_item(Some(to_attributes(&item)))
            .condition_expression("attribute_not_exists(#key)")
            .expression_attribute_names("#key", KEY_ATTRIBUTE)
            .send()
            .await;

        match res.map_err(|err| err.into_service_error()) {
            Ok(_) => Ok(()),
            Err(err) if err.is_conditional_check_failed_exception() => {
                Err(StoreError::ConditionFailed)
            }
            Err(err) => Err(backend("PutItem", err)),
        }
    }

    async fn list_all(&self) -> Result<Vec<RawItem>, StoreError> {
        let mut items = Vec::new();
        let mut start_key = None;

        loop {
            let page = self
                .client
                .scan()
                .table_name(&self.table)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|err| backend("Scan", err.into_service_error()))?;

            debug!("Scan page returned {} items", page.items().len());

            for item in page.items() {
                items.push(from_attributes(item)?);
            }

            match page.last_evaluated_key() {
                Some(key) => start_key = Some(key.clone()),
                None => break,
            }
        }

        Ok(items)
    }
}
