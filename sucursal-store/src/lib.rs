mod attribute;
mod dynamo;

pub use dynamo::{DynamoConfig, DynamoStore};
