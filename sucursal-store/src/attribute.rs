//! Conversion between plain JSON and DynamoDB's typed attribute values.
//!
//! Numbers travel as strings on both sides of the wire, so `N` is parsed back into a JSON number
//! rather than kept as text.

use std::collections::HashMap;

use anyhow::bail;
use aws_sdk_dynamodb::types::AttributeValue;
use serde_json::{Number, Value};

use sucursal_logic::{RawItem, prelude::*};

pub type Attributes = HashMap<String, AttributeValue>;

pub fn to_attribute(value: &Value) -> AttributeValue {
    match value {
        Value::Null => AttributeValue::Null(true),
        Value::Bool(b) => AttributeValue::Bool(*b),
        Value::Number(n) => AttributeValue::N(n.to_string()),
        Value::String(s) => AttributeValue::S(s.clone()),
        Value::Array(values) => AttributeValue::L(values.iter().map(to_attribute).collect()),
        Value::Object(map) => AttributeValue::M(to_attributes(map)),
    }
}

/// Convert a whole item into the `Item` map PutItem expects
pub fn to_attributes(item: &RawItem) -> Attributes {
    item.iter()
        .map(|(name, value)| (name.clone(), to_attribute(value)))
        .collect()
}

fn parse_number(raw: &str) -> Result<Value> {
    raw.parse::<Number>()
        .map(Value::Number)
        .with_context(|| format!("Invalid number attribute {raw:?}"))
}

pub fn from_attribute(attribute: &AttributeValue) -> Result<Value> {
    Ok(match attribute {
        AttributeValue::S(s) => Value::from(s.as_str()),
        AttributeValue::N(n) => parse_number(n)?,
        AttributeValue::Bool(b) => Value::Bool(*b),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(values) => Value::Array(
            values
                .iter()
                .map(from_attribute)
                .collect::<Result<Vec<_>>>()?,
        ),
        AttributeValue::M(map) => Value::Object(from_attributes(map)?),
        AttributeValue::Ss(values) => Value::from(values.clone()),
        AttributeValue::Ns(values) => Value::Array(
            values
                .iter()
                .map(|n| parse_number(n))
                .collect::<Result<Vec<_>>>()?,
        ),
        // Sucursales never hold binary data
        AttributeValue::B(_) | AttributeValue::Bs(_) => bail!("Binary attributes are not supported"),
        other => bail!("Unsupported attribute type {other:?}"),
    })
}

/// Convert an `Item` as returned by GetItem or Scan back into plain JSON
pub fn from_attributes(item: &Attributes) -> Result<RawItem> {
    item.iter()
        .map(|(name, attribute)| {
            from_attribute(attribute)
                .with_context(|| format!("In attribute {name}"))
                .map(|value| (name.clone(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use aws_sdk_dynamodb::primitives::Blob;
    use serde_json::json;

    use super::*;

    fn obj(value: Value) -> RawItem {
        value.as_object().cloned().unwrap()
    }

    fn attrs<const N: usize>(pairs: [(&str, AttributeValue); N]) -> Attributes {
        pairs
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect()
    }

    #[test]
    fn test_sucursal_item() {
        let item = obj(json!({
            "id": "5b1a8f4e-2c4e-4b8a-9d6e-1f0a2b3c4d5e",
            "address": "123 Fake St",
            "latitude": 10.4,
            "longitude": -104.5,
        }));

        let attributes = to_attributes(&item);
        assert_eq!(
            attributes,
            attrs([
                (
                    "id",
                    AttributeValue::S("5b1a8f4e-2c4e-4b8a-9d6e-1f0a2b3c4d5e".into())
                ),
                ("address", AttributeValue::S("123 Fake St".into())),
                ("latitude", AttributeValue::N("10.4".into())),
                ("longitude", AttributeValue::N("-104.5".into())),
            ])
        );
        assert_eq!(from_attributes(&attributes).unwrap(), item);
    }

    #[test]
    fn test_nested() {
        let attributes = attrs([
            (
                "tags",
                AttributeValue::L(vec![
                    AttributeValue::S("a".into()),
                    AttributeValue::N("2".into()),
                    AttributeValue::Null(true),
                ]),
            ),
            (
                "meta",
                AttributeValue::M(attrs([("open", AttributeValue::Bool(false))])),
            ),
            (
                "codes",
                AttributeValue::Ns(vec!["1".into(), "2.5".into()]),
            ),
            ("names", AttributeValue::Ss(vec!["x".into(), "y".into()])),
        ]);
        assert_eq!(
            Value::Object(from_attributes(&attributes).unwrap()),
            json!({
                "tags": ["a", 2, null],
                "meta": {"open": false},
                "codes": [1, 2.5],
                "names": ["x", "y"],
            })
        );
    }

    #[test]
    fn test_integer_numbers_from_dynamo() {
        let item = from_attributes(&attrs([("latitude", AttributeValue::N("-90".into()))])).unwrap();
        assert_eq!(item["latitude"].as_f64(), Some(-90.0));
    }

    #[test]
    fn test_malformed() {
        assert!(from_attribute(&AttributeValue::N("ten".into())).is_err());
        assert!(from_attribute(&AttributeValue::B(Blob::new(vec![1, 2]))).is_err());
        let nested = attrs([("inner", AttributeValue::Ns(vec!["1".into(), "x".into()]))]);
        let err = from_attributes(&attrs([("outer", AttributeValue::M(nested))])).unwrap_err();
        assert!(format!("{err:#}").contains("In attribute outer"));
    }
}
