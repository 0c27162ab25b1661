use std::collections::HashMap;

use anyhow::anyhow;
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::{Uuid, Variant, Version};

use crate::{error::SucursalError, sucursal::Sucursal};

/// Header message of every [ValidationReport]
pub const VALIDATION_HEADER: &str = "Error when validating payload";

/// Fields of a create request, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Field {
    Id,
    Address,
    Latitude,
    Longitude,
}

impl Field {
    /// Name used when rendering messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Address => "Address",
            Self::Latitude => "Latitude",
            Self::Longitude => "Longitude",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Rule {
    /// Must be present, and non-empty for text
    Required,
    /// Canonical lowercase, hyphenated, version 4 UUID
    Uuid4,
    /// Inclusive lower bound
    Min(f64),
    /// Inclusive upper bound
    Max(f64),
}

/// Rule without its parameter, templates are keyed on this
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Required,
    Uuid4,
    Min,
    Max,
}

impl Rule {
    pub const fn kind(&self) -> RuleKind {
        match self {
            Self::Required => RuleKind::Required,
            Self::Uuid4 => RuleKind::Uuid4,
            Self::Min(_) => RuleKind::Min,
            Self::Max(_) => RuleKind::Max,
        }
    }

    fn param(&self) -> Option<f64> {
        match self {
            Self::Min(n) | Self::Max(n) => Some(*n),
            Self::Required | Self::Uuid4 => None,
        }
    }

    fn holds(&self, value: FieldValue<'_>) -> bool {
        match (self, value) {
            (Self::Required, FieldValue::Text(text)) => text.is_some_and(|t| !t.is_empty()),
            (Self::Required, FieldValue::Number(n)) => n.is_some(),
            (Self::Uuid4, FieldValue::Text(text)) => text.is_none_or(is_uuid_v4),
            (Self::Min(min), FieldValue::Number(n)) => n.is_none_or(|n| n >= *min),
            (Self::Max(max), FieldValue::Number(n)) => n.is_none_or(|n| n <= *max),
            // A rule that makes no sense for the field's type never fires
            _ => true,
        }
    }
}

fn is_uuid_v4(raw: &str) -> bool {
    // Only the 36 char hyphenated form, the parser would also take simple, braced and urn forms
    raw.len() == 36
        && !raw.bytes().any(|b| b.is_ascii_uppercase())
        && Uuid::try_parse(raw).is_ok_and(|id| {
            id.get_version() == Some(Version::Random) && id.get_variant() == Variant::RFC4122
        })
}

#[derive(Debug, Clone, Copy)]
enum FieldValue<'a> {
    Text(Option<&'a str>),
    Number(Option<f64>),
}

/// Body of a create request, every field is optional so that missing ones are reported as
/// violations rather than decode failures.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CreatePayload {
    id: Option<String>,
    address: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl CreatePayload {
    fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::Id => FieldValue::Text(self.id.as_deref()),
            Field::Address => FieldValue::Text(self.address.as_deref()),
            Field::Latitude => FieldValue::Number(self.latitude),
            Field::Longitude => FieldValue::Number(self.longitude),
        }
    }

    fn into_sucursal(self) -> Option<Sucursal> {
        Some(Sucursal {
            id: self.id?,
            address: self.address?,
            latitude: self.latitude?,
            longitude: self.longitude?,
        })
    }
}

/// Ordered field violations found in a create request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub message: String,
    pub errors: Vec<String>,
}

/// Rules to check and the templates to render violations with.
///
/// Built once and never mutated, share it between requests by sharing the [Validator] that
/// owns it.
#[derive(Debug, Clone)]
pub struct ValidationContext {
    header: String,
    rules: Vec<(Field, Vec<Rule>)>,
    templates: HashMap<RuleKind, String>,
}

impl ValidationContext {
    /// The rules for a new sucursal with English messages
    pub fn english() -> Self {
        let rules = vec![
            (Field::Id, vec![Rule::Required, Rule::Uuid4]),
            (Field::Address, vec![Rule::Required]),
            (
                Field::Latitude,
                vec![Rule::Required, Rule::Min(-90.0), Rule::Max(90.0)],
            ),
            (
                Field::Longitude,
                vec![Rule::Required, Rule::Min(-180.0), Rule::Max(180.0)],
            ),
        ];

        let templates = [
            (RuleKind::Required, "{0} is a required field"),
            (RuleKind::Uuid4, "{0} must be in valid UUID v4 format"),
            (RuleKind::Min, "{0} must be {1} or greater"),
            (RuleKind::Max, "{0} must be {1} or less"),
        ]
        .into_iter()
        .map(|(kind, template)| (kind, template.to_string()))
        .collect();

        Self {
            header: VALIDATION_HEADER.to_string(),
            rules,
            templates,
        }
    }

    /// Replace the template for a kind of rule. `{0}` is the field name and `{1}` the rule's
    /// parameter, if it has one.
    pub fn with_template(mut self, kind: RuleKind, template: impl Into<String>) -> Self {
        self.templates.insert(kind, template.into());
        self
    }

    fn render(&self, field: Field, rule: &Rule) -> String {
        let template = self
            .templates
            .get(&rule.kind())
            .map(String::as_str)
            .unwrap_or("{0} is invalid");
        let rendered = template.replace("{0}", field.name());
        match rule.param() {
            Some(param) => rendered.replace("{1}", &param.to_string()),
            None => rendered,
        }
    }

    /// Every field's first broken rule, rendered, in declaration order
    fn violations(&self, payload: &CreatePayload) -> Vec<String> {
        self.rules
            .iter()
            .filter_map(|(field, rules)| {
                let value = payload.value(*field);
                rules
                    .iter()
                    .find(|rule| !rule.holds(value))
                    .map(|rule| self.render(*field, rule))
            })
            .collect()
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::english()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Validator {
    context: ValidationContext,
}

impl Validator {
    pub fn new(context: ValidationContext) -> Self {
        Self { context }
    }

    /// Decode and check a create request.
    ///
    /// A body that doesn't decode (bad JSON, wrong types, unknown fields) is
    /// [SucursalError::MalformedPayload] and no field rules are run. Otherwise every field is
    /// checked and all violations come back together in [SucursalError::ValidationFailed].
    pub fn validate_create(&self, raw: &[u8]) -> Result<Sucursal, SucursalError> {
        let payload = serde_json::from_slice::<CreatePayload>(raw)
            .map_err(SucursalError::MalformedPayload)?;

        let errors = self.context.violations(&payload);
        if !errors.is_empty() {
            debug!("Payload broke {} rules", errors.len());
            return Err(SucursalError::ValidationFailed(ValidationReport {
                message: self.context.header.clone(),
                errors,
            }));
        }

        payload
            .into_sucursal()
            .ok_or_else(|| anyhow!("Validated payload is missing fields").into())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn validate(body: serde_json::Value) -> Result<Sucursal, SucursalError> {
        Validator::default().validate_create(body.to_string().as_bytes())
    }

    fn report(body: serde_json::Value) -> Vec<String> {
        match validate(body) {
            Err(SucursalError::ValidationFailed(report)) => {
                assert_eq!(report.message, VALIDATION_HEADER);
                report.errors
            }
            other => panic!("Expected a validation report, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_payload() {
        let id = Uuid::new_v4().to_string();
        let sucursal = validate(json!({
            "id": &id,
            "address": "123 Fake St.",
            "latitude": 20.252,
            "longitude": 50.685,
        }))
        .unwrap();
        assert_eq!(sucursal, Sucursal::new(id, "123 Fake St.", 20.252, 50.685));
    }

    #[test]
    fn test_all_violations_in_order() {
        let errors = report(json!({
            "id": "INVALID ID",
            "latitude": 150.0,
            "longitude": -200.0,
        }));
        assert_eq!(
            errors,
            vec![
                "ID must be in valid UUID v4 format",
                "Address is a required field",
                "Latitude must be 90 or less",
                "Longitude must be -180 or greater",
            ]
        );
    }

    #[test]
    fn test_empty_object() {
        let errors = report(json!({}));
        assert_eq!(
            errors,
            vec![
                "ID is a required field",
                "Address is a required field",
                "Latitude is a required field",
                "Longitude is a required field",
            ]
        );
    }

    #[test]
    fn test_empty_strings_are_missing() {
        let errors = report(json!({
            "id": "",
            "address": "",
            "latitude": 0.0,
            "longitude": 0.0,
        }));
        assert_eq!(
            errors,
            vec!["ID is a required field", "Address is a required field"]
        );
    }

    #[test]
    fn test_null_is_missing() {
        let errors = report(json!({
            "id": Uuid::new_v4().to_string(),
            "address": "somewhere",
            "latitude": null,
            "longitude": 180.0,
        }));
        assert_eq!(errors, vec!["Latitude is a required field"]);
    }

    #[test]
    fn test_unknown_field_is_malformed() {
        let res = validate(json!({
            "id": Uuid::new_v4().to_string(),
            "address": "somewhere",
            "latitude": 1.0,
            "longitude": 1.0,
            "owner": "nobody",
        }));
        assert!(matches!(res, Err(SucursalError::MalformedPayload(_))));
    }

    #[test]
    fn test_wrong_type_is_malformed() {
        let res = validate(json!({"id": "x", "latitude": "north"}));
        assert!(matches!(res, Err(SucursalError::MalformedPayload(_))));
    }

    #[test]
    fn test_bad_json_is_malformed() {
        let res = Validator::default().validate_create(b"{\"id\": ");
        assert!(matches!(res, Err(SucursalError::MalformedPayload(_))));
    }

    #[test]
    fn test_uuid_forms() {
        let id = Uuid::new_v4();
        assert!(is_uuid_v4(&id.to_string()));
        assert!(!is_uuid_v4(&id.to_string().to_uppercase()));
        assert!(!is_uuid_v4(&id.simple().to_string()));
        assert!(!is_uuid_v4(&id.braced().to_string()));
        // Version 1
        assert!(!is_uuid_v4("c232ab00-9414-11ec-b3c8-9f6bdeced846"));
        assert!(!is_uuid_v4("not-a-uuid"));
    }

    #[test]
    fn test_custom_template() {
        let context = ValidationContext::english()
            .with_template(RuleKind::Required, "{0} es un campo requerido");
        let res = Validator::new(context).validate_create(
            json!({"latitude": 1.0, "longitude": 1.0, "address": "x"})
                .to_string()
                .as_bytes(),
        );
        match res {
            Err(SucursalError::ValidationFailed(report)) => {
                assert_eq!(report.errors, vec!["ID es un campo requerido"]);
            }
            other => panic!("Expected a validation report, got {other:?}"),
        }
    }
}
