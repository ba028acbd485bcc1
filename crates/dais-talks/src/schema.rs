//! Payload schemas with the metadata the talks are about: units, enumerated
//! choices, and defaults, convertible to a JSON-Schema-style interchange
//! document for AI consumers.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;

/// Errors raised while building payload schemas.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("schema name cannot be empty")]
    EmptyName,
    #[error("schema version must match vMAJOR.MINOR.PATCH: '{value}'")]
    InvalidVersion { value: String },
    #[error("field name cannot be empty")]
    EmptyFieldName,
    #[error("duplicate field '{name}'")]
    DuplicateField { name: String },
    #[error("choices are only valid on string fields: '{field}'")]
    ChoicesOnNonString { field: String },
    #[error("default for field '{field}' does not match kind {kind}")]
    DefaultKindMismatch { field: String, kind: FieldKind },
}

/// One mismatch found while validating a payload against a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    pub path: String,
    pub message: String,
}

impl Display for SchemaViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Primitive kinds a payload field may take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Integer,
    Boolean,
}

impl FieldKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (Self::String, Value::String(_)) => true,
            (Self::Number, Value::Number(_)) => true,
            (Self::Integer, Value::Number(number)) => number.is_i64() || number.is_u64(),
            (Self::Boolean, Value::Bool(_)) => true,
            _ => false,
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field of an agent-facing payload.
///
/// The metadata is the point: a field without a unit or choice list is
/// exactly the ambiguity the talks demonstrate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    pub description: String,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        description: impl Into<String>,
    ) -> Result<Self, SchemaError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SchemaError::EmptyFieldName);
        }

        Ok(Self {
            name,
            kind,
            unit: None,
            choices: Vec::new(),
            default: None,
            description: description.into(),
            required: true,
        })
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Restrict a string field to an enumerated set of values.
    pub fn with_choices<I, S>(mut self, choices: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.kind != FieldKind::String {
            return Err(SchemaError::ChoicesOnNonString { field: self.name });
        }

        self.choices = choices.into_iter().map(Into::into).collect();
        Ok(self)
    }

    /// Record the value a consumer should assume when the field is absent.
    pub fn with_default(mut self, default: Value) -> Result<Self, SchemaError> {
        if !self.kind.matches(&default) {
            return Err(SchemaError::DefaultKindMismatch {
                field: self.name,
                kind: self.kind,
            });
        }

        self.default = Some(default);
        self.required = false;
        Ok(self)
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Named, versioned description of one payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSchema {
    pub name: String,
    pub version: String,
    pub fields: Vec<FieldSpec>,
}

impl PayloadSchema {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Result<Self, SchemaError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SchemaError::EmptyName);
        }

        let version = version.into();
        if !is_valid_version(&version) {
            return Err(SchemaError::InvalidVersion { value: version });
        }

        Ok(Self {
            name,
            version,
            fields: Vec::new(),
        })
    }

    pub fn with_field(mut self, field: FieldSpec) -> Result<Self, SchemaError> {
        if self.fields.iter().any(|existing| existing.name == field.name) {
            return Err(SchemaError::DuplicateField { name: field.name });
        }

        self.fields.push(field);
        Ok(self)
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Convert to a JSON-Schema-style interchange document. Units travel as
    /// an `x-unit` annotation since JSON Schema has no native slot for them.
    pub fn to_interchange(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for field in &self.fields {
            let mut spec = Map::new();
            spec.insert("type".to_owned(), json!(field.kind.as_str()));
            spec.insert("description".to_owned(), json!(field.description));
            if let Some(unit) = &field.unit {
                spec.insert("x-unit".to_owned(), json!(unit));
            }
            if !field.choices.is_empty() {
                spec.insert("enum".to_owned(), json!(field.choices));
            }
            if let Some(default) = &field.default {
                spec.insert("default".to_owned(), default.clone());
            }

            properties.insert(field.name.clone(), Value::Object(spec));
            if field.required {
                required.push(json!(field.name));
            }
        }

        json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "title": self.name,
            "version": self.version,
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false,
        })
    }

    /// Structural check of a payload: required fields, kinds, and enum
    /// membership. Returns every mismatch rather than stopping at the first.
    pub fn validate(&self, payload: &Value) -> Vec<SchemaViolation> {
        let mut violations = Vec::new();

        let Some(object) = payload.as_object() else {
            violations.push(SchemaViolation {
                path: "$".to_owned(),
                message: "payload must be an object".to_owned(),
            });
            return violations;
        };

        for field in &self.fields {
            let path = format!("$/{}", field.name);
            match object.get(&field.name) {
                None => {
                    if field.required {
                        violations.push(SchemaViolation {
                            path,
                            message: format!("required field '{}' is missing", field.name),
                        });
                    }
                }
                Some(value) => {
                    if !field.kind.matches(value) {
                        violations.push(SchemaViolation {
                            path,
                            message: format!("expected {}, found {}", field.kind, kind_of(value)),
                        });
                    } else if !field.choices.is_empty() {
                        if let Some(text) = value.as_str() {
                            if !field.choices.iter().any(|choice| choice == text) {
                                violations.push(SchemaViolation {
                                    path,
                                    message: format!(
                                        "'{}' is not one of [{}]",
                                        text,
                                        field.choices.join(", ")
                                    ),
                                });
                            }
                        }
                    }
                }
            }
        }

        violations
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn is_valid_version(value: &str) -> bool {
    let Some(version) = value.strip_prefix('v') else {
        return false;
    };

    let mut parts = version.split('.');
    let major = parts.next();
    let minor = parts.next();
    let patch = parts.next();

    if parts.next().is_some() {
        return false;
    }

    [major, minor, patch].iter().all(|part| {
        part.is_some_and(|segment| {
            !segment.is_empty() && segment.chars().all(|ch| ch.is_ascii_digit())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price_field() -> FieldSpec {
        FieldSpec::new("price", FieldKind::Integer, "last trade price")
            .expect("field must be valid")
            .with_unit("cents")
    }

    #[test]
    fn rejects_empty_schema_name() {
        let err = PayloadSchema::new("  ", "v1.0.0").expect_err("must fail");
        assert_eq!(err, SchemaError::EmptyName);
    }

    #[test]
    fn rejects_bad_version() {
        let err = PayloadSchema::new("quote", "1.0").expect_err("must fail");
        assert!(matches!(err, SchemaError::InvalidVersion { .. }));
    }

    #[test]
    fn rejects_duplicate_fields() {
        let err = PayloadSchema::new("quote", "v1.0.0")
            .expect("schema must be valid")
            .with_field(price_field())
            .expect("first field must attach")
            .with_field(price_field())
            .expect_err("must fail");
        assert!(matches!(err, SchemaError::DuplicateField { .. }));
    }

    #[test]
    fn rejects_choices_on_numeric_fields() {
        let err = FieldSpec::new("price", FieldKind::Number, "price")
            .expect("field must be valid")
            .with_choices(["a", "b"])
            .expect_err("must fail");
        assert!(matches!(err, SchemaError::ChoicesOnNonString { .. }));
    }

    #[test]
    fn rejects_default_of_wrong_kind() {
        let err = FieldSpec::new("active", FieldKind::Boolean, "whether trading")
            .expect("field must be valid")
            .with_default(json!("yes"))
            .expect_err("must fail");
        assert!(matches!(err, SchemaError::DefaultKindMismatch { .. }));
    }

    #[test]
    fn interchange_carries_unit_choices_and_default() {
        let schema = PayloadSchema::new("quote", "v1.0.0")
            .expect("schema must be valid")
            .with_field(price_field())
            .expect("price must attach")
            .with_field(
                FieldSpec::new("venue", FieldKind::String, "listing venue")
                    .expect("field must be valid")
                    .with_choices(["nasdaq", "nyse", "otc"])
                    .expect("choices must attach"),
            )
            .expect("venue must attach")
            .with_field(
                FieldSpec::new("currency", FieldKind::String, "ISO currency code")
                    .expect("field must be valid")
                    .with_default(json!("USD"))
                    .expect("default must attach"),
            )
            .expect("currency must attach");

        let doc = schema.to_interchange();
        assert_eq!(doc["properties"]["price"]["x-unit"], json!("cents"));
        assert_eq!(
            doc["properties"]["venue"]["enum"],
            json!(["nasdaq", "nyse", "otc"])
        );
        assert_eq!(doc["properties"]["currency"]["default"], json!("USD"));
        // Fields with a default are not required.
        assert_eq!(doc["required"], json!(["price", "venue"]));
    }

    #[test]
    fn validate_reports_missing_required_field_with_path() {
        let schema = PayloadSchema::new("quote", "v1.0.0")
            .expect("schema must be valid")
            .with_field(price_field())
            .expect("price must attach");

        let violations = schema.validate(&json!({}));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "$/price");
    }

    #[test]
    fn validate_flags_wrong_kind_and_bad_choice() {
        let schema = PayloadSchema::new("quote", "v1.0.0")
            .expect("schema must be valid")
            .with_field(price_field())
            .expect("price must attach")
            .with_field(
                FieldSpec::new("venue", FieldKind::String, "listing venue")
                    .expect("field must be valid")
                    .with_choices(["nasdaq", "nyse"])
                    .expect("choices must attach"),
            )
            .expect("venue must attach");

        let violations = schema.validate(&json!({
            "price": "12900",
            "venue": "darkpool",
        }));

        assert_eq!(violations.len(), 2);
        assert!(violations[0].message.contains("expected integer"));
        assert!(violations[1].message.contains("darkpool"));
    }

    #[test]
    fn validate_accepts_a_conforming_payload() {
        let schema = PayloadSchema::new("quote", "v1.0.0")
            .expect("schema must be valid")
            .with_field(price_field())
            .expect("price must attach");

        let violations = schema.validate(&json!({ "price": 12900 }));
        assert!(violations.is_empty());
    }
}
