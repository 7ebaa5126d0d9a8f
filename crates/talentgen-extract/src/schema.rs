//! Field schemas for extraction
//!
//! A schema lists the fields a completion is expected to carry. Presence is
//! checked during extraction; the kind only drives the default a caller
//! substitutes when a field is absent. Semantic validation is not the
//! extractor's job.

use serde_json::Value;

/// Expected semantic kind of a required field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,

    /// List of strings
    TextList,

    /// Nested JSON object
    Object,

    /// Numeric value
    Number,
}

impl FieldKind {
    /// Default value substituted when the field is absent from a completion
    pub fn default_value(&self) -> Value {
        match self {
            FieldKind::Text => Value::String(String::new()),
            FieldKind::TextList => Value::Array(Vec::new()),
            FieldKind::Object => Value::Object(serde_json::Map::new()),
            FieldKind::Number => Value::from(0),
        }
    }
}

/// A required field: name plus expected kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as it appears in the JSON object
    pub name: String,

    /// Expected semantic kind
    pub kind: FieldKind,
}

impl FieldSpec {
    /// A required free-text field
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Text,
        }
    }

    /// A required string-list field
    pub fn text_list(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::TextList,
        }
    }

    /// A required nested-object field
    pub fn object(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Object,
        }
    }

    /// A required numeric field
    pub fn number(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::Number,
        }
    }
}

/// Ordered list of required fields for one extraction
#[derive(Debug, Clone, Default)]
pub struct OutputSchema {
    fields: Vec<FieldSpec>,
}

impl OutputSchema {
    /// Create a schema from a list of field specs
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    /// The required fields, in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field spec by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_constructors() {
        let spec = FieldSpec::text_list("requirements");
        assert_eq!(spec.name, "requirements");
        assert_eq!(spec.kind, FieldKind::TextList);
    }

    #[test]
    fn test_default_values() {
        assert_eq!(FieldKind::Text.default_value(), Value::String(String::new()));
        assert_eq!(FieldKind::TextList.default_value(), Value::Array(Vec::new()));
        assert!(FieldKind::Object.default_value().is_object());
        assert_eq!(FieldKind::Number.default_value(), Value::from(0));
    }

    #[test]
    fn test_schema_lookup() {
        let schema = OutputSchema::new(vec![
            FieldSpec::text("description"),
            FieldSpec::number("salary"),
        ]);
        assert_eq!(schema.fields().len(), 2);
        assert_eq!(schema.field("salary").map(|f| f.kind), Some(FieldKind::Number));
        assert!(schema.field("benefits").is_none());
    }
}
