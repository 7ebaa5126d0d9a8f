//! Best-effort extraction of a JSON object from completion text

use crate::error::ExtractError;
use crate::repair;
use crate::schema::OutputSchema;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// A successful extraction
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// The parsed top-level object
    pub value: Map<String, Value>,

    /// Required fields absent from the object, in schema order
    ///
    /// Absent fields are tolerated; callers substitute kind-appropriate
    /// defaults for them.
    pub missing: Vec<String>,
}

impl Extraction {
    /// The field value, or the schema default when the field is absent
    pub fn field_or_default(&self, schema: &OutputSchema, name: &str) -> Value {
        match self.value.get(name) {
            Some(value) => value.clone(),
            None => schema
                .field(name)
                .map(|f| f.kind.default_value())
                .unwrap_or(Value::Null),
        }
    }
}

/// Recover a JSON object from free-form completion text
///
/// Ordered attempts, each tried only if the prior one failed:
///
/// 1. strip markdown code-fence markers
/// 2. isolate the outermost `{...}` span
/// 3. parse as JSON
/// 4. apply the repair sequence, re-parsing after each step
/// 5. record which required fields are absent
///
/// Never panics on malformed input; the only failure kind is
/// `MalformedOutput`, carrying the original text. The input is never
/// mutated, so the same text and schema always yield the same result.
pub fn extract(raw_text: &str, schema: &OutputSchema) -> Result<Extraction, ExtractError> {
    let stripped = strip_code_fences(raw_text);

    let isolated = match isolate_object(stripped) {
        Some(span) => span,
        None => {
            warn!("No JSON object found in completion ({} chars)", raw_text.len());
            return Err(malformed(raw_text));
        }
    };

    let value = match serde_json::from_str::<Value>(isolated) {
        Ok(value) => value,
        Err(e) => {
            debug!("Initial parse failed ({}), attempting repairs", e);
            match repair::reparse(isolated) {
                Some(value) => value,
                None => {
                    warn!("Completion unrecoverable after all repair steps");
                    return Err(malformed(raw_text));
                }
            }
        }
    };

    // The prompts demand a single object; arrays and scalars are not
    // recoverable shapes
    let object = match value {
        Value::Object(object) => object,
        other => {
            warn!("Completion parsed to non-object JSON ({})", json_kind(&other));
            return Err(malformed(raw_text));
        }
    };

    let missing: Vec<String> = schema
        .fields()
        .iter()
        .filter(|f| !object.contains_key(&f.name))
        .map(|f| f.name.clone())
        .collect();

    if !missing.is_empty() {
        debug!("Completion missing fields: {}", missing.join(", "));
    }

    Ok(Extraction {
        value: object,
        missing,
    })
}

fn malformed(raw_text: &str) -> ExtractError {
    ExtractError::MalformedOutput {
        raw_text: raw_text.to_string(),
    }
}

/// Strip leading/trailing markdown fence markers, with or without a language tag
///
/// Models frequently wrap JSON in ```` ``` ```` fences even when instructed
/// not to.
fn strip_code_fences(text: &str) -> &str {
    let mut trimmed = text.trim();

    if let Some(rest) = trimmed.strip_prefix("```") {
        // Drop the fence line, including any language tag such as "json"
        trimmed = match rest.split_once('\n') {
            Some((_, body)) => body,
            None => rest.trim_start_matches("json"),
        };
    }
    if let Some(rest) = trimmed.trim_end().strip_suffix("```") {
        trimmed = rest;
    }

    trimmed.trim()
}

/// Take the substring from the first `{` to the last `}`, inclusive
///
/// Discards leading/trailing prose around the object.
fn isolate_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
