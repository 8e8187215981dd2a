//! Deep merge of recovered records onto canonical templates

use serde_json::Value;

/// Merge `source` onto `template`.
///
/// Every key of the template appears in the output: absent from the source it
/// keeps the template default, present with nested objects on both sides it
/// merges recursively, present otherwise the source value wins verbatim (leaf
/// values are not coerced or validated). Keys the template does not know are
/// dropped. The output is structurally complete for any input, including an
/// empty record, and the operation is idempotent.
pub fn normalize(template: &Value, source: &Value) -> Value {
    match (template, source) {
        (Value::Object(template_map), Value::Object(source_map)) => {
            let mut merged = serde_json::Map::with_capacity(template_map.len());
            for (key, template_value) in template_map {
                let value = match source_map.get(key) {
                    Some(source_value) if template_value.is_object() && source_value.is_object() => {
                        normalize(template_value, source_value)
                    }
                    Some(source_value) => source_value.clone(),
                    None => template_value.clone(),
                };
                merged.insert(key.clone(), value);
            }
            Value::Object(merged)
        }
        _ => template.clone(),
    }
}
