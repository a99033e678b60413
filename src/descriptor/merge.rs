//! Recursive descriptor-document merge.
//!
//! Override wins at leaf level, nested objects merge key-by-key, and
//! array-typed values are replaced wholesale by the override's array.
//! Keys missing from the override retain the base value.

use serde_json::Value;

/// Deep-merge `overlay` onto `base`, returning the merged document.
#[must_use]
pub fn merge_documents(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            let mut merged = base_map.clone();
            for (key, overlay_value) in overlay_map {
                let entry = match base_map.get(key) {
                    Some(base_value) => {
                        merge_documents(base_value, overlay_value)
                    }
                    None => overlay_value.clone(),
                };
                let _previous = merged.insert(key.clone(), entry);
            }
            Value::Object(merged)
        }
        // Arrays and scalars: override wins wholesale.
        (_, overlay_value) => overlay_value.clone(),
    }
}
