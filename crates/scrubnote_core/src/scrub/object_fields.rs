//! Structured field scrubbing at the request boundary.
//!
//! # Responsibility
//! - Remove banned field names from arbitrary JSON payloads before they
//!   reach note-processing logic.
//!
//! # Invariants
//! - Structural, not textual: keys are dropped with their values, at any
//!   nesting depth, through arrays as well.
//! - Key comparison is ASCII case-insensitive.
//! - Pure and total; non-object values are returned unchanged.

use serde_json::{Map, Value};

/// Field names that identify a person regardless of their value.
static BANNED_FIELDS: &[&str] = &[
    "name",
    "fullName",
    "firstName",
    "lastName",
    "dob",
    "dateOfBirth",
    "mrn",
    "ssn",
    "address",
    "phone",
    "email",
    "accountNumber",
];

fn is_banned(key: &str) -> bool {
    BANNED_FIELDS
        .iter()
        .any(|banned| banned.eq_ignore_ascii_case(key))
}

/// Recursively removes banned keys from `value`.
pub fn scrub_banned_fields(value: &Value) -> Value {
    match value {
        Value::Object(fields) => {
            let mut kept = Map::new();
            for (key, nested) in fields {
                if is_banned(key) {
                    continue;
                }
                kept.insert(key.clone(), scrub_banned_fields(nested));
            }
            Value::Object(kept)
        }
        Value::Array(items) => Value::Array(items.iter().map(scrub_banned_fields).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::scrub_banned_fields;
    use serde_json::json;

    #[test]
    fn removes_banned_keys_at_any_depth() {
        let payload = json!({
            "patient": { "name": "Jane", "note": "ok" },
            "meta": { "mrn": "123" }
        });
        let scrubbed = scrub_banned_fields(&payload);
        assert_eq!(
            scrubbed,
            json!({ "patient": { "note": "ok" }, "meta": {} })
        );
    }

    #[test]
    fn key_match_is_case_insensitive() {
        let payload = json!({ "Name": "x", "DATEOFBIRTH": "y", "Ssn": "z", "notes": "keep" });
        let scrubbed = scrub_banned_fields(&payload);
        assert_eq!(scrubbed, json!({ "notes": "keep" }));
    }

    #[test]
    fn walks_through_arrays() {
        let payload = json!({ "contacts": [ { "phone": "555", "role": "poa" } ] });
        let scrubbed = scrub_banned_fields(&payload);
        assert_eq!(scrubbed, json!({ "contacts": [ { "role": "poa" } ] }));
    }

    #[test]
    fn values_under_kept_keys_are_untouched() {
        let payload = json!({ "note": "call Jane at 555-123-4567" });
        assert_eq!(scrub_banned_fields(&payload), payload);
    }

    #[test]
    fn non_object_inputs_pass_through() {
        for payload in [json!(null), json!(42), json!("text"), json!([1, 2])] {
            assert_eq!(scrub_banned_fields(&payload), payload);
        }
    }
}
