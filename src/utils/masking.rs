use serde_json::{Map, Value};

pub const MASK: &str = "********";

const SENSITIVE_KEYS: &[&str] = &[
    "password",
    "secret",
    "token",
    "accesstoken",
    "refreshtoken",
    "key",
    "credential",
    "pass",
    "pwd",
    "api_key",
    "apikey",
];

/// Field descriptions that trigger masking when typed into the page.
const SENSITIVE_FIELDS: &[&str] = &["password", "secret", "token", "key", "credential", "pass", "pwd"];

pub fn is_sensitive_key(key: &str) -> bool {
    let key = key.to_lowercase();
    SENSITIVE_KEYS.iter().any(|needle| key.contains(needle))
}

pub fn mask_json(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let masked: Map<String, Value> = map
                .iter()
                .map(|(k, v)| {
                    if is_sensitive_key(k) {
                        (k.clone(), Value::String(MASK.to_string()))
                    } else {
                        (k.clone(), mask_json(v))
                    }
                })
                .collect();
            Value::Object(masked)
        }
        Value::Array(items) => Value::Array(items.iter().map(mask_json).collect()),
        other => other.clone(),
    }
}

pub fn mask_text<'a>(description: &str, text: &'a str) -> &'a str {
    let description = description.to_lowercase();
    if SENSITIVE_FIELDS.iter().any(|needle| description.contains(needle)) {
        MASK
    } else {
        text
    }
}
