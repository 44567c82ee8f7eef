use serde_json::{json, Value};
use std::sync::LazyLock;

pub static STORAGE_CONFIG_SCHEMA: LazyLock<Value> = LazyLock::new(|| {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "required": ["payloads", "advanced"],
        "properties": {
            "payloads": {
                "type": "array",
                "minItems": 1,
                "maxItems": 1,
                "items": {
                    "type": "object",
                    "required": ["name", "options"],
                    "properties": {
                        "name": { "type": "string", "enum": ["ransomware"] },
                        "options": { "type": "object" }
                    }
                }
            },
            "advanced": {
                "type": "object",
                "required": ["keep_tunnel_open_time"],
                "properties": {
                    "keep_tunnel_open_time": { "type": "integer", "minimum": 0 }
                }
            }
        }
    })
});
