use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::types::{AdvancedOptions, FormConfig, PayloadEntry, StorageConfig, RANSOMWARE_PAYLOAD_NAME};
use crate::errors::ConfigError;

/// Convert a configuration record between its two shapes. `to_storage` picks
/// the direction: `false` reshapes a stored record for the form, `true`
/// reshapes an edited form record for persistence.
///
/// Both directions build a fresh value rather than mutating the input.
pub fn reformat_config(config: Value, to_storage: bool) -> Result<Value, ConfigError> {
    if to_storage {
        to_storage_shape(config)
    } else {
        to_form_shape(config)
    }
}

/// Storage shape -> form shape. Unwraps `payloads[0].options` and hoists
/// `advanced.keep_tunnel_open_time` to the top level. Advanced keys other
/// than `keep_tunnel_open_time` do not exist on the form and are dropped.
pub fn to_form_shape(config: Value) -> Result<Value, ConfigError> {
    let storage: StorageConfig = serde_json::from_value(config)
        .map_err(|e| ConfigError::Shape(format!("not a storage-shape config: {e}")))?;

    let entry = storage
        .payloads
        .into_iter()
        .next()
        .ok_or_else(|| ConfigError::Shape("payloads must contain at least one entry".into()))?;
    if entry.name != RANSOMWARE_PAYLOAD_NAME {
        warn!(payload = %entry.name, "Unexpected payload name in stored config");
    }

    if !storage.advanced.rest.is_empty() {
        debug!(
            dropped = storage.advanced.rest.len(),
            "Dropping advanced keys the form does not carry"
        );
    }

    let form = FormConfig {
        payloads: entry.options,
        keep_tunnel_open_time: storage.advanced.keep_tunnel_open_time,
        rest: storage.rest,
    };
    Ok(serde_json::to_value(form)?)
}

/// Form shape -> storage shape. Wraps the edited options back into the single
/// ransomware payload entry and regroups `keep_tunnel_open_time` under
/// `advanced`.
pub fn to_storage_shape(config: Value) -> Result<Value, ConfigError> {
    let form: FormConfig = serde_json::from_value(config)
        .map_err(|e| ConfigError::Shape(format!("not a form-shape config: {e}")))?;

    let storage = StorageConfig {
        payloads: vec![PayloadEntry {
            name: RANSOMWARE_PAYLOAD_NAME.to_string(),
            options: form.payloads,
        }],
        advanced: AdvancedOptions {
            keep_tunnel_open_time: form.keep_tunnel_open_time,
            rest: Map::new(),
        },
        rest: form.rest,
    };
    Ok(serde_json::to_value(storage)?)
}
