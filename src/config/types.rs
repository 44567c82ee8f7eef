use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the single payload entry the island persists.
pub const RANSOMWARE_PAYLOAD_NAME: &str = "ransomware";

/// One entry in the stored `payloads` array. The store keeps exactly one of
/// these, wrapping the options object the form edits directly.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PayloadEntry {
    pub name: String,
    pub options: Value,
}

/// The `advanced` group as persisted. Only `keep_tunnel_open_time` survives
/// the trip to the form; any other key under `advanced` is dropped when the
/// record is flattened.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdvancedOptions {
    pub keep_tunnel_open_time: u64,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Configuration record in storage shape: wrapped payloads, grouped advanced
/// options. Keys this crate does not reshape pass through `rest` untouched.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    pub payloads: Vec<PayloadEntry>,
    pub advanced: AdvancedOptions,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Configuration record in form shape: the payload options unwrapped and
/// `keep_tunnel_open_time` hoisted to the top level. Carries no `advanced`
/// key.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormConfig {
    pub payloads: Value,
    pub keep_tunnel_open_time: u64,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}
