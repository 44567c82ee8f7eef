//! Shape converters between the island's persisted configuration format and
//! the flattened format the configuration form edits.

pub mod config;
pub mod credentials;
pub mod errors;

pub use config::{load_storage_config, reformat_config, to_form_shape, to_storage_shape};
pub use credentials::{credentials_to_form, credentials_to_list};
pub use errors::ConfigError;
