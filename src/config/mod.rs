pub mod parser;
pub mod reformat;
pub mod schema;
pub mod types;

pub use parser::load_storage_config;
pub use reformat::{reformat_config, to_form_shape, to_storage_shape};
pub use types::*;
