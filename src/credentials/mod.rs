pub mod group;
pub mod types;

pub use group::{credentials_to_form, credentials_to_list};
pub use types::*;
