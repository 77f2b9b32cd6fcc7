pub mod logging;
pub mod text;

pub use text::{names_match, normalize_name};
