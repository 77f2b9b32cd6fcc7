pub mod json_loader;

pub use json_loader::{SyllabusStore, SYLLABUS_FILE_SUFFIX};
