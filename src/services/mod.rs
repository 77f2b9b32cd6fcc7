pub mod book_assembler;
pub mod chapter_projector;
pub mod subject_filter;

pub use book_assembler::assemble;
pub use chapter_projector::{chapters_for, outline_for};
pub use subject_filter::{subjects_for, subjects_for_group};
