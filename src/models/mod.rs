pub mod book;
pub mod group;
pub mod loaders;
pub mod syllabus;

pub use book::{
    ChapterContent, ChapterSummary, ContentType, CustomBook, CustomChapter, CustomSubject,
    GenerateBookRequest, Selection, SubjectOutline,
};
pub use group::Group;
pub use loaders::SyllabusStore;
pub use syllabus::{BilingualLabel, ChapterEntry, ClassEntry, ClassId, SubjectEntry, SyllabusDocument};
