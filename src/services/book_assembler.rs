//! 自定义书籍组装服务
//!
//! 根据用户选择的科目、章节和内容类型，从大纲中裁剪出一本书。
//! 纯函数：同样的输入总是得到同样的输出。

use crate::error::BookError;
use crate::models::{
    ChapterContent, ChapterEntry, ClassId, ContentType, CustomBook, CustomChapter, CustomSubject,
    Selection, SyllabusDocument,
};
use tracing::debug;

/// 组装自定义书籍
///
/// # 参数
/// - `doc`: 考试局大纲
/// - `board`: 考试局名称（原样写入结果）
/// - `class_id`: 年级
/// - `selections`: 科目选择，顺序即输出顺序
///
/// # 返回
/// 年级不存在时返回 `BookError::ClassNotFound`；
/// 找不到的科目或章节直接跳过，没有任何章节的科目不会出现在结果中
pub fn assemble(
    doc: &SyllabusDocument,
    board: &str,
    class_id: &ClassId,
    selections: &[Selection],
) -> Result<CustomBook, BookError> {
    let class_key = class_id.key();
    let class = doc
        .find_class(&class_key)
        .ok_or(BookError::ClassNotFound { class_id: class_key })?;

    let mut book = CustomBook::new(board, class_id.clone());

    for selection in selections {
        let Some(subject) = class.find_subject(&selection.subject) else {
            debug!("跳过未找到的科目: {}", selection.subject);
            continue;
        };

        let chapters: Vec<CustomChapter> = selection
            .chapters
            .iter()
            .filter_map(|title| {
                let chapter = subject.find_chapter(title);
                if chapter.is_none() {
                    debug!("跳过未找到的章节: {} / {}", selection.subject, title);
                }
                chapter
            })
            .map(|chapter| CustomChapter {
                title: chapter.label().cloned().unwrap_or_default(),
                content: select_content(chapter, selection),
            })
            .collect();

        if !chapters.is_empty() {
            book.subjects.push(CustomSubject {
                name: subject.name.clone(),
                chapters,
            });
        }
    }

    Ok(book)
}

/// 只保留请求的内容类型；简答题和论述题同时带上乌尔都语版本
fn select_content(chapter: &ChapterEntry, selection: &Selection) -> ChapterContent {
    let mut content = ChapterContent::default();

    if selection.includes(ContentType::Mcqs) {
        content.mcqs = Some(chapter.mcqs.clone());
    }
    if selection.includes(ContentType::ShortQuestions) {
        content.short_questions = Some(chapter.short_questions.clone());
        content.short_questions_ur = Some(chapter.short_questions_ur.clone());
    }
    if selection.includes(ContentType::LongQuestions) {
        content.long_questions = Some(chapter.long_questions.clone());
        content.long_questions_ur = Some(chapter.long_questions_ur.clone());
    }

    content
}
