//! 章节列表服务

use crate::models::{ChapterSummary, SubjectOutline, SyllabusDocument};

/// 获取科目的章节摘要列表
///
/// # 参数
/// - `subject_name`: 英文科目名（已完成 URL 解码），比较时忽略大小写和首尾空白
///
/// # 返回
/// 年级或科目不存在时返回空列表
pub fn chapters_for(doc: &SyllabusDocument, class_id: &str, subject_name: &str) -> Vec<ChapterSummary> {
    let Some(subject) = doc
        .find_class(class_id)
        .and_then(|class| class.find_subject(subject_name))
    else {
        return Vec::new();
    };

    subject
        .chapters
        .iter()
        .map(|chapter| {
            let label = chapter.label();
            ChapterSummary {
                title: label.map(|l| l.en.clone()).unwrap_or_default(),
                title_ur: label.and_then(|l| l.ur.clone()).unwrap_or_default(),
            }
        })
        .collect()
}

/// 获取年级的科目目录（科目名 + 章节名列表）
///
/// 年级不存在时返回 `None`
pub fn outline_for(doc: &SyllabusDocument, class_id: &str) -> Option<Vec<SubjectOutline>> {
    let class = doc.find_class(class_id)?;

    Some(
        class
            .subjects
            .iter()
            .map(|subject| SubjectOutline {
                name: subject.name.clone(),
                chapters: subject.chapters.iter().map(|c| c.label().cloned()).collect(),
            })
            .collect(),
    )
}
