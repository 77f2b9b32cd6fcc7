//! 科目筛选服务
//!
//! 按年级取出科目列表，可选按分科白名单过滤

use crate::models::{Group, SubjectEntry, SyllabusDocument};
use tracing::debug;

/// 获取年级的全部科目
///
/// 年级不存在时返回空列表
pub fn subjects_for(doc: &SyllabusDocument, class_id: &str) -> Vec<SubjectEntry> {
    doc.find_class(class_id)
        .map(|class| class.subjects.clone())
        .unwrap_or_default()
}

/// 获取年级中属于某个分科的科目
///
/// # 参数
/// - `group`: 分科名称，只接受 `science` / `arts`（忽略大小写）
///
/// # 返回
/// 年级不存在或分科无法识别时返回空列表
pub fn subjects_for_group(doc: &SyllabusDocument, class_id: &str, group: &str) -> Vec<SubjectEntry> {
    let Some(group) = Group::parse(group) else {
        debug!("未知分科: {}", group);
        return Vec::new();
    };

    let Some(class) = doc.find_class(class_id) else {
        return Vec::new();
    };

    debug!("按分科 {} 过滤年级 {} 的科目", group, class_id);

    class
        .subjects
        .iter()
        .filter(|subject| group.allows(&subject.name.en))
        .cloned()
        .collect()
}
