/// 文本工具模块
///
/// 科目名、章节名的比较规则集中在这里，所有查找都走同一个规则

/// 规范化名称：去掉首尾空白并转为小写
///
/// # 参数
/// - `name`: 原始名称（英文标签）
///
/// # 返回
/// 规范化后的名称
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// 两个名称在规范化后是否相同
pub fn names_match(a: &str, b: &str) -> bool {
    normalize_name(a) == normalize_name(b)
}
