//! 教学大纲数据结构
//!
//! 结构对应 `{board}_board_syllabus.json`：年级 → 科目 → 章节。
//! 可选的序列字段缺失或为 `null` 时都按空数组处理；未知字段原样保留。
//! 再输出时序列字段总会写出（缺失的写成 `[]`），`ur: null` 会被省略。

use crate::utils::names_match;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value as JsonValue};
use std::fmt;

/// 缺失或 `null` 的序列字段一律视为空数组
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// 题目条目（内容不做解析，原样透传）
pub type QuestionItem = JsonValue;

/// 双语标签（英文 + 可选乌尔都语）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BilingualLabel {
    #[serde(default)]
    pub en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ur: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

/// 年级标识，JSON 中可能是字符串也可能是数字
///
/// 比较时一律按字符串比较，`9` 与 `"9"` 是同一个年级
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ClassId {
    Number(Number),
    Text(String),
}

impl ClassId {
    /// 用于比较的字符串形式
    pub fn key(&self) -> String {
        match self {
            ClassId::Text(s) => s.clone(),
            ClassId::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i.to_string()
                } else if let Some(u) = n.as_u64() {
                    u.to_string()
                } else {
                    match n.as_f64() {
                        // 9.0 与 9 视为同一年级
                        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
                        _ => n.to_string(),
                    }
                }
            }
        }
    }

    pub fn matches(&self, class_id: &str) -> bool {
        self.key() == class_id
    }
}

impl From<&str> for ClassId {
    fn from(value: &str) -> Self {
        ClassId::Text(value.to_string())
    }
}

impl From<u64> for ClassId {
    fn from(value: u64) -> Self {
        ClassId::Number(Number::from(value))
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl<'de> Deserialize<'de> for ClassId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct ClassIdVisitor;

        impl<'de> Visitor<'de> for ClassIdVisitor {
            type Value = ClassId;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or number identifying a class")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(ClassId::Text(value.to_string()))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(ClassId::Number(Number::from(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(ClassId::Number(Number::from(value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Number::from_f64(value)
                    .map(ClassId::Number)
                    .ok_or_else(|| E::custom(format!("invalid class number: {}", value)))
            }
        }

        deserializer.deserialize_any(ClassIdVisitor)
    }
}

/// 章节
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChapterEntry {
    /// 章节名（部分大纲文件使用 `chapter` 键）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<BilingualLabel>,
    /// 章节名（部分大纲文件使用 `title` 键）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<BilingualLabel>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub mcqs: Vec<QuestionItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub short_questions: Vec<QuestionItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub short_questions_ur: Vec<QuestionItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub long_questions: Vec<QuestionItem>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub long_questions_ur: Vec<QuestionItem>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl ChapterEntry {
    /// 章节名，`chapter` 优先，其次 `title`
    pub fn label(&self) -> Option<&BilingualLabel> {
        self.chapter.as_ref().or(self.title.as_ref())
    }

    /// 英文章节名
    pub fn title_en(&self) -> Option<&str> {
        self.label().map(|l| l.en.as_str())
    }
}

/// 科目
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectEntry {
    pub name: BilingualLabel,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chapters: Vec<ChapterEntry>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl SubjectEntry {
    /// 按英文章节名查找章节
    pub fn find_chapter(&self, title: &str) -> Option<&ChapterEntry> {
        self.chapters
            .iter()
            .find(|c| c.title_en().is_some_and(|en| names_match(en, title)))
    }
}

/// 年级
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub class: ClassId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subjects: Vec<SubjectEntry>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl ClassEntry {
    /// 按英文科目名查找科目
    pub fn find_subject(&self, name: &str) -> Option<&SubjectEntry> {
        self.subjects.iter().find(|s| names_match(&s.name.en, name))
    }
}

/// 一个考试局的完整大纲
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyllabusDocument {
    pub classes: Vec<ClassEntry>,
}

impl SyllabusDocument {
    /// 空大纲（文件缺失时的降级结果）
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// 按年级查找，年级标识按字符串比较
    pub fn find_class(&self, class_id: &str) -> Option<&ClassEntry> {
        self.classes.iter().find(|c| c.class.matches(class_id))
    }
}
