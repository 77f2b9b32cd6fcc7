//! 自定义书籍的请求与结果结构

use crate::models::syllabus::{BilingualLabel, ClassId, QuestionItem};
use serde::{Deserialize, Serialize};

/// 章节内容类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// 选择题
    Mcqs,
    /// 简答题（附带乌尔都语版本）
    ShortQuestions,
    /// 论述题（附带乌尔都语版本）
    LongQuestions,
}

impl ContentType {
    pub const ALL: [ContentType; 3] = [
        ContentType::Mcqs,
        ContentType::ShortQuestions,
        ContentType::LongQuestions,
    ];

    /// 请求中使用的名称
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Mcqs => "mcqs",
            ContentType::ShortQuestions => "short_questions",
            ContentType::LongQuestions => "long_questions",
        }
    }

    /// 精确解析内容类型，未知类型返回 `None`
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// 单个科目的选择
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    /// 英文科目名
    pub subject: String,
    /// 英文章节名列表（顺序即输出顺序）
    pub chapters: Vec<String>,
    /// 需要的内容类型，未知类型忽略
    #[serde(rename = "includeTypes")]
    pub include_types: Vec<String>,
}

impl Selection {
    /// 是否请求了某个内容类型
    pub fn includes(&self, content_type: ContentType) -> bool {
        self.include_types
            .iter()
            .any(|t| ContentType::parse(t) == Some(content_type))
    }
}

/// `POST /book/generate` 请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateBookRequest {
    pub board: String,
    pub class: ClassId,
    pub selections: Vec<Selection>,
}

/// 章节内容，只包含请求的内容类型
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChapterContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcqs: Option<Vec<QuestionItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_questions: Option<Vec<QuestionItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_questions_ur: Option<Vec<QuestionItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_questions: Option<Vec<QuestionItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub long_questions_ur: Option<Vec<QuestionItem>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomChapter {
    pub title: BilingualLabel,
    pub content: ChapterContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomSubject {
    pub name: BilingualLabel,
    pub chapters: Vec<CustomChapter>,
}

/// 自定义书籍
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomBook {
    pub title: String,
    pub board: String,
    pub class: ClassId,
    pub subjects: Vec<CustomSubject>,
}

impl CustomBook {
    /// 创建空书籍，标题为 `Custom Book - Class {class}`
    pub fn new(board: impl Into<String>, class: ClassId) -> Self {
        Self {
            title: format!("Custom Book - Class {}", class),
            board: board.into(),
            class,
            subjects: Vec::new(),
        }
    }
}

/// 章节摘要（`/api/chapters` 返回）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterSummary {
    pub title: String,
    pub title_ur: String,
}

/// 科目目录（`/book/subjects` 返回）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectOutline {
    pub name: BilingualLabel,
    pub chapters: Vec<Option<BilingualLabel>>,
}
