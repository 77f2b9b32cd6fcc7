use crate::utils::normalize_name;
use phf::{phf_set, Set};

/// 理科科目白名单（规范化后的英文名）
static SCIENCE_SUBJECTS: Set<&'static str> = phf_set! {
    "biology",
    "chemistry",
    "physics",
    "mathematics",
    "computer science",
};

/// 文科科目白名单（规范化后的英文名）
static ARTS_SUBJECTS: Set<&'static str> = phf_set! {
    "civics",
    "food and nutrition",
    "general mathematics",
    "general science",
    "home economics",
    "pakistan studies",
    "physical education",
    "poultry farming",
};

/// 分科枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// 理科
    Science,
    /// 文科
    Arts,
}

impl Group {
    /// 从字符串解析分科（忽略大小写和首尾空白），无法识别时返回 `None`
    pub fn parse(s: &str) -> Option<Self> {
        match normalize_name(s).as_str() {
            "science" => Some(Group::Science),
            "arts" => Some(Group::Arts),
            _ => None,
        }
    }

    /// 获取标准名称
    pub fn name(self) -> &'static str {
        match self {
            Group::Science => "science",
            Group::Arts => "arts",
        }
    }

    /// 该分科的科目白名单
    pub fn subjects(self) -> &'static Set<&'static str> {
        match self {
            Group::Science => &SCIENCE_SUBJECTS,
            Group::Arts => &ARTS_SUBJECTS,
        }
    }

    /// 科目是否属于该分科
    pub fn allows(self, subject_name: &str) -> bool {
        self.subjects().contains(normalize_name(subject_name).as_str())
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
