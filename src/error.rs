use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 教学大纲数据源错误
    #[error("大纲错误: {0}")]
    Syllabus(#[from] SyllabusError),
    /// 自定义书籍生成错误
    #[error("书籍错误: {0}")]
    Book(#[from] BookError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 教学大纲文件相关错误
#[derive(Debug, Error)]
pub enum SyllabusError {
    /// 考试局名称不合法（只允许小写字母、数字、`_` 和 `-`）
    #[error("考试局名称不合法: {board:?}")]
    InvalidBoard { board: String },
    /// 大纲文件不存在
    #[error("大纲文件不存在: {path}")]
    NotFound { path: String },
    /// 读取大纲文件失败
    #[error("读取大纲文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// JSON 解析失败
    #[error("大纲JSON解析失败 ({path}): {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 自定义书籍生成错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    /// 年级不存在
    #[error("年级不存在: {class_id}")]
    ClassNotFound { class_id: String },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl SyllabusError {
    /// 文件不存在时为 true，其余情况都视为数据源不可用
    pub fn is_not_found(&self) -> bool {
        matches!(self, SyllabusError::NotFound { .. })
    }

    /// 出错的文件路径（考试局名称不合法时没有路径）
    pub fn path(&self) -> Option<&str> {
        match self {
            SyllabusError::InvalidBoard { .. } => None,
            SyllabusError::NotFound { path }
            | SyllabusError::ReadFailed { path, .. }
            | SyllabusError::ParseFailed { path, .. } => Some(path),
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
