use crate::error::SyllabusError;
use crate::models::syllabus::SyllabusDocument;
use regex::Regex;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;
use tracing::{debug, error, warn};

/// 大纲文件名后缀
pub const SYLLABUS_FILE_SUFFIX: &str = "_board_syllabus.json";

/// 合法的考试局名称
const BOARD_PATTERN: &str = r"^[a-z0-9_-]+$";

/// 大纲数据源
///
/// 每次调用都重新读取并解析文件，不做缓存
#[derive(Debug, Clone)]
pub struct SyllabusStore {
    root: PathBuf,
}

impl SyllabusStore {
    /// 创建数据源
    ///
    /// # 参数
    /// - `root`: 存放 `{board}_board_syllabus.json` 的目录
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 规范化考试局名称（去掉首尾空白并转为小写）并校验
    pub fn normalize_board(board: &str) -> Result<String, SyllabusError> {
        let board = board.trim().to_lowercase();
        let valid = Regex::new(BOARD_PATTERN)
            .map(|re| re.is_match(&board))
            .unwrap_or(false);

        if valid {
            Ok(board)
        } else {
            Err(SyllabusError::InvalidBoard { board })
        }
    }

    /// 考试局对应的大纲文件路径
    pub fn syllabus_path(&self, board: &str) -> Result<PathBuf, SyllabusError> {
        let board = Self::normalize_board(board)?;
        Ok(self.root.join(format!("{}{}", board, SYLLABUS_FILE_SUFFIX)))
    }

    /// 读取并解析考试局的大纲
    ///
    /// # 返回
    /// 文件不存在、无法读取或解析失败时返回对应的 `SyllabusError`
    pub async fn load(&self, board: &str) -> Result<SyllabusDocument, SyllabusError> {
        let path = self.syllabus_path(board)?;
        let path_str = path.display().to_string();

        let content = fs::read_to_string(&path).await.map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                SyllabusError::NotFound {
                    path: path_str.clone(),
                }
            } else {
                SyllabusError::ReadFailed {
                    path: path_str.clone(),
                    source,
                }
            }
        })?;

        let doc: SyllabusDocument =
            serde_json::from_str(&content).map_err(|source| SyllabusError::ParseFailed {
                path: path_str.clone(),
                source,
            })?;

        debug!("已加载大纲 {}: {} 个年级", path_str, doc.classes.len());
        Ok(doc)
    }

    /// 宽松加载：任何错误都降级为空大纲，并记录诊断日志
    pub async fn load_or_empty(&self, board: &str) -> SyllabusDocument {
        match self.load(board).await {
            Ok(doc) => doc,
            Err(e) if e.is_not_found() => {
                warn!("大纲文件不存在 (考试局: {}): {}", board, e.path().unwrap_or_default());
                SyllabusDocument::empty()
            }
            Err(e) => {
                error!("加载考试局 {} 的大纲失败: {}", board, e);
                SyllabusDocument::empty()
            }
        }
    }

    /// 列出目录中所有考试局（按名称排序）
    pub async fn list_boards(&self) -> std::io::Result<Vec<String>> {
        let mut boards = Vec::new();

        let mut entries = match fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("大纲目录不存在: {}", self.root.display());
                return Ok(boards);
            }
            Err(e) => return Err(e),
        };
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if let Some(board) = name.strip_suffix(SYLLABUS_FILE_SUFFIX) {
                if !board.is_empty() {
                    boards.push(board.to_string());
                }
            }
        }

        boards.sort();
        Ok(boards)
    }
}
