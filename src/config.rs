use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "syllabus_server.toml";

/// 程序配置文件
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
    /// 大纲 JSON 文件存放目录
    pub syllabus_dir: PathBuf,
    /// 页面模板目录
    pub views_dir: PathBuf,
    /// 静态资源目录
    pub public_dir: PathBuf,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            syllabus_dir: PathBuf::from("syllabus"),
            views_dir: PathBuf::from("views"),
            public_dir: PathBuf::from("public"),
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载配置：默认值 ← TOML 配置文件（可选） ← 环境变量
    pub fn load() -> AppResult<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let base = Self::from_toml_file(Path::new(&path))?.unwrap_or_default();
        Ok(base.with_env())
    }

    /// 从 TOML 文件读取配置；文件不存在时返回 `None`
    pub fn from_toml_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;

        let config = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: path.display().to_string(),
            source,
        })?;

        Ok(Some(config))
    }

    /// 用环境变量覆盖已有配置
    pub fn with_env(self) -> Self {
        Self {
            host: std::env::var("HOST").unwrap_or(self.host),
            port: std::env::var("PORT").ok().and_then(|v| v.parse().ok()).unwrap_or(self.port),
            syllabus_dir: std::env::var("SYLLABUS_DIR").map(PathBuf::from).unwrap_or(self.syllabus_dir),
            views_dir: std::env::var("VIEWS_DIR").map(PathBuf::from).unwrap_or(self.views_dir),
            public_dir: std::env::var("PUBLIC_DIR").map(PathBuf::from).unwrap_or(self.public_dir),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    /// 监听地址字符串，如 `0.0.0.0:3000`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
