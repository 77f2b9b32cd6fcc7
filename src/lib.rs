//! # Syllabus Server
//!
//! 一个提供教学大纲数据（考试局、年级、科目、章节、题库）的 Web 后端，
//! 数据来自静态 JSON 文件，并支持按用户选择生成"自定义书籍"。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/syllabus` - 大纲结构：年级 → 科目 → 章节
//! - `models/book` - 自定义书籍的请求与结果
//! - `models/loaders` - `SyllabusStore`，每次请求重新读取 `{board}_board_syllabus.json`
//!
//! ### ② 业务能力层（Services）
//! - `subject_filter` - 按年级、分科筛选科目
//! - `chapter_projector` - 章节摘要与科目目录
//! - `book_assembler` - 组装自定义书籍
//!
//! ### ③ 路由层（Api）
//! - `api/` - axum 路由，把错误统一转换成 `{ error }` 响应
//!
//! ### ④ 应用层
//! - `App` - 加载配置、绑定端口、启动服务
//!
//! ## 模块结构

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use api::{create_router, AppState};
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult, BookError, ConfigError, SyllabusError};
pub use models::{CustomBook, SyllabusDocument, SyllabusStore};
