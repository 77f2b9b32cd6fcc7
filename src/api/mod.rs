//! HTTP 路由层
//!
//! - `/api/*`：大纲查询，宽松降级为 `[]`
//! - `/book/*`：科目目录与自定义书籍，错误返回 `{ error }`
//! - 页面路由：固定 HTML 页面
//! - 其余路径：`public` 目录下的静态资源

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use std::path::{Path, PathBuf};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::Config;
use crate::models::SyllabusStore;

pub mod book;
pub mod error;
pub mod pages;
pub mod syllabus;

pub use error::{ApiError, ErrorBody};

/// 所有路由共享的状态（只读）
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: SyllabusStore,
    pub views_dir: PathBuf,
}

impl AppState {
    pub fn new(store: SyllabusStore, views_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            views_dir: views_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            SyllabusStore::new(config.syllabus_dir.clone()),
            config.views_dir.clone(),
        )
    }
}

/// 创建应用路由
pub fn create_router(state: AppState, public_dir: &Path) -> Router {
    let mut router = Router::new()
        .route("/api/data/:board", get(syllabus::get_board_data))
        .route("/api/subjects/:board/:class", get(syllabus::get_subjects))
        .route(
            "/api/subjects/:board/:class/:group",
            get(syllabus::get_group_subjects),
        )
        .route(
            "/api/chapters/:board/:class/:subject",
            get(syllabus::get_chapters),
        )
        .route("/book/subjects/:board/:class", get(book::get_book_subjects))
        .route("/book/generate", post(book::generate_book));

    for (path, template) in pages::PAGES.entries() {
        let template: &'static str = *template;
        router = router.route(
            *path,
            get(move |State(state): State<AppState>| pages::render_page(state, template)),
        );
    }

    router
        .fallback_service(ServeDir::new(public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
