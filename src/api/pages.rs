//! 页面路由：固定的 HTML 页面，不注入任何数据

use axum::response::Html;
use phf::phf_map;
use tokio::fs;
use tracing::error;

use crate::api::{ApiError, AppState};

/// 路径 → 模板名（`{views_dir}/{模板名}.html`）
pub static PAGES: phf::Map<&'static str, &'static str> = phf_map! {
    "/" => "Welcomepage",
    "/board" => "board",
    "/paper" => "classes",
    "/group" => "groups",
    "/books" => "books",
    "/questions" => "questions",
    "/pape" => "paper-generator",
    "/courses" => "Courses",
    "/ans" => "ans",
};

/// 读取并返回页面模板
pub async fn render_page(state: AppState, template: &'static str) -> Result<Html<String>, ApiError> {
    let path = state.views_dir.join(format!("{}.html", template));

    fs::read_to_string(&path).await.map(Html).map_err(|e| {
        error!("渲染页面失败 {}: {}", path.display(), e);
        ApiError::internal("Failed to render page")
    })
}
