//! `/book/*` 路由
//!
//! 与 `/api/*` 不同，这里大纲加载失败返回 500，年级不存在返回 404

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};
use tracing::{error, info, warn};

use crate::api::{ApiError, AppState};
use crate::error::BookError;
use crate::models::{CustomBook, GenerateBookRequest, SubjectOutline};
use crate::services::{assemble, outline_for};
use crate::utils::logging::truncate_text;

const CLASS_NOT_FOUND: &str = "Class not found";
const LOAD_SUBJECTS_FAILED: &str = "Failed to load subjects";
const GENERATE_FAILED: &str = "Failed to generate book";

/// `GET /book/subjects/:board/:class` - 科目目录
pub async fn get_book_subjects(
    State(state): State<AppState>,
    Path((board, class_id)): Path<(String, String)>,
) -> Result<Json<Vec<SubjectOutline>>, ApiError> {
    let doc = state.store.load(&board).await.map_err(|e| {
        error!("[书籍目录] 加载考试局 {} 的大纲失败: {}", board, e);
        ApiError::internal(LOAD_SUBJECTS_FAILED)
    })?;

    outline_for(&doc, &class_id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found(CLASS_NOT_FOUND))
}

/// `POST /book/generate` - 生成自定义书籍
///
/// 请求体缺少字段或类型不对时直接返回 500，不返回字段级别的诊断
pub async fn generate_book(
    State(state): State<AppState>,
    payload: Result<Json<GenerateBookRequest>, JsonRejection>,
) -> Result<Json<CustomBook>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("[生成书籍] 请求体无效: {}", truncate_text(&rejection.body_text(), 200));
        ApiError::internal(GENERATE_FAILED)
    })?;

    let doc = state.store.load(&request.board).await.map_err(|e| {
        error!("[生成书籍] 加载考试局 {} 的大纲失败: {}", request.board, e);
        ApiError::internal(GENERATE_FAILED)
    })?;

    let book = assemble(&doc, &request.board, &request.class, &request.selections).map_err(
        |e| match e {
            BookError::ClassNotFound { .. } => ApiError::not_found(CLASS_NOT_FOUND),
        },
    )?;

    info!(
        "📘 生成书籍: {} ({}), {} 个科目",
        book.title,
        book.board,
        book.subjects.len()
    );

    Ok(Json(book))
}
