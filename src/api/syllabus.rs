//! `/api/*` 路由
//!
//! 这些接口对数据源错误是宽松的：大纲缺失或损坏时返回 `[]`，
//! 年级、科目、分科找不到时同样返回 `[]`

use axum::{
    extract::{Path, State},
    response::Json,
};

use crate::api::AppState;
use crate::models::{ChapterSummary, SubjectEntry, SyllabusDocument};
use crate::services::{chapters_for, subjects_for, subjects_for_group};

/// `GET /api/data/:board` - 整份大纲
pub async fn get_board_data(
    State(state): State<AppState>,
    Path(board): Path<String>,
) -> Json<SyllabusDocument> {
    Json(state.store.load_or_empty(&board).await)
}

/// `GET /api/subjects/:board/:class` - 年级的全部科目
pub async fn get_subjects(
    State(state): State<AppState>,
    Path((board, class_id)): Path<(String, String)>,
) -> Json<Vec<SubjectEntry>> {
    let doc = state.store.load_or_empty(&board).await;
    Json(subjects_for(&doc, &class_id))
}

/// `GET /api/subjects/:board/:class/:group` - 按分科过滤的科目
pub async fn get_group_subjects(
    State(state): State<AppState>,
    Path((board, class_id, group)): Path<(String, String, String)>,
) -> Json<Vec<SubjectEntry>> {
    let doc = state.store.load_or_empty(&board).await;
    Json(subjects_for_group(&doc, &class_id, &group))
}

/// `GET /api/chapters/:board/:class/:subject` - 科目的章节列表
///
/// `Path` 提取时已经完成 URL 解码（如 `Computer%20Science`）
pub async fn get_chapters(
    State(state): State<AppState>,
    Path((board, class_id, subject)): Path<(String, String, String)>,
) -> Json<Vec<ChapterSummary>> {
    let doc = state.store.load_or_empty(&board).await;
    Json(chapters_for(&doc, &class_id, &subject))
}
