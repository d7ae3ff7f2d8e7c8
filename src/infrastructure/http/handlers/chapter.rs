//! Chapter HTTP Handlers
//!
//! 章节接口均返回更新后的整本小说

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use crate::application::{AddChapter, DeleteChapter, UpdateChapter};
use crate::domain::novel::Novel;
use crate::infrastructure::http::dto::ChapterRequest;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::Json;
use crate::infrastructure::http::state::AppState;

/// 追加章节
pub async fn add_chapter(
    State(state): State<Arc<AppState>>,
    Path(novel_id): Path<String>,
    Json(req): Json<ChapterRequest>,
) -> Result<(StatusCode, Json<Novel>), ApiError> {
    let command = AddChapter {
        novel_id,
        input: req.into(),
    };
    let novel = state.add_chapter_handler.handle(command).await?;
    Ok((StatusCode::CREATED, Json(novel)))
}

/// 更新章节
pub async fn update_chapter(
    State(state): State<Arc<AppState>>,
    Path((novel_id, chapter_id)): Path<(String, String)>,
    Json(req): Json<ChapterRequest>,
) -> Result<Json<Novel>, ApiError> {
    let command = UpdateChapter {
        novel_id,
        chapter_id,
        patch: req.into(),
    };
    let novel = state.update_chapter_handler.handle(command).await?;
    Ok(Json(novel))
}

/// 删除章节
pub async fn delete_chapter(
    State(state): State<Arc<AppState>>,
    Path((novel_id, chapter_id)): Path<(String, String)>,
) -> Result<Json<Novel>, ApiError> {
    let command = DeleteChapter {
        novel_id,
        chapter_id,
    };
    let novel = state.delete_chapter_handler.handle(command).await?;
    Ok(Json(novel))
}
