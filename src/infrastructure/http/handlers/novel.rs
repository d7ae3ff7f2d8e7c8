//! Novel HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;

use crate::application::{CreateNovel, DeleteNovel, GetNovel, ListNovels, UpdateNovel};
use crate::domain::novel::Novel;
use crate::infrastructure::http::dto::{CreateNovelRequest, MessageResponse, UpdateNovelRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::Json;
use crate::infrastructure::http::state::AppState;

/// 获取小说列表
pub async fn list_novels(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Novel>>, ApiError> {
    let novels = state.list_novels_handler.handle(ListNovels).await?;
    Ok(Json(novels))
}

/// 获取小说详情（含全部章节）
pub async fn get_novel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Novel>, ApiError> {
    let novel = state
        .get_novel_handler
        .handle(GetNovel { novel_id: id })
        .await?;
    Ok(Json(novel))
}

/// 创建小说
pub async fn create_novel(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateNovelRequest>,
) -> Result<(StatusCode, Json<Novel>), ApiError> {
    let command = CreateNovel { input: req.into() };
    let novel = state.create_novel_handler.handle(command).await?;
    Ok((StatusCode::CREATED, Json(novel)))
}

/// 更新小说元数据
pub async fn update_novel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateNovelRequest>,
) -> Result<Json<Novel>, ApiError> {
    let command = UpdateNovel {
        novel_id: id,
        patch: req.into(),
    };
    let novel = state.update_novel_handler.handle(command).await?;
    Ok(Json(novel))
}

/// 删除小说（不删除其角色）
pub async fn delete_novel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .delete_novel_handler
        .handle(DeleteNovel { novel_id: id })
        .await?;
    Ok(Json(MessageResponse::new("Novel deleted successfully")))
}
