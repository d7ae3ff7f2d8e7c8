//! Character HTTP Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;

use crate::application::{
    CreateCharacter, DeleteCharacter, GetCharacter, ListCharacters, UpdateCharacter,
};
use crate::domain::character::Character;
use crate::infrastructure::http::dto::{
    CreateCharacterRequest, ListCharactersParams, MessageResponse, UpdateCharacterRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::Json;
use crate::infrastructure::http::state::AppState;

/// 获取角色列表，`?novelId=` 过滤指定小说
pub async fn list_characters(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListCharactersParams>,
) -> Result<Json<Vec<Character>>, ApiError> {
    let query = ListCharacters {
        novel_id: params.novel_id,
    };
    let characters = state.list_characters_handler.handle(query).await?;
    Ok(Json(characters))
}

/// 获取角色详情
pub async fn get_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Character>, ApiError> {
    let character = state
        .get_character_handler
        .handle(GetCharacter { character_id: id })
        .await?;
    Ok(Json(character))
}

/// 创建角色
pub async fn create_character(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCharacterRequest>,
) -> Result<(StatusCode, Json<Character>), ApiError> {
    let command = CreateCharacter { input: req.into() };
    let character = state.create_character_handler.handle(command).await?;
    Ok((StatusCode::CREATED, Json(character)))
}

/// 更新角色
pub async fn update_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCharacterRequest>,
) -> Result<Json<Character>, ApiError> {
    let command = UpdateCharacter {
        character_id: id,
        patch: req.into(),
    };
    let character = state.update_character_handler.handle(command).await?;
    Ok(Json(character))
}

/// 删除角色
pub async fn delete_character(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .delete_character_handler
        .handle(DeleteCharacter { character_id: id })
        .await?;
    Ok(Json(MessageResponse::new("Character deleted successfully")))
}
