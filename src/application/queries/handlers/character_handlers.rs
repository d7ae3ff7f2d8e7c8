//! Character Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::CharacterRepositoryPort;
use crate::application::queries::{GetCharacter, ListCharacters};
use crate::domain::character::Character;

/// GetCharacter Handler
pub struct GetCharacterHandler {
    character_repo: Arc<dyn CharacterRepositoryPort>,
}

impl GetCharacterHandler {
    pub fn new(character_repo: Arc<dyn CharacterRepositoryPort>) -> Self {
        Self { character_repo }
    }

    pub async fn handle(&self, query: GetCharacter) -> Result<Character, ApplicationError> {
        self.character_repo
            .find_by_id(&query.character_id)
            .await
            .ok_or_else(|| ApplicationError::not_found("Character", query.character_id))
    }
}

/// ListCharacters Handler
pub struct ListCharactersHandler {
    character_repo: Arc<dyn CharacterRepositoryPort>,
}

impl ListCharactersHandler {
    pub fn new(character_repo: Arc<dyn CharacterRepositoryPort>) -> Self {
        Self { character_repo }
    }

    pub async fn handle(&self, query: ListCharacters) -> Result<Vec<Character>, ApplicationError> {
        // 空字符串与未指定一样，返回全部角色
        let characters = match query.novel_id.filter(|id| !id.is_empty()) {
            Some(novel_id) => self.character_repo.find_by_novel(&novel_id).await,
            None => self.character_repo.read_all().await,
        };
        Ok(characters)
    }
}
