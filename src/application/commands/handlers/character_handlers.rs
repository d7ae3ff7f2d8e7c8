//! Character Command Handlers

use std::sync::Arc;

use crate::application::commands::{CreateCharacter, DeleteCharacter, UpdateCharacter};
use crate::application::error::ApplicationError;
use crate::application::ports::CharacterRepositoryPort;
use crate::domain::character::Character;
use crate::domain::Record;

/// CreateCharacter Handler
pub struct CreateCharacterHandler {
    character_repo: Arc<dyn CharacterRepositoryPort>,
}

impl CreateCharacterHandler {
    pub fn new(character_repo: Arc<dyn CharacterRepositoryPort>) -> Self {
        Self { character_repo }
    }

    pub async fn handle(&self, command: CreateCharacter) -> Result<Character, ApplicationError> {
        let character = self.character_repo.create_character(command.input).await?;

        tracing::info!(
            character_id = %character.id(),
            name = %character.name(),
            "Character created"
        );

        Ok(character)
    }
}

/// UpdateCharacter Handler
pub struct UpdateCharacterHandler {
    character_repo: Arc<dyn CharacterRepositoryPort>,
}

impl UpdateCharacterHandler {
    pub fn new(character_repo: Arc<dyn CharacterRepositoryPort>) -> Self {
        Self { character_repo }
    }

    pub async fn handle(&self, command: UpdateCharacter) -> Result<Character, ApplicationError> {
        let character = self
            .character_repo
            .update(&command.character_id, command.patch)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Character", &command.character_id))?;

        tracing::info!(character_id = %character.id(), "Character updated");

        Ok(character)
    }
}

/// DeleteCharacter Handler
pub struct DeleteCharacterHandler {
    character_repo: Arc<dyn CharacterRepositoryPort>,
}

impl DeleteCharacterHandler {
    pub fn new(character_repo: Arc<dyn CharacterRepositoryPort>) -> Self {
        Self { character_repo }
    }

    pub async fn handle(&self, command: DeleteCharacter) -> Result<(), ApplicationError> {
        if !self.character_repo.delete(&command.character_id).await? {
            return Err(ApplicationError::not_found("Character", command.character_id));
        }

        tracing::info!(character_id = %command.character_id, "Character deleted");

        Ok(())
    }
}
