//! JSON Character Repository

use async_trait::async_trait;
use std::path::Path;

use super::{JsonRecordStore, CHARACTERS_FILE};
use crate::application::ports::{CharacterRepositoryPort, RecordStorePort, RepositoryError};
use crate::domain::character::{Character, CharacterFields, CharacterPatch, NewCharacter};

/// JSON Character Repository
pub struct JsonCharacterRepository {
    store: JsonRecordStore<Character>,
}

impl JsonCharacterRepository {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            store: JsonRecordStore::new(data_dir.as_ref().join(CHARACTERS_FILE)),
        }
    }
}

#[async_trait]
impl RecordStorePort<Character> for JsonCharacterRepository {
    async fn read_all(&self) -> Vec<Character> {
        self.store.read_all().await
    }

    async fn write_all(&self, records: &[Character]) -> Result<(), RepositoryError> {
        self.store.write_all(records).await
    }

    async fn find_by_id(&self, id: &str) -> Option<Character> {
        self.store.find_by_id(id).await
    }

    async fn create(&self, fields: CharacterFields) -> Result<Character, RepositoryError> {
        self.store.create(fields).await
    }

    async fn update(
        &self,
        id: &str,
        patch: CharacterPatch,
    ) -> Result<Option<Character>, RepositoryError> {
        self.store.update(id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        self.store.delete(id).await
    }
}

#[async_trait]
impl CharacterRepositoryPort for JsonCharacterRepository {
    async fn create_character(&self, input: NewCharacter) -> Result<Character, RepositoryError> {
        self.store.create(input.into_fields()).await
    }

    async fn find_by_novel(&self, novel_id: &str) -> Vec<Character> {
        self.store
            .read_all()
            .await
            .into_iter()
            .filter(|character| character.belongs_to(novel_id))
            .collect()
    }
}
