//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    AddChapterHandler, CreateCharacterHandler, CreateNovelHandler, DeleteChapterHandler,
    DeleteCharacterHandler, DeleteNovelHandler, UpdateChapterHandler, UpdateCharacterHandler,
    UpdateNovelHandler,
    // Query handlers
    GetCharacterHandler, GetNovelHandler, ListCharactersHandler, ListNovelsHandler,
    // Ports
    CharacterRepositoryPort, NovelRepositoryPort,
};

/// 应用状态
///
/// 仓储实例显式注入，所有 handler 共享同一组仓储
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_novel_handler: CreateNovelHandler,
    pub update_novel_handler: UpdateNovelHandler,
    pub delete_novel_handler: DeleteNovelHandler,
    pub add_chapter_handler: AddChapterHandler,
    pub update_chapter_handler: UpdateChapterHandler,
    pub delete_chapter_handler: DeleteChapterHandler,
    pub create_character_handler: CreateCharacterHandler,
    pub update_character_handler: UpdateCharacterHandler,
    pub delete_character_handler: DeleteCharacterHandler,

    // ========== Query Handlers ==========
    pub get_novel_handler: GetNovelHandler,
    pub list_novels_handler: ListNovelsHandler,
    pub get_character_handler: GetCharacterHandler,
    pub list_characters_handler: ListCharactersHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        novel_repo: Arc<dyn NovelRepositoryPort>,
        character_repo: Arc<dyn CharacterRepositoryPort>,
    ) -> Self {
        Self {
            // Command handlers
            create_novel_handler: CreateNovelHandler::new(novel_repo.clone()),
            update_novel_handler: UpdateNovelHandler::new(novel_repo.clone()),
            delete_novel_handler: DeleteNovelHandler::new(novel_repo.clone()),
            add_chapter_handler: AddChapterHandler::new(novel_repo.clone()),
            update_chapter_handler: UpdateChapterHandler::new(novel_repo.clone()),
            delete_chapter_handler: DeleteChapterHandler::new(novel_repo.clone()),
            create_character_handler: CreateCharacterHandler::new(character_repo.clone()),
            update_character_handler: UpdateCharacterHandler::new(character_repo.clone()),
            delete_character_handler: DeleteCharacterHandler::new(character_repo.clone()),

            // Query handlers
            get_novel_handler: GetNovelHandler::new(novel_repo.clone()),
            list_novels_handler: ListNovelsHandler::new(novel_repo),
            get_character_handler: GetCharacterHandler::new(character_repo.clone()),
            list_characters_handler: ListCharactersHandler::new(character_repo),
        }
    }
}
