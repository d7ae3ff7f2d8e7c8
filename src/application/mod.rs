//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Record Store、Novel / Character Repository）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Novel commands
    AddChapter,
    CreateNovel,
    DeleteChapter,
    DeleteNovel,
    UpdateChapter,
    UpdateNovel,
    // Character commands
    CreateCharacter,
    DeleteCharacter,
    UpdateCharacter,
    // Handlers
    handlers::{
        AddChapterHandler, CreateCharacterHandler, CreateNovelHandler, DeleteChapterHandler,
        DeleteCharacterHandler, DeleteNovelHandler, UpdateChapterHandler, UpdateCharacterHandler,
        UpdateNovelHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{CharacterRepositoryPort, NovelRepositoryPort, RecordStorePort, RepositoryError};

pub use queries::{
    // Novel queries
    GetNovel,
    ListNovels,
    // Character queries
    GetCharacter,
    ListCharacters,
    // Handlers
    handlers::{GetCharacterHandler, GetNovelHandler, ListCharactersHandler, ListNovelsHandler},
};
