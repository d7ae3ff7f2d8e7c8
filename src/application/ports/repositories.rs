//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（JSON 文件）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::character::{Character, NewCharacter};
use crate::domain::novel::{ChapterPatch, NewChapter, NewNovel, Novel};
use crate::domain::Record;

/// Repository 错误
///
/// 只用于写入失败等意外情况；记录不存在通过 `Option` / `bool` 表达
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),

    /// 存储文件中有无法解析的记录，拒绝整体覆盖以免丢失
    #[error("{count} stored record(s) in {path} could not be decoded, refusing to overwrite")]
    UndecodableRecords { path: String, count: usize },
}

// ============================================================================
// Record Store
// ============================================================================

/// 通用记录存储端口
///
/// 每次变更都会重新读取整个集合、在内存中修改、再整体写回
#[async_trait]
pub trait RecordStorePort<R: Record>: Send + Sync {
    /// 读取整个集合；存储缺失或损坏时返回空集合，从不报错
    async fn read_all(&self) -> Vec<R>;

    /// 用给定集合整体覆盖存储
    async fn write_all(&self, records: &[R]) -> Result<(), RepositoryError>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: &str) -> Option<R>;

    /// 分配新 ID 和创建时间，追加并持久化
    async fn create(&self, fields: R::Fields) -> Result<R, RepositoryError>;

    /// 浅合并补丁并设置更新时间；记录不存在时返回 None
    async fn update(&self, id: &str, patch: R::Patch) -> Result<Option<R>, RepositoryError>;

    /// 删除记录，返回是否确实删除
    async fn delete(&self, id: &str) -> Result<bool, RepositoryError>;
}

// ============================================================================
// Novel Repository (Aggregate Manager)
// ============================================================================

/// Novel Repository Port
///
/// 在 Record Store 之上管理小说及其内嵌章节，维护字数不变量。
/// 章节操作在小说或章节不存在时返回 None，且不写入存储。
#[async_trait]
pub trait NovelRepositoryPort: RecordStorePort<Novel> {
    /// 创建小说（填充默认值，章节为空，字数为 0，状态为 draft）
    async fn create_novel(&self, input: NewNovel) -> Result<Novel, RepositoryError>;

    /// 追加章节
    async fn add_chapter(
        &self,
        novel_id: &str,
        input: NewChapter,
    ) -> Result<Option<Novel>, RepositoryError>;

    /// 更新章节
    async fn update_chapter(
        &self,
        novel_id: &str,
        chapter_id: &str,
        patch: ChapterPatch,
    ) -> Result<Option<Novel>, RepositoryError>;

    /// 删除章节
    async fn delete_chapter(
        &self,
        novel_id: &str,
        chapter_id: &str,
    ) -> Result<Option<Novel>, RepositoryError>;
}

// ============================================================================
// Character Repository
// ============================================================================

/// Character Repository Port
#[async_trait]
pub trait CharacterRepositoryPort: RecordStorePort<Character> {
    /// 创建角色（填充默认值）
    async fn create_character(&self, input: NewCharacter) -> Result<Character, RepositoryError>;

    /// 按小说 ID 精确过滤，保持存储顺序
    async fn find_by_novel(&self, novel_id: &str) -> Vec<Character>;
}
