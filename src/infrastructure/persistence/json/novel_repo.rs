//! JSON Novel Repository
//!
//! Novel 聚合管理：在 Record Store 之上维护内嵌章节和字数不变量

use async_trait::async_trait;
use chrono::Utc;
use std::path::Path;

use super::{JsonRecordStore, NOVELS_FILE};
use crate::application::ports::{NovelRepositoryPort, RecordStorePort, RepositoryError};
use crate::domain::novel::{ChapterPatch, NewChapter, NewNovel, Novel, NovelFields, NovelPatch};
use crate::infrastructure::memory::KeyedLocks;

/// JSON Novel Repository
///
/// 章节操作在 查找 -> 修改 -> 写回 期间持有该小说的锁，
/// 同一小说上的并发章节修改不会互相覆盖
pub struct JsonNovelRepository {
    store: JsonRecordStore<Novel>,
    locks: KeyedLocks,
}

impl JsonNovelRepository {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            store: JsonRecordStore::new(data_dir.as_ref().join(NOVELS_FILE)),
            locks: KeyedLocks::new(),
        }
    }

    /// 在小说锁内加载、修改并写回章节
    ///
    /// `mutate` 返回 None 表示目标章节不存在，此时不写入
    async fn modify_chapters<F>(
        &self,
        novel_id: &str,
        mutate: F,
    ) -> Result<Option<Novel>, RepositoryError>
    where
        F: FnOnce(&mut Novel) -> Option<()> + Send,
    {
        let _guard = self.locks.lock(novel_id).await;

        let Some(mut novel) = self.store.find_by_id(novel_id).await else {
            return Ok(None);
        };
        if mutate(&mut novel).is_none() {
            return Ok(None);
        }

        self.store.update(novel_id, novel.chapters_patch()).await
    }
}

#[async_trait]
impl RecordStorePort<Novel> for JsonNovelRepository {
    async fn read_all(&self) -> Vec<Novel> {
        self.store.read_all().await
    }

    async fn write_all(&self, records: &[Novel]) -> Result<(), RepositoryError> {
        self.store.write_all(records).await
    }

    async fn find_by_id(&self, id: &str) -> Option<Novel> {
        self.store.find_by_id(id).await
    }

    async fn create(&self, fields: NovelFields) -> Result<Novel, RepositoryError> {
        self.store.create(fields).await
    }

    async fn update(&self, id: &str, patch: NovelPatch) -> Result<Option<Novel>, RepositoryError> {
        self.store.update(id, patch).await
    }

    async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        self.store.delete(id).await
    }
}

#[async_trait]
impl NovelRepositoryPort for JsonNovelRepository {
    async fn create_novel(&self, input: NewNovel) -> Result<Novel, RepositoryError> {
        self.store.create(input.into_fields()).await
    }

    async fn add_chapter(
        &self,
        novel_id: &str,
        input: NewChapter,
    ) -> Result<Option<Novel>, RepositoryError> {
        self.modify_chapters(novel_id, |novel| {
            novel.add_chapter(input, Utc::now());
            Some(())
        })
        .await
    }

    async fn update_chapter(
        &self,
        novel_id: &str,
        chapter_id: &str,
        patch: ChapterPatch,
    ) -> Result<Option<Novel>, RepositoryError> {
        self.modify_chapters(novel_id, |novel| {
            novel.update_chapter(chapter_id, patch, Utc::now()).map(|_| ())
        })
        .await
    }

    async fn delete_chapter(
        &self,
        novel_id: &str,
        chapter_id: &str,
    ) -> Result<Option<Novel>, RepositoryError> {
        self.modify_chapters(novel_id, |novel| novel.remove_chapter(chapter_id).map(|_| ()))
            .await
    }
}
