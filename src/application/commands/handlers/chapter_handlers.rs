//! Chapter Command Handlers
//!
//! 章节是 Novel 聚合的一部分，所有操作返回更新后的整本小说

use std::sync::Arc;

use crate::application::commands::{AddChapter, DeleteChapter, UpdateChapter};
use crate::application::error::ApplicationError;
use crate::application::ports::NovelRepositoryPort;
use crate::domain::novel::Novel;

/// 小说或章节不存在时使用的资源名
const NOVEL_OR_CHAPTER: &str = "Novel or chapter";

// ============================================================================
// AddChapter
// ============================================================================

/// AddChapter Handler
pub struct AddChapterHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl AddChapterHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(&self, command: AddChapter) -> Result<Novel, ApplicationError> {
        let novel = self
            .novel_repo
            .add_chapter(&command.novel_id, command.input)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Novel", &command.novel_id))?;

        tracing::info!(
            novel_id = %command.novel_id,
            chapters = novel.chapters().len(),
            word_count = novel.word_count(),
            "Chapter added"
        );

        Ok(novel)
    }
}

// ============================================================================
// UpdateChapter
// ============================================================================

/// UpdateChapter Handler
pub struct UpdateChapterHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl UpdateChapterHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(&self, command: UpdateChapter) -> Result<Novel, ApplicationError> {
        let novel = self
            .novel_repo
            .update_chapter(&command.novel_id, &command.chapter_id, command.patch)
            .await?
            .ok_or_else(|| ApplicationError::not_found(NOVEL_OR_CHAPTER, &command.chapter_id))?;

        tracing::info!(
            novel_id = %command.novel_id,
            chapter_id = %command.chapter_id,
            word_count = novel.word_count(),
            "Chapter updated"
        );

        Ok(novel)
    }
}

// ============================================================================
// DeleteChapter
// ============================================================================

/// DeleteChapter Handler
pub struct DeleteChapterHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl DeleteChapterHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(&self, command: DeleteChapter) -> Result<Novel, ApplicationError> {
        let novel = self
            .novel_repo
            .delete_chapter(&command.novel_id, &command.chapter_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(NOVEL_OR_CHAPTER, &command.chapter_id))?;

        tracing::info!(
            novel_id = %command.novel_id,
            chapter_id = %command.chapter_id,
            "Chapter deleted"
        );

        Ok(novel)
    }
}
