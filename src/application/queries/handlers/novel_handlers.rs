//! Novel Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::NovelRepositoryPort;
use crate::application::queries::{GetNovel, ListNovels};
use crate::domain::novel::Novel;

/// GetNovel Handler
pub struct GetNovelHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl GetNovelHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(&self, query: GetNovel) -> Result<Novel, ApplicationError> {
        self.novel_repo
            .find_by_id(&query.novel_id)
            .await
            .ok_or_else(|| ApplicationError::not_found("Novel", query.novel_id))
    }
}

/// ListNovels Handler
pub struct ListNovelsHandler {
    novel_repo: Arc<dyn NovelRepositoryPort>,
}

impl ListNovelsHandler {
    pub fn new(novel_repo: Arc<dyn NovelRepositoryPort>) -> Self {
        Self { novel_repo }
    }

    pub async fn handle(&self, _query: ListNovels) -> Result<Vec<Novel>, ApplicationError> {
        Ok(self.novel_repo.read_all().await)
    }
}
