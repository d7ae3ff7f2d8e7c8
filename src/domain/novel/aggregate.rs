//! Novel Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Chapter, ChapterPatch, NewChapter, NovelStatus};
use crate::domain::record::{non_empty_or, null_as_default};
use crate::domain::{Record, RecordId};

pub const DEFAULT_NOVEL_TITLE: &str = "Untitled Novel";

/// Novel 聚合根
///
/// 不变量:
/// - 章节只属于一个 Novel，按插入顺序排列
/// - 任何章节变更后 word_count == 所有章节 word_count 之和
/// - 删除章节不会重排其余章节的标题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Novel {
    id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    genre: String,
    #[serde(default, deserialize_with = "null_as_default")]
    chapters: Vec<Chapter>,
    #[serde(default, deserialize_with = "null_as_default")]
    word_count: usize,
    #[serde(default, deserialize_with = "null_as_default")]
    status: NovelStatus,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// 创建小说的输入（字段可缺省）
#[derive(Debug, Clone, Default)]
pub struct NewNovel {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
}

impl NewNovel {
    /// 填充默认值，章节为空、字数为 0、状态为草稿
    pub fn into_fields(self) -> NovelFields {
        NovelFields {
            title: non_empty_or(self.title, DEFAULT_NOVEL_TITLE),
            description: self.description.unwrap_or_default(),
            genre: self.genre.unwrap_or_default(),
            chapters: Vec::new(),
            word_count: 0,
            status: NovelStatus::Draft,
        }
    }
}

/// 小说实体字段（不含 id / 时间戳）
#[derive(Debug, Clone)]
pub struct NovelFields {
    pub title: String,
    pub description: String,
    pub genre: String,
    pub chapters: Vec<Chapter>,
    pub word_count: usize,
    pub status: NovelStatus,
}

/// 小说补丁（浅合并）
///
/// `chapters` / `word_count` 只由章节操作写入，HTTP 层不暴露
#[derive(Debug, Clone, Default)]
pub struct NovelPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub status: Option<NovelStatus>,
    pub chapters: Option<Vec<Chapter>>,
    pub word_count: Option<usize>,
}

impl Novel {
    /// 追加章节并重算总字数
    pub fn add_chapter(&mut self, input: NewChapter, now: DateTime<Utc>) -> &Chapter {
        let chapter = Chapter::new(self.chapters.len() + 1, input, now);
        self.chapters.push(chapter);
        self.recalculate_word_count();
        &self.chapters[self.chapters.len() - 1]
    }

    /// 合并章节补丁并重算字数，章节不存在时返回 None 且不做任何修改
    pub fn update_chapter(
        &mut self,
        chapter_id: &str,
        patch: ChapterPatch,
        now: DateTime<Utc>,
    ) -> Option<&Chapter> {
        let index = self.chapter_index(chapter_id)?;
        self.chapters[index].apply_patch(patch, now);
        self.recalculate_word_count();
        Some(&self.chapters[index])
    }

    /// 移除章节并重算总字数，章节不存在时返回 None
    pub fn remove_chapter(&mut self, chapter_id: &str) -> Option<Chapter> {
        let index = self.chapter_index(chapter_id)?;
        let removed = self.chapters.remove(index);
        self.recalculate_word_count();
        Some(removed)
    }

    /// 章节相关字段的补丁，用于回写存储
    pub fn chapters_patch(&self) -> NovelPatch {
        NovelPatch {
            chapters: Some(self.chapters.clone()),
            word_count: Some(self.word_count),
            ..NovelPatch::default()
        }
    }

    fn chapter_index(&self, chapter_id: &str) -> Option<usize> {
        self.chapters
            .iter()
            .position(|c| c.id().as_str() == chapter_id)
    }

    fn recalculate_word_count(&mut self) {
        self.word_count = self.chapters.iter().map(Chapter::word_count).sum();
    }

    // Getters
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        self.chapter_index(chapter_id).map(|i| &self.chapters[i])
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn status(&self) -> NovelStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Record for Novel {
    type Fields = NovelFields;
    type Patch = NovelPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_fields(id: RecordId, created_at: DateTime<Utc>, fields: NovelFields) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            genre: fields.genre,
            chapters: fields.chapters,
            word_count: fields.word_count,
            status: fields.status,
            created_at,
            updated_at: None,
        }
    }

    fn apply_patch(&mut self, patch: NovelPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(chapters) = patch.chapters {
            self.chapters = chapters;
        }
        if let Some(word_count) = patch.word_count {
            self.word_count = word_count;
        }
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}
