//! Novel Context - Entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::record::{non_empty_or, null_as_default};
use crate::domain::{count_words, RecordId};

/// 章节 - 内嵌于 Novel，没有独立生命周期
///
/// 不变量:
/// - id 在所属 Novel 内唯一
/// - word_count 总是等于 content 的词数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    word_count: usize,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// 新章节输入
#[derive(Debug, Clone, Default)]
pub struct NewChapter {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// 章节补丁（浅合并）
#[derive(Debug, Clone, Default)]
pub struct ChapterPatch {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Chapter {
    /// 创建章节
    ///
    /// `position` 是从 1 开始的章节序号，仅用于默认标题
    pub(crate) fn new(position: usize, input: NewChapter, now: DateTime<Utc>) -> Self {
        let content = input.content.unwrap_or_default();
        Self {
            id: RecordId::generate(),
            title: non_empty_or(input.title, &format!("Chapter {}", position)),
            word_count: count_words(&content),
            content,
            created_at: now,
            updated_at: None,
        }
    }

    pub(crate) fn apply_patch(&mut self, patch: ChapterPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        self.word_count = count_words(&self.content);
        self.updated_at = Some(now);
    }

    // Getters
    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}
