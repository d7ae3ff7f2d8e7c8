//! Novel Context - Value Objects

use serde::{Deserialize, Serialize};

/// 小说写作状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NovelStatus {
    /// 草稿（创建时的初始状态）
    #[default]
    Draft,
    /// 写作中
    InProgress,
    /// 已完成
    Completed,
}

impl NovelStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NovelStatus::Draft => "draft",
            NovelStatus::InProgress => "in_progress",
            NovelStatus::Completed => "completed",
        }
    }
}

impl std::fmt::Display for NovelStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
