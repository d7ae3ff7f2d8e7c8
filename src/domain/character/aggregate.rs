//! Character Context - Aggregate Root

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CharacterRole;
use crate::domain::record::{non_empty_or, null_as_default};
use crate::domain::{Record, RecordId};

pub const DEFAULT_CHARACTER_NAME: &str = "Unnamed Character";

/// 角色
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    personality: String,
    #[serde(default, deserialize_with = "null_as_default")]
    background: String,
    #[serde(default, deserialize_with = "null_as_default")]
    appearance: String,
    #[serde(default, deserialize_with = "null_as_default")]
    role: CharacterRole,
    /// 所属小说，可为空，也可能指向已删除的小说
    #[serde(default)]
    novel_id: Option<RecordId>,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// 创建角色的输入
#[derive(Debug, Clone, Default)]
pub struct NewCharacter {
    pub name: Option<String>,
    pub description: Option<String>,
    pub personality: Option<String>,
    pub background: Option<String>,
    pub appearance: Option<String>,
    pub role: Option<CharacterRole>,
    pub novel_id: Option<String>,
}

impl NewCharacter {
    /// 填充默认值；空字符串的 novel_id 视为未关联
    pub fn into_fields(self) -> CharacterFields {
        CharacterFields {
            name: non_empty_or(self.name, DEFAULT_CHARACTER_NAME),
            description: self.description.unwrap_or_default(),
            personality: self.personality.unwrap_or_default(),
            background: self.background.unwrap_or_default(),
            appearance: self.appearance.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            novel_id: self
                .novel_id
                .filter(|id| !id.is_empty())
                .map(RecordId::from),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CharacterFields {
    pub name: String,
    pub description: String,
    pub personality: String,
    pub background: String,
    pub appearance: String,
    pub role: CharacterRole,
    pub novel_id: Option<RecordId>,
}

/// 角色补丁（浅合并）
///
/// `novel_id: Some(None)` 表示显式清空关联
#[derive(Debug, Clone, Default)]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub personality: Option<String>,
    pub background: Option<String>,
    pub appearance: Option<String>,
    pub role: Option<CharacterRole>,
    pub novel_id: Option<Option<RecordId>>,
}

impl Character {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn personality(&self) -> &str {
        &self.personality
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn appearance(&self) -> &str {
        &self.appearance
    }

    pub fn role(&self) -> CharacterRole {
        self.role
    }

    pub fn novel_id(&self) -> Option<&RecordId> {
        self.novel_id.as_ref()
    }

    /// 是否属于指定小说（精确匹配）
    pub fn belongs_to(&self, novel_id: &str) -> bool {
        self.novel_id.as_ref().map(RecordId::as_str) == Some(novel_id)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

impl Record for Character {
    type Fields = CharacterFields;
    type Patch = CharacterPatch;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_fields(id: RecordId, created_at: DateTime<Utc>, fields: CharacterFields) -> Self {
        Self {
            id,
            name: fields.name,
            description: fields.description,
            personality: fields.personality,
            background: fields.background,
            appearance: fields.appearance,
            role: fields.role,
            novel_id: fields.novel_id,
            created_at,
            updated_at: None,
        }
    }

    fn apply_patch(&mut self, patch: CharacterPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(personality) = patch.personality {
            self.personality = personality;
        }
        if let Some(background) = patch.background {
            self.background = background;
        }
        if let Some(appearance) = patch.appearance {
            self.appearance = appearance;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(novel_id) = patch.novel_id {
            self.novel_id = novel_id;
        }
    }

    fn touch(&mut self, at: DateTime<Utc>) {
        self.updated_at = Some(at);
    }
}
