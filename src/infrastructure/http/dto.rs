//! Data Transfer Objects
//!
//! 请求体字段均可缺省，未知字段被忽略；响应直接序列化领域记录

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::character::{CharacterPatch, CharacterRole, NewCharacter};
use crate::domain::novel::{ChapterPatch, NewChapter, NewNovel, NovelPatch, NovelStatus};

/// 删除成功等场景的消息响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 区分“字段缺省”和“显式 null”
fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// 枚举字段的空字符串和 null 视为未提供
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(serde_json::Value::String(s)) if s.is_empty() => Ok(None),
        Some(value) => T::deserialize(value).map(Some).map_err(D::Error::custom),
    }
}

// ============================================================================
// Novel DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreateNovelRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
}

impl From<CreateNovelRequest> for NewNovel {
    fn from(req: CreateNovelRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            genre: req.genre,
        }
    }
}

/// 更新小说请求，章节与字数只能通过章节接口修改
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateNovelRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub status: Option<NovelStatus>,
}

impl From<UpdateNovelRequest> for NovelPatch {
    fn from(req: UpdateNovelRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            genre: req.genre,
            status: req.status,
            ..NovelPatch::default()
        }
    }
}

// ============================================================================
// Chapter DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChapterRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl From<ChapterRequest> for NewChapter {
    fn from(req: ChapterRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
        }
    }
}

impl From<ChapterRequest> for ChapterPatch {
    fn from(req: ChapterRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
        }
    }
}

// ============================================================================
// Character DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateCharacterRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub personality: Option<String>,
    pub background: Option<String>,
    pub appearance: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub role: Option<CharacterRole>,
    pub novel_id: Option<String>,
}

impl From<CreateCharacterRequest> for NewCharacter {
    fn from(req: CreateCharacterRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            personality: req.personality,
            background: req.background,
            appearance: req.appearance,
            role: req.role,
            novel_id: req.novel_id,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateCharacterRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub personality: Option<String>,
    pub background: Option<String>,
    pub appearance: Option<String>,
    #[serde(deserialize_with = "blank_as_none")]
    pub role: Option<CharacterRole>,
    #[serde(deserialize_with = "explicit_null")]
    pub novel_id: Option<Option<String>>,
}

impl From<UpdateCharacterRequest> for CharacterPatch {
    fn from(req: UpdateCharacterRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            personality: req.personality,
            background: req.background,
            appearance: req.appearance,
            role: req.role,
            novel_id: req.novel_id.map(|id| id.map(Into::into)),
        }
    }
}

/// 角色列表查询参数
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCharactersParams {
    pub novel_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_character_null_vs_missing() {
        let missing: UpdateCharacterRequest = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert!(missing.novel_id.is_none());

        let cleared: UpdateCharacterRequest = serde_json::from_str(r#"{"novelId":null}"#).unwrap();
        assert_eq!(cleared.novel_id, Some(None));

        let set: UpdateCharacterRequest = serde_json::from_str(r#"{"novelId":"n1"}"#).unwrap();
        assert_eq!(set.novel_id, Some(Some("n1".to_string())));
    }

    #[test]
    fn test_update_novel_ignores_derived_fields() {
        let req: UpdateNovelRequest =
            serde_json::from_str(r#"{"genre":"saga","wordCount":99,"chapters":[]}"#).unwrap();
        let patch = NovelPatch::from(req);
        assert_eq!(patch.genre.as_deref(), Some("saga"));
        assert!(patch.word_count.is_none());
        assert!(patch.chapters.is_none());
    }

    #[test]
    fn test_empty_body_object_accepted() {
        let req: CreateNovelRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());
    }

    #[test]
    fn test_blank_role_falls_back() {
        let req: CreateCharacterRequest = serde_json::from_str(r#"{"name":"A","role":""}"#).unwrap();
        assert!(req.role.is_none());
        assert_eq!(NewCharacter::from(req).into_fields().role, CharacterRole::Supporting);

        let req: CreateCharacterRequest = serde_json::from_str(r#"{"role":null}"#).unwrap();
        assert!(req.role.is_none());

        let req: CreateCharacterRequest = serde_json::from_str(r#"{"role":"minor"}"#).unwrap();
        assert_eq!(req.role, Some(CharacterRole::Minor));

        assert!(serde_json::from_str::<CreateCharacterRequest>(r#"{"role":"hero"}"#).is_err());
    }

    #[test]
    fn test_blank_status_is_ignored() {
        let req: UpdateNovelRequest = serde_json::from_str(r#"{"status":""}"#).unwrap();
        assert!(req.status.is_none());
    }
}
