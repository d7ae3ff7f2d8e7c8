//! 通用记录抽象
//!
//! Record Store 以此为单位做整集合读写：
//! 每条记录有唯一 ID、创建时间、首次更新后才出现的更新时间

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// 记录唯一标识（不透明字符串，生成时使用 UUID v4）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// 生成新的唯一 ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 可持久化的记录
///
/// - `Fields`: 创建时由调用方给出的实体字段（不含 id / 时间戳）
/// - `Patch`: 浅合并补丁，每个 `Some` 字段整体替换同名字段，`None` 保持不变
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Fields: Send + 'static;
    type Patch: Send + 'static;

    fn id(&self) -> &RecordId;

    /// 用新 ID 和创建时间组装记录
    fn from_fields(id: RecordId, created_at: DateTime<Utc>, fields: Self::Fields) -> Self;

    /// 浅合并
    fn apply_patch(&mut self, patch: Self::Patch);

    /// 设置 updatedAt
    fn touch(&mut self, at: DateTime<Utc>);
}

/// 把空字符串视为未提供，回落到默认值
pub(crate) fn non_empty_or(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// 持久化数据中的 null 按缺省值读取
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
