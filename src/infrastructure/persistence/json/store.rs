//! JSON Record Store - 单文件 JSON 数组存储
//!
//! 每个集合对应一个 JSON 文件，文件内容为记录数组。
//! 所有变更都是：读取整个文件 -> 内存中修改 -> 整体覆盖写回。
//! 写入不做原子替换，写入中途崩溃可能损坏文件，损坏的文件按空集合读取。

use async_trait::async_trait;
use chrono::Utc;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;

use crate::application::ports::{RecordStorePort, RepositoryError};
use crate::domain::{Record, RecordId};

/// JSON 文件记录存储
///
/// 同一 store 上的调用由内部互斥锁串行化，单次调用内的 读-改-写 不会与其他调用交错
pub struct JsonRecordStore<R> {
    path: PathBuf,
    lock: Mutex<()>,
    _record: PhantomData<fn() -> R>,
}

/// 一次读取的结果
struct Snapshot<R> {
    records: Vec<R>,
    /// 文件是合法 JSON 数组，但其中无法解析为 R 的记录数
    undecodable: usize,
}

impl<R> Snapshot<R> {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            undecodable: 0,
        }
    }
}

impl<R: Record> JsonRecordStore<R> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
            _record: PhantomData,
        }
    }

    /// 读取集合（不加锁）
    ///
    /// 文件缺失或损坏时返回空集合；逐条解析，单条记录无法解析时跳过并计数
    async fn load(&self) -> Snapshot<R> {
        let data = match fs::read_to_string(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Store file missing, treating as empty");
                return Snapshot::empty();
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Store file unreadable, treating as empty");
                return Snapshot::empty();
            }
        };

        let values: Vec<serde_json::Value> = match serde_json::from_str(&data) {
            Ok(values) => values,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Store file malformed, treating as empty");
                return Snapshot::empty();
            }
        };

        let mut snapshot = Snapshot::empty();
        for (index, value) in values.into_iter().enumerate() {
            match serde_json::from_value(value) {
                Ok(record) => snapshot.records.push(record),
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), index, error = %e, "Skipping undecodable record");
                    snapshot.undecodable += 1;
                }
            }
        }
        snapshot
    }

    /// 为写入读取集合，存在无法解析的记录时拒绝
    async fn load_for_write(&self) -> Result<Vec<R>, RepositoryError> {
        let snapshot = self.load().await;
        if snapshot.undecodable > 0 {
            return Err(RepositoryError::UndecodableRecords {
                path: self.path.display().to_string(),
                count: snapshot.undecodable,
            });
        }
        Ok(snapshot.records)
    }

    /// 整体覆盖写入（不加锁）
    async fn persist(&self, records: &[R]) -> Result<(), RepositoryError> {
        let data = serde_json::to_string_pretty(records)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        fs::write(&self.path, data)
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))?;

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "Store file written"
        );

        Ok(())
    }
}

#[async_trait]
impl<R: Record> RecordStorePort<R> for JsonRecordStore<R> {
    async fn read_all(&self) -> Vec<R> {
        let _guard = self.lock.lock().await;
        self.load().await.records
    }

    async fn write_all(&self, records: &[R]) -> Result<(), RepositoryError> {
        let _guard = self.lock.lock().await;
        self.persist(records).await
    }

    async fn find_by_id(&self, id: &str) -> Option<R> {
        let _guard = self.lock.lock().await;
        self.load()
            .await
            .records
            .into_iter()
            .find(|record| record.id().as_str() == id)
    }

    async fn create(&self, fields: R::Fields) -> Result<R, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load_for_write().await?;

        let record = R::from_fields(RecordId::generate(), Utc::now(), fields);
        records.push(record.clone());
        self.persist(&records).await?;

        Ok(record)
    }

    async fn update(&self, id: &str, patch: R::Patch) -> Result<Option<R>, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load_for_write().await?;

        let Some(record) = records.iter_mut().find(|record| record.id().as_str() == id) else {
            return Ok(None);
        };
        record.apply_patch(patch);
        record.touch(Utc::now());
        let updated = record.clone();

        self.persist(&records).await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: &str) -> Result<bool, RepositoryError> {
        let _guard = self.lock.lock().await;
        let mut records = self.load_for_write().await?;

        let Some(index) = records.iter().position(|record| record.id().as_str() == id) else {
            return Ok(false);
        };
        records.remove(index);

        self.persist(&records).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::character::{Character, CharacterPatch, NewCharacter};
    use tempfile::tempdir;

    fn named(name: &str) -> crate::domain::character::CharacterFields {
        NewCharacter {
            name: Some(name.to_string()),
            ..NewCharacter::default()
        }
        .into_fields()
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let store: JsonRecordStore<Character> = JsonRecordStore::new(dir.path().join("none.json"));
        assert!(store.read_all().await.is_empty());
        assert!(store.find_by_id("x").await.is_none());
    }

    #[tokio::test]
    async fn test_corrupt_file_reads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("characters.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store: JsonRecordStore<Character> = JsonRecordStore::new(&path);
        assert!(store.read_all().await.is_empty());

        // 损坏的文件在下一次写入时被覆盖
        store.create(named("Ayla")).await.unwrap();
        assert_eq!(store.read_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_create_then_find_round_trip() {
        let dir = tempdir().unwrap();
        let store: JsonRecordStore<Character> = JsonRecordStore::new(dir.path().join("c.json"));

        let created = store.create(named("Ayla")).await.unwrap();
        let found = store.find_by_id(created.id().as_str()).await.unwrap();

        assert_eq!(found, created);
        assert!(found.updated_at().is_none());
    }

    #[tokio::test]
    async fn test_update_merges_and_stamps() {
        let dir = tempdir().unwrap();
        let store: JsonRecordStore<Character> = JsonRecordStore::new(dir.path().join("c.json"));
        let created = store.create(named("Ayla")).await.unwrap();

        let patch = CharacterPatch {
            background: Some("Raised by wolves".into()),
            ..CharacterPatch::default()
        };
        let updated = store
            .update(created.id().as_str(), patch)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name(), "Ayla");
        assert_eq!(updated.background(), "Raised by wolves");
        assert_eq!(updated.created_at(), created.created_at());
        assert!(updated.updated_at().is_some());
        assert_eq!(store.find_by_id(created.id().as_str()).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let dir = tempdir().unwrap();
        let store: JsonRecordStore<Character> = JsonRecordStore::new(dir.path().join("c.json"));
        let result = store.update("missing", CharacterPatch::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let dir = tempdir().unwrap();
        let store: JsonRecordStore<Character> = JsonRecordStore::new(dir.path().join("c.json"));
        let a = store.create(named("A")).await.unwrap();
        store.create(named("B")).await.unwrap();

        assert!(store.delete(a.id().as_str()).await.unwrap());
        assert_eq!(store.read_all().await.len(), 1);

        assert!(!store.delete(a.id().as_str()).await.unwrap());
        assert_eq!(store.read_all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_write_all_overwrites_and_is_pretty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("c.json");
        let store: JsonRecordStore<Character> = JsonRecordStore::new(&path);
        let a = store.create(named("A")).await.unwrap();
        store.create(named("B")).await.unwrap();

        store.write_all(std::slice::from_ref(&a)).await.unwrap();

        let records = store.read_all().await;
        assert_eq!(records, vec![a]);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {"));
    }

    #[tokio::test]
    async fn test_write_to_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let store: JsonRecordStore<Character> =
            JsonRecordStore::new(dir.path().join("nope").join("c.json"));
        let result = store.create(named("A")).await;
        assert!(matches!(result, Err(RepositoryError::IoError(_))));
    }

    #[tokio::test]
    async fn test_undecodable_record_is_skipped_and_not_overwritten() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("characters.json");
        std::fs::write(
            &path,
            r#"[
                {"id":"a","name":"Keep me","createdAt":"2024-01-01T00:00:00Z"},
                {"id":"b","name":"Bad date","createdAt":"yesterday"},
                {"id":"c","name":null,"role":null,"createdAt":"2024-01-01T00:00:00Z"}
            ]"#,
        )
        .unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        let store: JsonRecordStore<Character> = JsonRecordStore::new(&path);
        let records = store.read_all().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "Keep me");
        assert!(store.find_by_id("c").await.is_some());

        let result = store.create(named("New")).await;
        assert!(matches!(
            result,
            Err(RepositoryError::UndecodableRecords { count: 1, .. })
        ));
        assert!(store.delete("a").await.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[tokio::test]
    async fn test_null_fields_survive_next_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("characters.json");
        std::fs::write(
            &path,
            r#"[{"id":"a","name":null,"createdAt":"2024-01-01T00:00:00Z"}]"#,
        )
        .unwrap();

        let store: JsonRecordStore<Character> = JsonRecordStore::new(&path);
        store.create(named("New")).await.unwrap();

        let records = store.read_all().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id().as_str(), "a");
    }
}
