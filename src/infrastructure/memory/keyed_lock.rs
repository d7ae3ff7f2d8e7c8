//! Keyed Lock Registry
//!
//! 按字符串键分配互斥锁，保护同一实体的 读取-修改-写回 周期。
//! 无人持有的锁在释放时从表中移除。

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// 按键加锁的注册表
#[derive(Default)]
pub struct KeyedLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl KeyedLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取指定键的锁，等待其他持有者释放
    pub async fn lock(&self, key: &str) -> KeyedLockGuard<'_> {
        let mutex = self.locks.entry(key.to_string()).or_default().clone();
        let guard = mutex.lock_owned().await;
        KeyedLockGuard {
            locks: &self.locks,
            key: key.to_string(),
            guard: Some(guard),
        }
    }

    /// 当前登记的键数量
    #[cfg(test)]
    fn len(&self) -> usize {
        self.locks.len()
    }
}

/// 锁守卫，drop 时释放锁并清理空闲条目
pub struct KeyedLockGuard<'a> {
    locks: &'a DashMap<String, Arc<Mutex<()>>>,
    key: String,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for KeyedLockGuard<'_> {
    fn drop(&mut self) {
        self.guard.take();
        // 只剩表内引用时才移除，仍有等待者则保留
        self.locks
            .remove_if(&self.key, |_, mutex| Arc::strong_count(mutex) == 1);
    }
}
