//! Memory Layer - 内存实现
//!
//! 进程内的并发辅助结构

mod keyed_lock;

pub use keyed_lock::{KeyedLockGuard, KeyedLocks};
