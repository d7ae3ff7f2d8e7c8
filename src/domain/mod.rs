//! Domain Layer - 领域层
//!
//! 包含两个限界上下文:
//! - Novel Context: 小说及其内嵌章节（聚合）
//! - Character Context: 角色管理
//!
//! 以及所有记录共享的 `Record` 抽象

pub mod character;
pub mod novel;

mod record;
// 共享的字数统计
mod word_count;

pub use record::{Record, RecordId};
pub use word_count::count_words;
