//! Persistence Layer - 数据持久化
//!
//! 平面 JSON 文件存储实现

pub mod json;

pub use self::json::{init_data_dir, JsonCharacterRepository, JsonNovelRepository, JsonRecordStore};
