//! Novel Context - 小说限界上下文
//!
//! 职责:
//! - 小说聚合管理
//! - 内嵌章节实体
//! - 字数不变量维护

mod aggregate;
mod entities;
mod value_objects;

pub use aggregate::{NewNovel, Novel, NovelFields, NovelPatch, DEFAULT_NOVEL_TITLE};
pub use entities::{Chapter, ChapterPatch, NewChapter};
pub use value_objects::NovelStatus;
