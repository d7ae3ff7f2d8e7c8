//! JSON Persistence - 平面 JSON 文件持久化实现

mod character_repo;
mod data_dir;
mod novel_repo;
mod store;

pub use character_repo::*;
pub use data_dir::*;
pub use novel_repo::*;
pub use store::*;
