//! Query Handlers 实现
//!
//! 所有 QueryHandler 的具体实现

mod character_handlers;
mod novel_handlers;

pub use character_handlers::*;
pub use novel_handlers::*;
