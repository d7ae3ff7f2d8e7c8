//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：处理所有写操作

mod character_commands;
mod novel_commands;

pub mod handlers;

pub use character_commands::*;
pub use novel_commands::*;
