//! Novelcraft - 小说写作辅助后端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Novel Context: 小说与内嵌章节，维护字数统计
//! - Character Context: 角色档案，可关联到小说
//!
//! 应用层 (application/):
//! - Ports: 端口定义（RecordStore, NovelRepository, CharacterRepository）
//! - Commands: CQRS 命令处理器
//! - Queries: CQRS 查询处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful JSON API
//! - Memory: 按 ID 加锁的进程内锁表
//! - Persistence: JSON 文件存储

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
