//! Character Commands

use crate::domain::character::{CharacterPatch, NewCharacter};

/// 创建角色命令
#[derive(Debug, Clone)]
pub struct CreateCharacter {
    pub input: NewCharacter,
}

/// 更新角色命令（浅合并）
#[derive(Debug, Clone)]
pub struct UpdateCharacter {
    pub character_id: String,
    pub patch: CharacterPatch,
}

/// 删除角色命令
#[derive(Debug, Clone)]
pub struct DeleteCharacter {
    pub character_id: String,
}
