//! Character Queries

/// 获取角色详情查询
#[derive(Debug, Clone)]
pub struct GetCharacter {
    pub character_id: String,
}

/// 列出角色查询，指定 novel_id 时只返回该小说的角色
#[derive(Debug, Clone, Default)]
pub struct ListCharacters {
    pub novel_id: Option<String>,
}
