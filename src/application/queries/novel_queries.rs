//! Novel Queries

/// 获取小说详情查询
#[derive(Debug, Clone)]
pub struct GetNovel {
    pub novel_id: String,
}

/// 列出所有小说查询
#[derive(Debug, Clone)]
pub struct ListNovels;
