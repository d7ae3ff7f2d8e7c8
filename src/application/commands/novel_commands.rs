//! Novel Commands

use crate::domain::novel::{ChapterPatch, NewChapter, NewNovel, NovelPatch};

/// 创建小说命令
#[derive(Debug, Clone)]
pub struct CreateNovel {
    pub input: NewNovel,
}

/// 更新小说命令（浅合并）
#[derive(Debug, Clone)]
pub struct UpdateNovel {
    pub novel_id: String,
    pub patch: NovelPatch,
}

/// 删除小说命令
#[derive(Debug, Clone)]
pub struct DeleteNovel {
    pub novel_id: String,
}

/// 追加章节命令
#[derive(Debug, Clone)]
pub struct AddChapter {
    pub novel_id: String,
    pub input: NewChapter,
}

/// 更新章节命令
#[derive(Debug, Clone)]
pub struct UpdateChapter {
    pub novel_id: String,
    pub chapter_id: String,
    pub patch: ChapterPatch,
}

/// 删除章节命令
#[derive(Debug, Clone)]
pub struct DeleteChapter {
    pub novel_id: String,
    pub chapter_id: String,
}
