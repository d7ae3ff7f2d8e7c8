//! Data Directory - 数据目录初始化

use std::path::Path;
use tokio::fs;

use crate::application::ports::RepositoryError;

/// 小说集合文件名
pub const NOVELS_FILE: &str = "novels.json";

/// 角色集合文件名
pub const CHARACTERS_FILE: &str = "characters.json";

/// 确保数据目录存在，并把缺失的集合文件初始化为空数组
///
/// 已存在的文件（即使内容损坏）保持原样
pub async fn init_data_dir(data_dir: &Path) -> Result<(), RepositoryError> {
    fs::create_dir_all(data_dir)
        .await
        .map_err(|e| RepositoryError::IoError(e.to_string()))?;

    for name in [NOVELS_FILE, CHARACTERS_FILE] {
        let path = data_dir.join(name);
        if fs::try_exists(&path)
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))?
        {
            continue;
        }

        fs::write(&path, "[]")
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))?;
        tracing::info!(path = %path.display(), "Initialized empty data file");
    }

    Ok(())
}
