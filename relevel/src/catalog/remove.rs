use std::io;

use crate::catalog::Catalog;
use crate::common::Category;
use crate::level::LevelName;

/// Defines errors that can occur while deleting a level.
//
// // 定义在删除关卡时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum RemoveError {
    /// The file could not be deleted (missing, or the root is read-only).
    //
    // // 文件无法删除 (已不存在，或根目录只读)。
    #[error("Failed to delete level file: {0}")]
    FileSystemError(#[from] io::Error),
}

/// 从类别根目录中永久删除一个关卡文件。
///
/// 没有回收站，也没有恢复手段。
pub(crate) fn delete_level(
    catalog: &Catalog,
    name: &LevelName,
    category: Category,
) -> Result<(), RemoveError> {
    let path = catalog.level_path(name, category);
    std::fs::remove_file(&path)?;
    tracing::info!(level = %name, category = %category, "deleted level");
    Ok(())
}
