use std::io;

use indexmap::IndexMap;

use crate::catalog::Catalog;
use crate::common::Category;
use crate::level::metadata::{parse_metadata, update_metadata};
use crate::level::LevelName;

/// Defines errors that can occur while reading or rewriting level metadata.
//
// // 定义在读取或改写关卡元数据时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    /// The level file could not be read or written.
    //
    // // 关卡文件无法读取或写入。
    #[error("Failed to access level file: {0}")]
    FileSystemError(#[from] io::Error),
}

/// 读取关卡文件的原始文本内容。
pub(crate) fn read_level(
    catalog: &Catalog,
    name: &LevelName,
    category: Category,
) -> Result<String, EditError> {
    Ok(std::fs::read_to_string(catalog.level_path(name, category))?)
}

/// 读取并解析关卡文件中的元数据块。
pub(crate) fn read_metadata(
    catalog: &Catalog,
    name: &LevelName,
    category: Category,
) -> Result<IndexMap<String, String>, EditError> {
    let content = read_level(catalog, name, category)?;
    Ok(parse_metadata(&content))
}

/// 改写关卡文件中指定键的元数据行并写回。
///
/// 1. 读取当前文件内容。
/// 2. 将 `changes` 中每个键对应的所有元数据行改写为新值。
/// 3. 将改写后的内容整体写回文件。
///
/// 文件中不存在的键不会被追加；这是严格的 "替换已有行" 操作。
pub(crate) fn save_metadata(
    catalog: &Catalog,
    name: &LevelName,
    category: Category,
    changes: &IndexMap<String, String>,
) -> Result<(), EditError> {
    let path = catalog.level_path(name, category);
    let content = std::fs::read_to_string(&path)?;
    let updated = update_metadata(&content, changes);
    std::fs::write(&path, updated)?;
    tracing::info!(level = %name, category = %category, "updated level metadata");
    Ok(())
}
