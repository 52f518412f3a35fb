use std::io;
use std::path::Path;

use crate::catalog::Catalog;
use crate::common::Category;
use crate::common::constants::LEVEL_EXTENSION;

/// Defines errors that can occur while listing a category root.
//
// // 定义在列出类别根目录时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// The category root could not be read.
    //
    // // 无法读取类别根目录。
    #[error("Failed to read level directory: {0}")]
    DirectoryReadError(#[from] io::Error),
}

/// 列出一个类别根目录下当前所有的关卡文件名。
///
/// 只保留扩展名为 `.rfldf` 的普通文件；顺序保持文件系统返回的顺序，
/// 不做排序。
pub(crate) fn list_levels(catalog: &Catalog, category: Category) -> Result<Vec<String>, ListError> {
    let root = catalog.config.root_for(category);
    let mut levels = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            tracing::warn!(
                entry = %file_name.to_string_lossy(),
                category = %category,
                "skipping entry with non-UTF-8 name"
            );
            continue;
        };
        if Path::new(name).extension().and_then(|ext| ext.to_str()) == Some(LEVEL_EXTENSION) {
            levels.push(name.to_string());
        }
    }
    Ok(levels)
}
