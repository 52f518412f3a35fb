use std::io;
use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::common::Category;

/// Defines errors that can occur while installing an external level file.
//
// // 定义在安装外部关卡文件时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    /// The chosen source path does not point to a regular file.
    //
    // // 所选源路径不是一个普通文件。
    #[error("Source is not a file: {0}")]
    NotAFile(PathBuf),

    /// The source path has no usable base file name.
    //
    // // 源路径没有可用的文件名。
    #[error("Source path has no valid file name: {0}")]
    InvalidFileName(PathBuf),

    /// Copying into the category root failed.
    //
    // // 复制到类别根目录失败。
    #[error("Failed to copy level file: {0}")]
    FileSystemError(#[from] io::Error),
}

/// 将一个外部关卡文件安装到指定类别根目录。
///
/// 沿用源文件自身的文件名；目标位置已有同名文件时直接覆盖，不做
/// 去重或改名。返回安装后的文件名。
pub(crate) fn install_level(
    catalog: &Catalog,
    source: &Path,
    category: Category,
) -> Result<String, InstallError> {
    if !source.is_file() {
        return Err(InstallError::NotAFile(source.to_path_buf()));
    }
    let file_name = source
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| InstallError::InvalidFileName(source.to_path_buf()))?;

    let dest = catalog.config.root_for(category).join(file_name);
    std::fs::copy(source, &dest)?;
    tracing::info!(level = file_name, category = %category, "installed level");
    Ok(file_name.to_string())
}
