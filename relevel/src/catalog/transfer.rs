use std::io;

use crate::catalog::Catalog;
use crate::common::Category;
use crate::level::LevelName;

/// Defines errors that can occur while relocating a level between categories.
//
// // 定义在类别之间转移关卡时可能发生的错误。
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// The source file vanished, or the destination root rejected the write.
    //
    // // 源文件已不存在，或目标根目录拒绝写入。
    #[error("Failed to transfer level file: {0}")]
    FileSystemError(#[from] io::Error),
}

/// 将一个关卡从源类别移动到相反的类别。
///
/// 通过 `fs::rename` 实现；两个根目录位于同一卷上时该操作是原子的。
/// 失败时源文件保持原位，不做回滚之外的任何补救。
pub(crate) fn move_level(
    catalog: &Catalog,
    name: &LevelName,
    source: Category,
) -> Result<(), TransferError> {
    let from = catalog.level_path(name, source);
    let to = catalog.level_path(name, source.opposite());
    std::fs::rename(&from, &to)?;
    tracing::info!(level = %name, from = %source, to = %source.opposite(), "moved level");
    Ok(())
}

/// 将一个关卡复制到相反的类别，源文件保留。
///
/// 目标位置已有同名文件时会被覆盖。
pub(crate) fn copy_level(
    catalog: &Catalog,
    name: &LevelName,
    source: Category,
) -> Result<(), TransferError> {
    let from = catalog.level_path(name, source);
    let to = catalog.level_path(name, source.opposite());
    std::fs::copy(&from, &to)?;
    tracing::info!(level = %name, from = %source, to = %source.opposite(), "copied level");
    Ok(())
}
