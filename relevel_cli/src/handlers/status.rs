use relevel::catalog::Catalog;
use relevel::common::Category;

use crate::errors::CliError;

/// 'status' 命令收集的摘要数据，由 printer 负责展示。
pub struct CatalogStatus {
    pub playable_count: usize,
    pub created_count: usize,
    pub playable_root: String,
    pub created_root: String,
}

/// 处理 'status' 命令：统计两个类别当前的关卡数量。
pub fn handle_status(catalog: &Catalog) -> Result<CatalogStatus, CliError> {
    Ok(CatalogStatus {
        playable_count: catalog.list_levels(Category::Playable)?.len(),
        created_count: catalog.list_levels(Category::Created)?.len(),
        playable_root: catalog.config.playable_root.display().to_string(),
        created_root: catalog.config.created_root.display().to_string(),
    })
}
