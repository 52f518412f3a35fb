use std::path::{Path, PathBuf};

use indexmap::IndexMap;

pub mod config;
mod edit;
mod install;
mod list;
mod remove;
mod transfer;

pub use config::CatalogConfig;
pub use edit::EditError;
pub use install::InstallError;
pub use list::ListError;
pub use remove::RemoveError;
pub use transfer::TransferError;

use crate::common::Category;
use crate::level::LevelName;

/// 代表一个已打开的关卡目录库。
/// 它只持有两个类别根目录的配置；目录内容不在内存中缓存，每个操作
/// 都直接访问文件系统。
pub struct Catalog {
    /// The injected two-root configuration.
    pub config: CatalogConfig,
}

impl Catalog {
    pub fn new(config: CatalogConfig) -> Catalog {
        Catalog { config }
    }

    /// Absolute path of a level file within a category root.
    pub fn level_path(&self, name: &LevelName, category: Category) -> PathBuf {
        self.config.root_for(category).join(name.as_str())
    }

    /// Lists the level file names currently present in a category.
    pub fn list_levels(&self, category: Category) -> Result<Vec<String>, ListError> {
        list::list_levels(self, category)
    }

    /// Moves a level to the opposite category.
    pub fn move_level(&self, name: &LevelName, source: Category) -> Result<(), TransferError> {
        transfer::move_level(self, name, source)
    }

    /// Copies a level into the opposite category, keeping the source.
    pub fn copy_level(&self, name: &LevelName, source: Category) -> Result<(), TransferError> {
        transfer::copy_level(self, name, source)
    }

    /// Permanently deletes a level from a category.
    pub fn delete_level(&self, name: &LevelName, category: Category) -> Result<(), RemoveError> {
        remove::delete_level(self, name, category)
    }

    /// Imports an external level file into a category.
    pub fn install_level(&self, source: &Path, category: Category) -> Result<String, InstallError> {
        install::install_level(self, source, category)
    }

    /// Reads a level's raw text content.
    pub fn read_level(&self, name: &LevelName, category: Category) -> Result<String, EditError> {
        edit::read_level(self, name, category)
    }

    /// Reads and parses a level's metadata block.
    pub fn read_metadata(
        &self,
        name: &LevelName,
        category: Category,
    ) -> Result<IndexMap<String, String>, EditError> {
        edit::read_metadata(self, name, category)
    }

    /// Rewrites the given metadata keys in place and saves the level.
    pub fn save_metadata(
        &self,
        name: &LevelName,
        category: Category,
        changes: &IndexMap<String, String>,
    ) -> Result<(), EditError> {
        edit::save_metadata(self, name, category, changes)
    }
}
