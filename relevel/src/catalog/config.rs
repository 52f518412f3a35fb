use std::env;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::common::Category;
use crate::common::constants::{
    APP_DIR_NAME, CREATED_DIR_NAME, LEVELS_DIR_NAME, PLAYABLE_DIR_NAME,
};

/// 目录库配置：两个类别根目录。
///
/// 根目录作为显式配置值在启动时注入目录库，而不是散落在各处的
/// 全局路径。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Root directory holding playable levels.
    pub playable_root: PathBuf,
    /// Root directory holding editor-created levels.
    pub created_root: PathBuf,
}

impl CatalogConfig {
    /// Builds a configuration with both category roots under an explicit
    /// levels directory.
    pub fn from_levels_root(levels_root: &Path) -> CatalogConfig {
        CatalogConfig {
            playable_root: levels_root.join(PLAYABLE_DIR_NAME),
            created_root: levels_root.join(CREATED_DIR_NAME),
        }
    }

    /// Resolves the configuration from the platform application-data root.
    ///
    /// `%APPDATA%` wins when set; otherwise `$HOME/Library/Preferences` on
    /// macOS and `$HOME/.local/share` elsewhere, with `/tmp` as the last
    /// resort when `$HOME` is missing too.
    pub fn resolve_default() -> CatalogConfig {
        Self::from_levels_root(&default_levels_root())
    }

    /// The root directory of the given category.
    pub fn root_for(&self, category: Category) -> &Path {
        match category {
            Category::Playable => &self.playable_root,
            Category::Created => &self.created_root,
        }
    }

    /// Creates both category roots if they do not exist yet.
    pub fn ensure_roots(&self) -> io::Result<()> {
        std::fs::create_dir_all(&self.playable_root)?;
        std::fs::create_dir_all(&self.created_root)?;
        Ok(())
    }
}

/// 平台应用数据根目录。
fn app_data_root() -> PathBuf {
    if let Ok(appdata) = env::var("APPDATA") {
        return PathBuf::from(appdata);
    }
    let home = env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"));
    if cfg!(target_os = "macos") {
        home.join("Library").join("Preferences")
    } else {
        home.join(".local").join("share")
    }
}

fn default_levels_root() -> PathBuf {
    app_data_root().join(APP_DIR_NAME).join(LEVELS_DIR_NAME)
}
