#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use relevel::catalog::{Catalog, CatalogConfig};
use relevel::common::Category;
use relevel::level::LevelName;

/// 辅助函数：在临时目录中建立一个空的关卡目录库。
///
/// 封装了构建 `CatalogConfig`、创建两个类别根目录和打开 `Catalog`
/// 的样板代码。
pub fn setup_catalog(dir: &TempDir) -> Catalog {
    let config = CatalogConfig::from_levels_root(dir.path());
    config.ensure_roots().unwrap();
    Catalog::new(config)
}

/// 辅助函数：直接在某个类别根目录下写入一个关卡文件。
///
/// 返回写入文件的完整路径，方便测试直接检查文件系统状态。
pub fn create_level_file(
    catalog: &Catalog,
    category: Category,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = catalog.config.root_for(category).join(name);
    fs::write(&path, content).unwrap();
    path
}

/// 辅助函数：带有典型元数据块和载荷行的关卡内容。
pub fn sample_level_content() -> &'static str {
    "<<Title>>:Tower of Doom\n<<Author>>:Alice\n<<Difficulty>>:7\nROW:1,1,0,1\nROW:0,1,1,0\n"
}

/// 辅助函数：构造一个已校验的关卡文件名。
pub fn name(raw: &str) -> LevelName {
    LevelName::new(raw).unwrap()
}
