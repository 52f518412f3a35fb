use std::path::Path;

use relevel::catalog::Catalog;
use relevel::common::Category;

use crate::errors::CliError;
use crate::ui::prompt;

/// 处理 'install' 命令，返回是否实际安装了文件。
///
/// 未指定目标类别时交互式询问 (playable / created / 取消)，对应
/// 安装前的目标选择对话。同名关卡直接被覆盖。
pub fn handle_install(
    catalog: &Catalog,
    source: &Path,
    category: Option<Category>,
) -> Result<bool, CliError> {
    let category = match category {
        Some(c) => c,
        None => match prompt::choose_category()? {
            Some(c) => c,
            None => {
                println!("Installation cancelled.");
                return Ok(false);
            }
        },
    };

    let installed = catalog.install_level(source, category)?;
    println!("Level '{}' installed into {} levels.", installed, category);
    Ok(true)
}
