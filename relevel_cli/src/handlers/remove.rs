use relevel::catalog::Catalog;
use relevel::common::Category;
use relevel::level::LevelName;

use crate::errors::CliError;
use crate::ui::prompt::confirm_action;

/// 处理 'remove' 命令，返回是否实际执行了删除。
///
/// 删除是永久性的，没有回收站，所以除非给出 `-f`，先向用户确认。
pub fn handle_remove(
    catalog: &Catalog,
    file: &str,
    category: Category,
    force: bool,
) -> Result<bool, CliError> {
    let name = LevelName::new(file)?;

    // --- 确认阶段 ---
    if !force {
        let prompt = format!(
            "Are you sure you want to PERMANENTLY DELETE level '{}' from {}?",
            name, category
        );
        if !confirm_action(&prompt)? {
            println!("Operation cancelled.");
            return Ok(false);
        }
    }

    catalog.delete_level(&name, category)?;
    println!("Level '{}' deleted.", name);
    Ok(true)
}
