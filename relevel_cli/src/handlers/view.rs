use relevel::catalog::Catalog;
use relevel::common::Category;
use relevel::level::LevelName;

use crate::errors::CliError;
use crate::ui::printer;

/// 处理 'view' 命令：读取并显示关卡的元数据块。
pub fn handle_view(
    catalog: &Catalog,
    file: &str,
    category: Category,
    json: bool,
) -> Result<(), CliError> {
    let name = LevelName::new(file)?;
    let metadata = catalog.read_metadata(&name, category)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
    } else {
        printer::print_metadata(&name, category, &metadata);
    }
    Ok(())
}
