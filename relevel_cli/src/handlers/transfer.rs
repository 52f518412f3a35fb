use relevel::catalog::Catalog;
use relevel::common::Category;
use relevel::level::LevelName;

use crate::errors::CliError;

/// 处理 'move' 命令。
pub fn handle_move(catalog: &Catalog, file: &str, source: Category) -> Result<(), CliError> {
    let name = LevelName::new(file)?;
    println!(
        "Moving level '{}' from {} to {}...",
        name,
        source,
        source.opposite()
    );
    catalog.move_level(&name, source)?;
    println!("Level successfully moved.");
    Ok(())
}

/// 处理 'copy' 命令。
pub fn handle_copy(catalog: &Catalog, file: &str, source: Category) -> Result<(), CliError> {
    let name = LevelName::new(file)?;
    println!(
        "Copying level '{}' from {} to {}...",
        name,
        source,
        source.opposite()
    );
    catalog.copy_level(&name, source)?;
    println!("Level successfully copied.");
    Ok(())
}
