use indexmap::IndexMap;

use relevel::catalog::Catalog;
use relevel::common::Category;
use relevel::level::LevelName;

use crate::errors::CliError;
use crate::ui::prompt;

/// 处理 'edit' 命令，返回是否实际保存了文件。
///
/// 提供 `-s KEY=VALUE` 时直接应用这些赋值；否则进入交互模式，逐个
/// 字段显示当前值并询问新值 (回车保留当前值)。
pub fn handle_edit(
    catalog: &Catalog,
    file: &str,
    category: Category,
    assignments: &[String],
) -> Result<bool, CliError> {
    let name = LevelName::new(file)?;
    let current = catalog.read_metadata(&name, category)?;

    if current.is_empty() {
        println!("Level '{}' has no metadata block to edit.", name);
        return Ok(false);
    }

    let changes = if assignments.is_empty() {
        prompt_for_changes(&current)?
    } else {
        parse_assignments(assignments)?
    };

    if changes.is_empty() {
        println!("Nothing to change.");
        return Ok(false);
    }

    // 只有文件中已存在的键才会被改写；update 从不追加新行。
    for key in changes.keys() {
        if !current.contains_key(key) {
            println!(
                "Warning: key '{}' is not present in '{}' and will be ignored.",
                key, name
            );
        }
    }

    catalog.save_metadata(&name, category, &changes)?;
    println!("Metadata of '{}' updated successfully.", name);
    Ok(true)
}

/// 解析命令行上的 KEY=VALUE 赋值，保持给出的顺序。
fn parse_assignments(assignments: &[String]) -> Result<IndexMap<String, String>, CliError> {
    let mut changes = IndexMap::new();
    for assignment in assignments {
        let Some((key, value)) = assignment.split_once('=') else {
            return Err(CliError::InvalidAssignment(assignment.clone()));
        };
        if key.is_empty() {
            return Err(CliError::InvalidAssignment(assignment.clone()));
        }
        changes.insert(key.to_string(), value.to_string());
    }
    Ok(changes)
}

/// 交互式编辑表单：逐个字段显示当前值并询问新值。
fn prompt_for_changes(
    current: &IndexMap<String, String>,
) -> Result<IndexMap<String, String>, CliError> {
    println!("Press Enter to keep the current value.");
    let mut changes = IndexMap::new();
    for (key, value) in current {
        let input = prompt::prompt_line(&format!("{} [{}]: ", key, value))?;
        if !input.is_empty() && input != *value {
            changes.insert(key.clone(), input);
        }
    }
    Ok(changes)
}
