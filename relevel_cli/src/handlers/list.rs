use relevel::catalog::Catalog;
use relevel::common::Category;

use crate::ui::printer;

/// 处理 'list' 命令；`category` 为 None 时列出两个类别。
///
/// 读目录失败不是阻断性错误：记入日志并显示为空列表，保持会话可用。
pub fn handle_list(catalog: &Catalog, category: Option<Category>) {
    let categories = match category {
        Some(c) => vec![c],
        None => vec![Category::Playable, Category::Created],
    };

    for category in categories {
        match catalog.list_levels(category) {
            Ok(levels) => printer::print_level_list(category, &levels),
            Err(e) => {
                tracing::error!(category = %category, error = %e, "failed to list levels");
                printer::print_level_list(category, &[]);
            }
        }
    }
}
