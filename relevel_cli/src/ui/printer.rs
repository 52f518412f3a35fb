//! Functions for printing catalog items to the console.

use indexmap::IndexMap;

use relevel::common::Category;
use relevel::level::LevelName;

use crate::handlers::status::CatalogStatus;

/// 打印一个类别的关卡列表。
pub fn print_level_list(category: Category, levels: &[String]) {
    match category {
        Category::Playable => println!("--- Playable Levels ({}) ---", levels.len()),
        Category::Created => println!("--- Created Levels ({}) ---", levels.len()),
    }
    if levels.is_empty() {
        println!("  (no levels)");
        return;
    }
    for level in levels {
        println!("  {}", level);
    }
}

/// 打印单个关卡的元数据块。
pub fn print_metadata(name: &LevelName, category: Category, metadata: &IndexMap<String, String>) {
    println!("----------------------------------------");
    println!("  Level:     {}", name);
    println!("  Category:  {}", category);
    if metadata.is_empty() {
        println!("  (no metadata block)");
    } else {
        println!("  Metadata:");
        for (key, value) in metadata {
            println!("    - {}: {}", key, value);
        }
    }
    println!("----------------------------------------");
}

/// 打印关卡库状态。
pub fn print_status(status: &CatalogStatus) {
    println!("--- Library Status ---");
    println!("  Playable Levels:  {}", status.playable_count);
    println!("  Created Levels:   {}", status.created_count);
    println!("  Playable Root:    {}", status.playable_root);
    println!("  Created Root:     {}", status.created_root);
    println!("----------------------");
}
