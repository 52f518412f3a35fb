use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::common::constants::{CREATED_DIR_NAME, PLAYABLE_DIR_NAME};

/// The two mutually exclusive directory roots a level file can belong to.
///
/// A level is always in exactly one category at a time; move operations
/// relocate it to [`Category::opposite`].
//
// // 一个关卡文件可以归属的两个互斥目录根。
// //
// // 任意时刻一个关卡只属于一个类别；移动操作会把它转移到相反的类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Levels the game can currently play.
    Playable,
    /// Levels authored in the in-game editor.
    Created,
}

impl Category {
    /// The destination category for move and copy operations.
    pub fn opposite(self) -> Category {
        match self {
            Category::Playable => Category::Created,
            Category::Created => Category::Playable,
        }
    }

    /// Subdirectory name of this category under the levels root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Playable => PLAYABLE_DIR_NAME,
            Category::Created => CREATED_DIR_NAME,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Playable => write!(f, "playable"),
            Category::Created => write!(f, "created"),
        }
    }
}

/// 无法将用户输入解析为类别。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Unknown category '{0}'. Expected 'playable' or 'created'.")]
pub struct CategoryParseError(String);

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "playable" | "p" => Ok(Category::Playable),
            "created" | "c" => Ok(Category::Created),
            other => Err(CategoryParseError(other.to_string())),
        }
    }
}
