/// File extension recognized as a level document (without the leading dot).
pub const LEVEL_EXTENSION: &str = "rfldf";

// --- 元数据行标记 ---

/// Marker a metadata line must start with, immediately before the key.
pub const METADATA_OPEN: &str = "<<";

/// Delimiter separating a metadata key from its value.
pub const METADATA_DELIMITER: &str = ">>:";

// --- 目录布局常量 ---

/// Application directory under the platform data root.
pub const APP_DIR_NAME: &str = "The Orange Squad ReForm";

/// Subdirectory of the application directory holding both category roots.
pub const LEVELS_DIR_NAME: &str = "Levels";

/// Category root for levels the game can currently play.
pub const PLAYABLE_DIR_NAME: &str = "PlayableLevels";

/// Category root for levels authored in the in-game editor.
pub const CREATED_DIR_NAME: &str = "CreatedLevels";
