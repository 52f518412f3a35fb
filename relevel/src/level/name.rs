use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// 定义 LevelName 校验中可能发生的错误。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NameError {
    /// The name was empty after trimming.
    #[error("Level name cannot be empty")]
    Empty,
    /// The name contained a path separator.
    #[error("Level name '{0}' cannot contain path separators")]
    ContainsSeparator(String),
    /// The name was a relative path component ("." or "..").
    #[error("Level name '{0}' is not a file name")]
    NotAFileName(String),
}

/// 代表一个经过校验的关卡文件名。
///
/// 目录操作只接受 `LevelName`，因此任何来自前端的字符串参数都无法
/// 越出类别根目录 (不含路径分隔符，不含 ".." 组件)。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LevelName {
    inner: String,
}

impl LevelName {
    /// Validates a raw string as a bare level file name.
    pub fn new<S: AsRef<str>>(raw: S) -> Result<LevelName, NameError> {
        let name = raw.as_ref().trim();
        if name.is_empty() {
            return Err(NameError::Empty);
        }
        if name.contains('/') || name.contains('\\') {
            return Err(NameError::ContainsSeparator(name.to_string()));
        }
        if name == "." || name == ".." {
            return Err(NameError::NotAFileName(name.to_string()));
        }
        Ok(LevelName {
            inner: name.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl Display for LevelName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl FromStr for LevelName {
    type Err = NameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LevelName::new(s)
    }
}
