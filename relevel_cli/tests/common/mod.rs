//!
//! # Test Common Utilities
//!
//! This module provides common utilities for writing integration tests for
//! the `relevel` binary. It abstracts away the boilerplate of building a
//! temporary level library and driving the interactive REPL with scripted
//! stdin.
//!
//
// // # 测试通用工具
// //
// // 该模块为 `relevel` 二进制的集成测试提供通用工具，
// // 封装了搭建临时关卡库和用脚本化 stdin 驱动交互式 REPL 的样板代码。
// //

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::{TempDir, tempdir};

/// Category subdirectory holding playable levels.
pub const PLAYABLE: &str = "PlayableLevels";
/// Category subdirectory holding editor-created levels.
pub const CREATED: &str = "CreatedLevels";

/// Represents the context for a single test: a temporary level library.
///
/// Each test runs against its own library, so tests cannot interfere with
/// each other. The temporary directory is cleaned up when the context is
/// dropped.
pub struct TestContext {
    /// A handle to the temporary directory. Held for its Drop behavior.
    pub _temp_dir: TempDir,
    /// The levels root containing both category directories.
    pub levels_root: PathBuf,
}

impl TestContext {
    /// Creates a fresh level library with both category roots present.
    pub fn new() -> anyhow::Result<Self> {
        let temp_dir = tempdir()?;
        let levels_root = temp_dir.path().join("Levels");
        fs::create_dir_all(levels_root.join(PLAYABLE))?;
        fs::create_dir_all(levels_root.join(CREATED))?;
        Ok(TestContext {
            _temp_dir: temp_dir,
            levels_root,
        })
    }

    /// Writes a level file directly into one of the category roots.
    pub fn write_level(
        &self,
        category_dir: &str,
        name: &str,
        content: &str,
    ) -> anyhow::Result<PathBuf> {
        let path = self.levels_root.join(category_dir).join(name);
        fs::write(&path, content)?;
        Ok(path)
    }

    /// The on-disk path of a level in a category root.
    pub fn level_path(&self, category_dir: &str, name: &str) -> PathBuf {
        self.levels_root.join(category_dir).join(name)
    }

    /// Prepares `relevel open <root>` with the given REPL script on stdin.
    pub fn open_with_input(&self, repl_input: &str) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_relevel"));
        cmd.arg("open").arg(&self.levels_root);
        cmd.write_stdin(repl_input.to_string());
        cmd
    }

    /// Returns the path of the temporary directory itself.
    pub fn path(&self) -> &Path {
        self._temp_dir.path()
    }
}

/// 辅助函数：带元数据块和载荷行的典型关卡内容。
pub fn sample_level_content() -> &'static str {
    "<<Title>>:Tower of Doom\n<<Author>>:Alice\n<<Difficulty>>:7\nROW:1,1,0,1\nROW:0,1,1,0\n"
}
