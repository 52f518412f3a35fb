//!
//! # CLI Command Integration Tests
//!
//! Drives the `relevel` binary end to end: opens a temporary level library,
//! pipes commands into the REPL, and asserts on the produced output and on
//! the resulting filesystem state.
//!

mod common;

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::{CREATED, PLAYABLE, TestContext, sample_level_content};

/// 测试：打开一个空关卡库并查看状态。
#[test]
fn open_empty_library_and_status() -> anyhow::Result<()> {
    let context = TestContext::new()?;

    context
        .open_with_input("status\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Level library opened. Entering interactive mode.")
                .and(predicate::str::contains("Playable Levels:  0"))
                .and(predicate::str::contains("Created Levels:   0"))
                .and(predicate::str::contains("Closing level library. Goodbye!")),
        );

    Ok(())
}

/// 测试：open 会补齐缺失的类别根目录。
#[test]
fn open_creates_missing_category_roots() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    fs::remove_dir_all(context.levels_root.join(CREATED))?;

    context.open_with_input("exit\n").assert().success();

    assert!(context.levels_root.join(CREATED).is_dir());
    Ok(())
}

/// 测试：list 按扩展名过滤并按类别分组显示。
#[test]
fn list_shows_levels_per_category() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    context.write_level(PLAYABLE, "alpha.rfldf", sample_level_content())?;
    context.write_level(PLAYABLE, "notes.txt", "not a level")?;
    context.write_level(CREATED, "beta.rfldf", sample_level_content())?;

    context
        .open_with_input("list\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--- Playable Levels (1) ---")
                .and(predicate::str::contains("alpha.rfldf"))
                .and(predicate::str::contains("--- Created Levels (1) ---"))
                .and(predicate::str::contains("beta.rfldf"))
                .and(predicate::str::contains("notes.txt").not()),
        );

    Ok(())
}

/// 测试：view 打印解析出的元数据块。
#[test]
fn view_prints_metadata_block() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    context.write_level(PLAYABLE, "alpha.rfldf", sample_level_content())?;

    context
        .open_with_input("view alpha.rfldf -c playable\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Level:     alpha.rfldf")
                .and(predicate::str::contains("- Title: Tower of Doom"))
                .and(predicate::str::contains("- Author: Alice"))
                .and(predicate::str::contains("- Difficulty: 7")),
        );

    Ok(())
}

/// 测试：view --json 输出 JSON 形式的元数据。
#[test]
fn view_json_outputs_metadata_as_json() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    context.write_level(CREATED, "beta.rfldf", sample_level_content())?;

    context
        .open_with_input("view beta.rfldf -c created --json\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"Title\": \"Tower of Doom\"")
                .and(predicate::str::contains("\"Author\": \"Alice\"")),
        );

    Ok(())
}

/// 测试：move 把关卡移到对面类别并刷新两个列表。
#[test]
fn move_relocates_level_and_refreshes_listing() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    context.write_level(PLAYABLE, "alpha.rfldf", sample_level_content())?;

    context
        .open_with_input("move alpha.rfldf -c playable\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Level successfully moved.")
                .and(predicate::str::contains("--- Playable Levels (0) ---"))
                .and(predicate::str::contains("--- Created Levels (1) ---")),
        );

    assert!(!context.level_path(PLAYABLE, "alpha.rfldf").exists());
    assert!(context.level_path(CREATED, "alpha.rfldf").is_file());
    Ok(())
}

/// 测试：copy 之后两个类别都有该关卡，内容一致。
#[test]
fn copy_duplicates_level_into_opposite_category() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    context.write_level(CREATED, "beta.rfldf", sample_level_content())?;

    context
        .open_with_input("copy beta.rfldf -c created\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Level successfully copied."));

    let original = fs::read_to_string(context.level_path(CREATED, "beta.rfldf"))?;
    let copy = fs::read_to_string(context.level_path(PLAYABLE, "beta.rfldf"))?;
    assert_eq!(original, copy);
    Ok(())
}

/// 测试：rm -f 跳过确认并删除文件。
#[test]
fn remove_forced_deletes_level() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    context.write_level(PLAYABLE, "alpha.rfldf", sample_level_content())?;

    context
        .open_with_input("rm alpha.rfldf -c playable -f\nexit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Level 'alpha.rfldf' deleted.")
                .and(predicate::str::contains("--- Playable Levels (0) ---")),
        );

    assert!(!context.level_path(PLAYABLE, "alpha.rfldf").exists());
    Ok(())
}

/// 测试：install -c 把外部文件复制进目标类别，源文件保留。
#[test]
fn install_copies_external_file_into_category() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    let source = context.path().join("downloaded.rfldf");
    fs::write(&source, sample_level_content())?;

    let input = format!("install \"{}\" -c playable\nexit\n", source.display());
    context
        .open_with_input(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Level 'downloaded.rfldf' installed into playable levels.",
        ));

    assert!(context.level_path(PLAYABLE, "downloaded.rfldf").is_file());
    assert!(source.is_file());
    Ok(())
}

/// 测试：安装同名文件覆盖已有内容 (last-write-wins)。
#[test]
fn install_overwrites_colliding_level() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    context.write_level(CREATED, "dup.rfldf", "old content")?;
    let source = context.path().join("dup.rfldf");
    fs::write(&source, "new content")?;

    let input = format!("install \"{}\" -c created\nexit\n", source.display());
    context.open_with_input(&input).assert().success();

    let content = fs::read_to_string(context.level_path(CREATED, "dup.rfldf"))?;
    assert_eq!(content, "new content");
    Ok(())
}

/// 测试：edit -s 改写元数据并写回文件。
#[test]
fn edit_with_assignments_rewrites_metadata() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    context.write_level(CREATED, "beta.rfldf", sample_level_content())?;

    context
        .open_with_input("edit beta.rfldf -c created -s Title=Renamed -s Difficulty=9\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Metadata of 'beta.rfldf' updated successfully.",
        ));

    let content = fs::read_to_string(context.level_path(CREATED, "beta.rfldf"))?;
    assert!(content.contains("<<Title>>:Renamed"));
    assert!(content.contains("<<Difficulty>>:9"));
    assert!(content.contains("<<Author>>:Alice"));
    // 载荷行保持不变。
    assert!(content.contains("ROW:1,1,0,1"));
    Ok(())
}

/// 测试：对文件中不存在的键 edit 不追加新行。
#[test]
fn edit_unknown_key_does_not_insert() -> anyhow::Result<()> {
    let context = TestContext::new()?;
    context.write_level(CREATED, "beta.rfldf", sample_level_content())?;

    context
        .open_with_input("edit beta.rfldf -c created -s Unknown=X\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: key 'Unknown'"));

    let content = fs::read_to_string(context.level_path(CREATED, "beta.rfldf"))?;
    assert_eq!(content, sample_level_content());
    Ok(())
}

/// 测试：失败的命令只打印错误，REPL 继续处理后续命令。
#[test]
fn failed_command_keeps_repl_running() -> anyhow::Result<()> {
    let context = TestContext::new()?;

    context
        .open_with_input("view ghost.rfldf -c playable\nstatus\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Library Status ---"))
        .stderr(predicate::str::contains("Error:"));

    Ok(())
}

/// 测试：带路径分隔符的文件名被当作非法参数拒绝。
#[test]
fn path_separators_in_level_names_are_rejected() -> anyhow::Result<()> {
    let context = TestContext::new()?;

    context
        .open_with_input("view ../escape.rfldf -c playable\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid level name"));

    Ok(())
}

/// 测试：paths 子命令打印解析出的两个类别根目录。
#[test]
fn paths_prints_resolved_roots() -> anyhow::Result<()> {
    let context = TestContext::new()?;

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_relevel"));
    cmd.arg("paths").arg(&context.levels_root);
    cmd.assert().success().stdout(
        predicate::str::contains("PlayableLevels").and(predicate::str::contains("CreatedLevels")),
    );

    Ok(())
}
