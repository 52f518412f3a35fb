//! Functions for user interaction, like confirmation prompts.

use std::io;
use std::io::Write;

use relevel::common::Category;

/// 向用户请求确认破坏性操作
pub fn confirm_action(prompt: &str) -> Result<bool, io::Error> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;
    let mut confirmation = String::new();
    io::stdin().read_line(&mut confirmation)?;
    Ok(confirmation.trim().eq_ignore_ascii_case("y")
        || confirmation.trim().eq_ignore_ascii_case("yes"))
}

/// 显示提示并读取一行输入 (去除首尾空白)。
pub fn prompt_line(prompt: &str) -> Result<String, io::Error> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// 询问安装目标类别；返回 None 表示取消安装。
pub fn choose_category() -> Result<Option<Category>, io::Error> {
    let choice = prompt_line("Install into which category? [p]layable / [c]reated / [N]one: ")?;
    Ok(choice.parse::<Category>().ok())
}
