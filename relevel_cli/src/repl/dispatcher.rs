use crate::cli::ReplCommand;
use crate::errors::CliError;
use crate::handlers;
use crate::repl::state::AppState;
use crate::ui::printer;

/// REPL 命令分发器。
///
/// 每个修改磁盘状态的命令成功后都会重新列出两个类别，使显示状态与
/// 文件系统重新同步；失败的命令只打印错误，不中断会话。
pub fn handle_repl_command(command: ReplCommand, app_state: &mut AppState) -> Result<(), CliError> {
    let Some(catalog) = app_state.active_catalog.as_ref() else {
        return Ok(());
    };

    match command {
        ReplCommand::List { category } => {
            handlers::list::handle_list(catalog, category);
        }
        ReplCommand::View {
            file,
            category,
            json,
        } => {
            handlers::view::handle_view(catalog, &file, category, json)?;
        }
        ReplCommand::Edit {
            file,
            category,
            set,
        } => {
            let saved = handlers::edit::handle_edit(catalog, &file, category, &set)?;
            if saved {
                handlers::list::handle_list(catalog, None);
            }
        }
        ReplCommand::Move { file, category } => {
            handlers::transfer::handle_move(catalog, &file, category)?;
            handlers::list::handle_list(catalog, None);
        }
        ReplCommand::Copy { file, category } => {
            handlers::transfer::handle_copy(catalog, &file, category)?;
            handlers::list::handle_list(catalog, None);
        }
        ReplCommand::Remove {
            file,
            category,
            force,
        } => {
            let removed = handlers::remove::handle_remove(catalog, &file, category, force)?;
            if removed {
                handlers::list::handle_list(catalog, None);
            }
        }
        ReplCommand::Install { source, category } => {
            let installed = handlers::install::handle_install(catalog, &source, category)?;
            if installed {
                handlers::list::handle_list(catalog, None);
            }
        }
        ReplCommand::Status => {
            let status = handlers::status::handle_status(catalog)?;
            printer::print_status(&status);
        }
        ReplCommand::Exit => {
            app_state.active_catalog.take();
            println!("Closing level library. Goodbye!");
        }
    }
    Ok(())
}
