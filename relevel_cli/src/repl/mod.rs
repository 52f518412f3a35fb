pub mod dispatcher;
pub mod state;

use clap::Parser;
use rustyline::DefaultEditor;

use crate::cli::ReplCommand;
use crate::errors::CliError;
use crate::repl::dispatcher::handle_repl_command;
use crate::repl::state::AppState;

pub fn run_repl(app_state: &mut AppState) -> Result<(), CliError> {
    let mut rl = DefaultEditor::new()?;

    while app_state.active_catalog.is_some() {
        let readline = rl.readline("relevel> ");
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                let args = shlex::split(line.as_str()).unwrap_or_default();
                if args.is_empty() {
                    continue;
                }

                match ReplCommand::try_parse_from(args) {
                    Ok(command) => {
                        if let Err(e) = handle_repl_command(command, app_state) {
                            tracing::error!(error = %e, "command failed");
                            eprintln!("Error: {}", e);
                        }
                    }
                    Err(e) => {
                        e.print()?;
                    }
                }
            }
            Err(_) => {
                // Ctrl-C / Ctrl-D 也关闭关卡库。
                if app_state.active_catalog.take().is_some() {
                    println!("\nClosing level library. Goodbye!");
                }
                break;
            }
        }
    }
    Ok(())
}
