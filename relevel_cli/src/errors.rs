use std::io;

use thiserror::Error;

use relevel::catalog::{EditError, InstallError, ListError, RemoveError, TransferError};
use relevel::level::NameError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid level name: {0}")]
    Name(#[from] NameError),

    #[error("Invalid metadata assignment '{0}'. Expected KEY=VALUE.")]
    InvalidAssignment(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("REPL Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("Failed to list levels: {0}")]
    List(#[from] ListError),

    #[error("Failed to transfer level: {0}")]
    Transfer(#[from] TransferError),

    #[error("Failed to delete level: {0}")]
    Remove(#[from] RemoveError),

    #[error("Failed to install level: {0}")]
    Install(#[from] InstallError),

    #[error("Failed to edit level: {0}")]
    Edit(#[from] EditError),

    #[error("Failed to render metadata as JSON: {0}")]
    Json(#[from] serde_json::Error),
}
