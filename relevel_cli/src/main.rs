mod cli;
mod errors;
mod handlers;
mod repl;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use relevel::catalog::{Catalog, CatalogConfig};

use crate::cli::{Cli, TopLevelCommands};
use crate::errors::CliError;
use crate::repl::run_repl;
use crate::repl::state::AppState;

fn main() -> Result<(), CliError> {
    // Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        TopLevelCommands::Open { root } => {
            let config = resolve_config(root);
            match open_catalog(config) {
                Ok(catalog) => {
                    println!("Level library opened. Entering interactive mode.");
                    println!("Type 'help' for commands or 'exit' to quit.");
                    let mut app_state = AppState {
                        active_catalog: Some(catalog),
                    };
                    run_repl(&mut app_state)?;
                }
                Err(e) => {
                    tracing::error!(error = %e, "failed to open level library");
                    eprintln!("Error: {}", e);
                }
            }
        }
        TopLevelCommands::Paths { root } => {
            let config = resolve_config(root);
            println!("Playable levels: {}", config.playable_root.display());
            println!("Created levels:  {}", config.created_root.display());
        }
    }
    Ok(())
}

/// 解析关卡库配置：显式根目录优先，否则回落到平台默认位置。
fn resolve_config(root: Option<PathBuf>) -> CatalogConfig {
    match root {
        Some(path) => CatalogConfig::from_levels_root(&path),
        None => CatalogConfig::resolve_default(),
    }
}

fn open_catalog(config: CatalogConfig) -> Result<Catalog, CliError> {
    config.ensure_roots()?;
    tracing::info!(
        playable = %config.playable_root.display(),
        created = %config.created_root.display(),
        "level library opened"
    );
    Ok(Catalog::new(config))
}
