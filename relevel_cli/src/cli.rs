use std::path::PathBuf;

use clap::{Parser, Subcommand};

use relevel::common::Category;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: TopLevelCommands,
}

#[derive(Subcommand, Debug)]
pub enum TopLevelCommands {
    /// Open a level library and enter interactive mode
    Open {
        /// Levels root directory (defaults to the platform data directory)
        #[arg(value_name = "LEVELS_ROOT")]
        root: Option<PathBuf>,
    },
    /// Print the resolved category root directories and exit
    Paths {
        /// Levels root directory (defaults to the platform data directory)
        #[arg(value_name = "LEVELS_ROOT")]
        root: Option<PathBuf>,
    },
}

// --- REPL (交互式) 命令定义 ---
#[derive(Parser, Debug)]
#[command(no_binary_name = true, about = "REPL commands")]
pub enum ReplCommand {
    /// List the levels in one or both categories
    #[command(visible_alias = "ls")]
    List {
        /// Only list this category
        #[arg(short = 'c', long = "category")]
        category: Option<Category>,
    },
    /// Show a level's metadata block
    View {
        /// Level file name as shown by 'list'
        #[arg(required = true)]
        file: String,

        /// Category the level currently belongs to
        #[arg(short = 'c', long = "category")]
        category: Category,

        /// Print the metadata as JSON instead of a block
        #[arg(long)]
        json: bool,
    },
    /// Edit a level's metadata fields and save the file
    Edit {
        /// Level file name as shown by 'list'
        #[arg(required = true)]
        file: String,

        /// Category the level currently belongs to
        #[arg(short = 'c', long = "category")]
        category: Category,

        /// KEY=VALUE assignment to apply (repeatable); without it every
        /// field is prompted for interactively
        #[arg(short = 's', long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
    },
    /// Move a level to the opposite category
    #[command(visible_alias = "mv")]
    Move {
        /// Level file name as shown by 'list'
        #[arg(required = true)]
        file: String,

        /// Category the level currently belongs to
        #[arg(short = 'c', long = "category")]
        category: Category,
    },
    /// Copy a level into the opposite category
    #[command(visible_alias = "cp")]
    Copy {
        /// Level file name as shown by 'list'
        #[arg(required = true)]
        file: String,

        /// Category the level currently belongs to
        #[arg(short = 'c', long = "category")]
        category: Category,
    },
    /// Permanently delete a level from a category
    #[command(visible_alias = "rm")]
    Remove {
        /// Level file name as shown by 'list'
        #[arg(required = true)]
        file: String,

        /// Category the level currently belongs to
        #[arg(short = 'c', long = "category")]
        category: Category,

        /// Skip the confirmation prompt
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// Install an external level file into a category
    Install {
        /// Path of the level file to import
        #[arg(required = true)]
        source: PathBuf,

        /// Destination category; asked for interactively when omitted
        #[arg(short = 'c', long = "category")]
        category: Option<Category>,
    },
    /// Show level counts and the category roots
    Status,
    /// Leave the interactive session
    Exit,
}
