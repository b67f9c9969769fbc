pub mod init;
pub mod menu;
pub mod task;

use crate::db::{db::Db, tasks::Tasks};
use crate::libs::{config::Config, messages::Message};
use crate::msg_warning;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Add a task")]
    Add(task::AddArgs),
    #[command(about = "List all tasks")]
    List(task::ListArgs),
    #[command(about = "Edit a task's description or due date")]
    Edit(task::EditArgs),
    #[command(about = "Remove a task")]
    Remove(task::RemoveArgs),
    #[command(about = "Mark a task complete or incomplete")]
    Mark(task::MarkArgs),
    #[command(
        about = "Interactive menu (default when no command is given)",
        long_about = "Interactive menu (default when no command is given). Needs an interactive terminal; \
                      with piped input use the add, list, edit, remove and mark commands instead."
    )]
    Menu,
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database file to use instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn run() -> Result<()> {
        Self::parse().execute()
    }

    pub fn execute(self) -> Result<()> {
        let db = self.db.as_deref();
        match self.command.unwrap_or(Commands::Menu) {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => task::add_cmd(&mut Session::open(db)?, args),
            Commands::List(args) => task::list_cmd(&mut Session::open(db)?, args),
            Commands::Edit(args) => task::edit_cmd(&mut Session::open(db)?, args),
            Commands::Remove(args) => task::remove_cmd(&mut Session::open(db)?, args),
            Commands::Mark(args) => task::mark_cmd(&mut Session::open(db)?, args),
            Commands::Menu => menu::cmd(&mut Session::open(db)?),
        }
    }
}

/// The store and settings for one run of the program.
///
/// Opened once and passed down explicitly. The database connection closes
/// when the session is dropped, whichever way the command returns.
pub struct Session {
    pub tasks: Tasks,
    pub config: Config,
}

impl Session {
    pub fn open(db_override: Option<&Path>) -> Result<Session> {
        Self::open_from(&Config::file_path()?, db_override)
    }

    /// Opens a session with the configuration at `config_path`.
    ///
    /// With an explicit database path an unreadable config only costs the
    /// other settings: defaults are used and a warning is printed.
    pub fn open_from(config_path: &Path, db_override: Option<&Path>) -> Result<Session> {
        let config = match Config::read_from(config_path) {
            Ok(config) => config,
            Err(e) if db_override.is_some() => {
                msg_warning!(Message::ConfigIgnored(format!("{:#}", e)));
                Config::default()
            }
            Err(e) => return Err(e),
        };
        let db_path = config.database_path(db_override)?;
        let tasks = Tasks::new(Db::open(db_path)?)?;

        Ok(Session { tasks, config })
    }
}
