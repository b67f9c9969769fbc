//! Configuration for taskman.
//!
//! Settings live in `config.json` inside the application data directory.
//! A missing file is not an error: defaults are used and nothing is written
//! until the user runs `taskman init`.
//!
//! ```rust,no_run
//! use taskman::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.database_path(None)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Database file location. `None` means `tasks.db` in the data directory.
    pub database: Option<PathBuf>,
    /// Ask before removing a task.
    pub confirm_delete: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: None,
            confirm_delete: true,
        }
    }
}

impl Config {
    pub fn file_path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Reads the configuration from the data directory.
    pub fn read() -> Result<Config> {
        Self::read_from(Self::file_path()?)
    }

    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)
            .with_context(|| Message::ConfigParseError(path.display().to_string()).to_string())?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(Self::file_path()?)
    }

    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let path = Self::file_path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    /// Resolves the database file: explicit override, then config, then the default location.
    pub fn database_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        match &self.database {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }

    /// Interactive setup wizard, seeded with the current values.
    pub fn init() -> Result<Config> {
        let current = Config::read()?;
        let default_db = current.database_path(None)?;

        let database: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDatabasePath.to_string())
            .default(default_db.display().to_string())
            .interact_text()?;

        let confirm_delete = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptConfirmDeletes.to_string())
            .default(current.confirm_delete)
            .interact()?;

        let database = PathBuf::from(database.trim());
        let default_location = DataStorage::new().get_path(DB_FILE_NAME)?;
        Ok(Config {
            database: (database != default_location).then_some(database),
            confirm_delete,
        })
    }
}
