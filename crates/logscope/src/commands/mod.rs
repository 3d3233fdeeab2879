//! Command implementations

pub mod compare;
pub mod logs;
pub mod serve;
pub mod servers;

use anyhow::{Context, Result};
use logscope_core::Settings;
use logscope_logs::LogStore;

use crate::cli::Cli;

/// Resolve settings: config file, then environment, then global flags
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    let mut settings = Settings::load(cli.config.as_deref(), &cwd)?;
    settings.apply_env()?;

    if let Some(dir) = &cli.log_dir {
        settings.log_dir = dir.clone();
    }
    if let Some(policy) = cli.policy {
        settings.policy = policy.into();
    }
    Ok(settings)
}

/// Build the log store described by the settings
pub fn open_store(settings: &Settings) -> LogStore {
    LogStore::new(settings.log_dir.clone(), settings.policy)
}
