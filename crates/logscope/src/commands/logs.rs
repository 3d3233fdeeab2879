//! Logs command implementation

use anyhow::{bail, Result};
use logscope_core::{LogDate, Settings};

use crate::cli::LogsArgs;
use crate::output::print_logs;

pub fn execute(settings: &Settings, args: LogsArgs) -> Result<()> {
    if settings.registry.lookup(&args.server).is_none() {
        bail!("Server not found: {}", args.server)
    }

    let date = args.date.map(LogDate::new).unwrap_or_else(LogDate::today);
    let lines = super::open_store(settings).view_lines(&args.server, &date)?;

    print_logs(&lines);
    Ok(())
}
