//! Compare command implementation

use anyhow::{bail, Result};
use logscope_core::{LogDate, Settings};

use crate::cli::CompareArgs;
use crate::output::print_diff;

pub fn execute(settings: &Settings, args: CompareArgs) -> Result<()> {
    for server in [&args.server1, &args.server2] {
        if settings.registry.lookup(server).is_none() {
            bail!("Server not found: {}", server)
        }
    }

    let date = LogDate::new(args.date);
    let store = super::open_store(settings);

    let diff = store.compare(&args.server1, &args.server2, &date)?;
    print_diff(&args.server1, &args.server2, &diff);
    Ok(())
}
