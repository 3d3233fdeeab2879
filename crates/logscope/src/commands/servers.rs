//! Servers command implementation

use anyhow::Result;
use logscope_core::Settings;

use crate::output::print_servers;

pub fn execute(settings: &Settings) -> Result<()> {
    let store = super::open_store(settings);

    let rows: Vec<_> = settings
        .registry
        .list_all()
        .iter()
        .map(|entry| (entry, store.status(&entry.name)))
        .collect();

    print_servers(&rows);
    Ok(())
}
