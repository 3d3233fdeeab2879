//! Terminal output formatting

use colored::Colorize;
use logscope_core::{DiffEntry, ServerEntry, ServerStatus};
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tabled::{Table, Tabled, settings::Style};

/// Global flag for JSON output mode
static JSON_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable JSON output mode
pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::SeqCst);
}

/// Check if JSON output mode is enabled
pub fn is_json_mode() -> bool {
    JSON_MODE.load(Ordering::SeqCst)
}

#[derive(Tabled)]
pub struct ServerRow {
    #[tabled(rename = "name")]
    pub name: String,
    #[tabled(rename = "ip")]
    pub ip: String,
    #[tabled(rename = "type")]
    pub class: String,
    #[tabled(rename = "status")]
    pub status: String,
}

/// JSON-friendly server representation, same shape as `GET /servers`
#[derive(Serialize)]
pub struct ServerJson {
    pub name: String,
    pub ip: String,
    #[serde(rename = "type")]
    pub class: String,
    pub status: ServerStatus,
}

impl ServerRow {
    fn new(entry: &ServerEntry, status: ServerStatus) -> Self {
        ServerRow {
            name: entry.name.clone(),
            ip: entry.ip.clone(),
            class: entry.class.to_string(),
            status: format_status(status),
        }
    }
}

impl ServerJson {
    fn new(entry: &ServerEntry, status: ServerStatus) -> Self {
        ServerJson {
            name: entry.name.clone(),
            ip: entry.ip.clone(),
            class: entry.class.to_string(),
            status,
        }
    }
}

fn format_status(status: ServerStatus) -> String {
    match status {
        ServerStatus::Active => "active".green().to_string(),
        ServerStatus::Inactive => "inactive".red().to_string(),
    }
}

pub fn print_servers(servers: &[(&ServerEntry, ServerStatus)]) {
    if is_json_mode() {
        let rows: Vec<ServerJson> = servers.iter().map(|(e, s)| ServerJson::new(e, *s)).collect();
        print_json(&rows);
        return;
    }

    if servers.is_empty() {
        println!("No servers registered");
        return;
    }

    let rows: Vec<ServerRow> = servers.iter().map(|(e, s)| ServerRow::new(e, *s)).collect();
    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);
}

/// Print log lines, or a JSON array of them
pub fn print_logs(lines: &[String]) {
    if is_json_mode() {
        print_json(lines);
        return;
    }

    for line in lines {
        println!("{}", line);
    }
}

#[derive(Serialize)]
struct DiffJson<'a> {
    position: usize,
    server1: &'a str,
    server2: &'a str,
}

/// Print mismatching lines, one pair per position (1-based in text mode)
pub fn print_diff(server1: &str, server2: &str, diff: &[DiffEntry]) {
    if is_json_mode() {
        let rows: Vec<DiffJson> = diff
            .iter()
            .map(|d| DiffJson {
                position: d.position,
                server1: &d.first,
                server2: &d.second,
            })
            .collect();
        print_json(&rows);
        return;
    }

    if diff.is_empty() {
        print_success("No differences");
        return;
    }

    let width = server1.len().max(server2.len());
    for entry in diff {
        println!("{}", format!("@@ line {} @@", entry.position + 1).cyan());
        println!("{} {:width$} │ {}", "-".red(), server1, entry.first.red());
        println!("{} {:width$} │ {}", "+".green(), server2, entry.second.green());
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}
