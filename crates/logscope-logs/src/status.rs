//! Activity status from log presence
//!
//! A server is active when at least one `<server>_*.log` file exists in the
//! directory for the given month. File age and content are not inspected.

use chrono::NaiveDate;
use logscope_core::{ServerStatus, LOG_EXTENSION};
use std::path::Path;
use tracing::debug;

use crate::resolver::{escaped_dir_pattern, expand, month_dir};

/// Evaluate a server's status for the month containing `today`
pub fn evaluate(root: &Path, server: &str, today: NaiveDate) -> ServerStatus {
    let year = today.format("%Y").to_string();
    let month = today.format("%m").to_string();
    let file_pattern = format!("{}_*.{}", glob::Pattern::escape(server), LOG_EXTENSION);
    let pattern = escaped_dir_pattern(&month_dir(root, &year, &month), &file_pattern);

    let status = if expand(&pattern).is_empty() {
        ServerStatus::Inactive
    } else {
        ServerStatus::Active
    };
    debug!("Status of {} for {}-{}: {}", server, year, month, status);
    status
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn june_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
    }

    #[test]
    fn test_active_with_file_in_month() {
        let dir = TempDir::new().unwrap();
        let month = dir.path().join("2024/06");
        fs::create_dir_all(&month).unwrap();
        fs::write(month.join("vm1_2024-06-01.log"), "a\nb\nc\n").unwrap();

        assert_eq!(evaluate(dir.path(), "vm1", june_2024()), ServerStatus::Active);
    }

    #[test]
    fn test_inactive_without_file() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("2024/06")).unwrap();

        assert_eq!(evaluate(dir.path(), "vm1", june_2024()), ServerStatus::Inactive);
    }

    #[test]
    fn test_inactive_without_month_directory() {
        let dir = TempDir::new().unwrap();
        assert_eq!(evaluate(dir.path(), "vm1", june_2024()), ServerStatus::Inactive);
    }

    #[test]
    fn test_other_month_does_not_count() {
        let dir = TempDir::new().unwrap();
        let may = dir.path().join("2024/05");
        fs::create_dir_all(&may).unwrap();
        fs::write(may.join("vm1_2024-05-31.log"), "x\n").unwrap();

        assert_eq!(evaluate(dir.path(), "vm1", june_2024()), ServerStatus::Inactive);
    }

    #[test]
    fn test_prefix_must_be_exact_server_name() {
        let dir = TempDir::new().unwrap();
        let month = dir.path().join("2024/06");
        fs::create_dir_all(&month).unwrap();
        fs::write(month.join("prod-vm1_2024-06-01.log"), "x\n").unwrap();
        fs::write(month.join("vm10_2024-06-01.log"), "x\n").unwrap();

        assert_eq!(evaluate(dir.path(), "vm1", june_2024()), ServerStatus::Inactive);
        assert_eq!(evaluate(dir.path(), "vm10", june_2024()), ServerStatus::Active);
    }
}
