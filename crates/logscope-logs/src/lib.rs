//! LogScope Logs - Location, reading, status and comparison of per-server logs

mod diff;
mod reader;
mod resolver;
mod status;

pub use diff::diff_lines;
pub use reader::{LogFile, LogReader};
pub use resolver::{month_dir, resolver_for, ExactResolver, PathResolver, PatternResolver};

use chrono::{Local, NaiveDate};
use logscope_core::{
    no_logs_message, DiffEntry, Error, LogDate, ResolutionPolicy, Result, ServerStatus,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Date-partitioned log tree with a resolution strategy.
///
/// Every operation takes plain server names; checking them against the
/// registry is the caller's job.
pub struct LogStore {
    root: PathBuf,
    resolver: Box<dyn PathResolver>,
}

impl LogStore {
    pub fn new(root: impl Into<PathBuf>, policy: ResolutionPolicy) -> Self {
        let root = root.into();
        let resolver = resolver_for(policy, root.clone());
        Self { root, resolver }
    }

    /// Use a custom resolver
    pub fn with_resolver(root: impl Into<PathBuf>, resolver: Box<dyn PathResolver>) -> Self {
        Self {
            root: root.into(),
            resolver,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn policy(&self) -> ResolutionPolicy {
        self.resolver.policy()
    }

    /// All candidate paths for a server and date
    pub fn resolve(&self, server: &str, date: &LogDate) -> Vec<PathBuf> {
        self.resolver.resolve(server, date)
    }

    /// Lines of the authoritative log file, or `Error::LogNotFound`
    pub fn read_lines(&self, server: &str, date: &LogDate) -> Result<Vec<String>> {
        let path = self
            .resolver
            .resolve_first(server, date)
            .ok_or_else(|| Error::log_not_found(server, date.as_str()))?;
        debug!("Reading {} for {} on {}", path.display(), server, date);

        LogReader::new(path)
            .read_lines()?
            .ok_or_else(|| Error::log_not_found(server, date.as_str()))
    }

    /// Lines for display: a missing file becomes a single placeholder line
    pub fn view_lines(&self, server: &str, date: &LogDate) -> Result<Vec<String>> {
        match self.read_lines(server, date) {
            Err(e) if e.is_not_found() => Ok(vec![no_logs_message(server, date.as_str())]),
            other => other,
        }
    }

    /// Open the authoritative log file for download
    pub fn open(&self, server: &str, date: &LogDate) -> Result<LogFile> {
        let path = self
            .resolver
            .resolve_first(server, date)
            .ok_or_else(|| Error::log_not_found(server, date.as_str()))?;

        LogReader::new(path)
            .open()?
            .ok_or_else(|| Error::log_not_found(server, date.as_str()))
    }

    /// Positional diff of two servers' logs for the same date
    pub fn compare(&self, first: &str, second: &str, date: &LogDate) -> Result<Vec<DiffEntry>> {
        let first_lines = self.read_lines(first, date)?;
        let second_lines = self.read_lines(second, date)?;
        Ok(diff_lines(&first_lines, &second_lines))
    }

    /// Status for the current local month
    pub fn status(&self, server: &str) -> ServerStatus {
        self.status_on(server, Local::now().date_naive())
    }

    /// Status for the month containing `today`
    pub fn status_on(&self, server: &str, today: NaiveDate) -> ServerStatus {
        status::evaluate(&self.root, server, today)
    }

    /// Create the log root and the directory for the month of `today`
    pub fn ensure_layout(&self, today: NaiveDate) -> Result<()> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root)?;
            info!("Created log root: {}", self.root.display());
        }
        self.ensure_month_dir(&LogDate::from_naive(today))?;
        Ok(())
    }

    /// Create the month directory for a date if it is missing.
    ///
    /// Returns `None` without touching the disk unless both year and month
    /// are all digits.
    pub fn ensure_month_dir(&self, date: &LogDate) -> Result<Option<PathBuf>> {
        let Some((year, month)) = date.partition() else {
            return Ok(None);
        };
        let numeric = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !numeric(year) || !numeric(month) {
            return Ok(None);
        }
        let dir = month_dir(&self.root, year, month);
        if !dir.exists() {
            std::fs::create_dir_all(&dir)?;
            debug!("Created month directory: {}", dir.display());
        }
        Ok(Some(dir))
    }
}
