//! Mapping of (server, date) keys to log file paths
//!
//! Logs live under `<root>/<year>/<month>/`. Two naming conventions exist:
//!
//! - exact: `<server>_<date>.log`, computed without touching the disk
//! - pattern: any file matching `*<server>*_<date>.log`, found by scanning
//!   the month directory
//!
//! When a pattern matches several files the first one returned is used for
//! single-file reads. The glob crate yields matches in sorted order, so this
//! is the lexicographically smallest name. Ambiguous naming is not detected.

use logscope_core::{log_file_name, LogDate, ResolutionPolicy, LOG_EXTENSION};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Strategy for locating log files
pub trait PathResolver: Send + Sync {
    /// Policy implemented by this resolver
    fn policy(&self) -> ResolutionPolicy;

    /// Candidate paths for a server's log on a date, possibly empty
    fn resolve(&self, server: &str, date: &LogDate) -> Vec<PathBuf>;

    /// The authoritative candidate for single-file operations
    fn resolve_first(&self, server: &str, date: &LogDate) -> Option<PathBuf> {
        self.resolve(server, date).into_iter().next()
    }
}

/// Directory holding one month of logs
pub fn month_dir(root: &Path, year: &str, month: &str) -> PathBuf {
    root.join(year).join(month)
}

/// Resolver for the exact naming convention
#[derive(Debug, Clone)]
pub struct ExactResolver {
    root: PathBuf,
}

impl ExactResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl PathResolver for ExactResolver {
    fn policy(&self) -> ResolutionPolicy {
        ResolutionPolicy::Exact
    }

    fn resolve(&self, server: &str, date: &LogDate) -> Vec<PathBuf> {
        let Some((year, month)) = date.partition() else {
            debug!("Date {:?} has no usable year/month", date.as_str());
            return Vec::new();
        };
        let path = month_dir(&self.root, year, month).join(log_file_name(server, date.as_str()));
        vec![path]
    }
}

/// Resolver for the wildcard naming convention
#[derive(Debug, Clone)]
pub struct PatternResolver {
    root: PathBuf,
}

impl PatternResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The glob expression used for a server and date
    pub fn pattern(&self, server: &str, date: &LogDate) -> Option<String> {
        let (year, month) = date.partition()?;
        let file_pattern = format!(
            "*{}*_{}.{}",
            glob::Pattern::escape(server),
            glob::Pattern::escape(date.as_str()),
            LOG_EXTENSION
        );
        Some(escaped_dir_pattern(&month_dir(&self.root, year, month), &file_pattern))
    }
}

impl PathResolver for PatternResolver {
    fn policy(&self) -> ResolutionPolicy {
        ResolutionPolicy::Pattern
    }

    fn resolve(&self, server: &str, date: &LogDate) -> Vec<PathBuf> {
        match self.pattern(server, date) {
            Some(pattern) => expand(&pattern),
            None => {
                debug!("Date {:?} has no usable year/month", date.as_str());
                Vec::new()
            }
        }
    }
}

/// Build the resolver for a policy
pub fn resolver_for(policy: ResolutionPolicy, root: impl Into<PathBuf>) -> Box<dyn PathResolver> {
    match policy {
        ResolutionPolicy::Exact => Box::new(ExactResolver::new(root)),
        ResolutionPolicy::Pattern => Box::new(PatternResolver::new(root)),
    }
}

/// Join a literal directory with a file pattern, escaping the directory so
/// that metacharacters in the log root are matched literally
pub(crate) fn escaped_dir_pattern(dir: &Path, file_pattern: &str) -> String {
    let dir = glob::Pattern::escape(&dir.to_string_lossy());
    format!("{}{}{}", dir, std::path::MAIN_SEPARATOR, file_pattern)
}

/// Expand a glob expression. A missing directory yields no matches.
pub(crate) fn expand(pattern: &str) -> Vec<PathBuf> {
    let paths = match glob::glob(pattern) {
        Ok(paths) => paths,
        Err(e) => {
            warn!("Invalid log pattern '{}': {}", pattern, e);
            return Vec::new();
        }
    };

    paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                warn!("Skipping unreadable log entry: {}", e);
                None
            }
        })
        .collect()
}
