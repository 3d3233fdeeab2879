//! Core types for LogScope

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Regex pattern for valid server names: alphanumeric, underscore, hyphen, and dot
static SERVER_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.-]+$").expect("Invalid server name regex")
});

/// Validate a server name so it can never escape the log root when joined
/// into a file name
pub fn validate_server_name(name: &str) -> bool {
    !name.is_empty() && !name.contains("..") && SERVER_NAME_REGEX.is_match(name)
}

/// Hosting class of a server
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ServerClass {
    #[serde(rename = "VM", alias = "vm")]
    VirtualMachine,
    #[serde(rename = "BM", alias = "bm")]
    BareMetal,
}

impl ServerClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerClass::VirtualMachine => "VM",
            ServerClass::BareMetal => "BM",
        }
    }
}

impl std::fmt::Display for ServerClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ServerClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "vm" | "virtual" | "virtualmachine" => Ok(ServerClass::VirtualMachine),
            "bm" | "baremetal" | "bare-metal" => Ok(ServerClass::BareMetal),
            _ => Err(Error::InvalidServerClass(s.to_string())),
        }
    }
}

/// A registered server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServerEntry {
    /// Unique identifier, also the stem used in log file names
    pub name: String,
    /// Network address
    pub ip: String,
    #[serde(rename = "type")]
    pub class: ServerClass,
}

impl ServerEntry {
    pub fn new(name: impl Into<String>, ip: impl Into<String>, class: ServerClass) -> Self {
        Self {
            name: name.into(),
            ip: ip.into(),
            class,
        }
    }
}

/// Activity status derived from log file presence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Active,
    Inactive,
}

impl ServerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServerStatus::Active => "active",
            ServerStatus::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a (server, date) pair maps to files on disk
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionPolicy {
    /// `<server>_<date>.log`, no directory scan
    Exact,
    /// `*<server>*_<date>.log`, expanded against the month directory
    #[default]
    Pattern,
}

impl ResolutionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionPolicy::Exact => "exact",
            ResolutionPolicy::Pattern => "pattern",
        }
    }
}

impl std::fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResolutionPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(ResolutionPolicy::Exact),
            "pattern" | "glob" => Ok(ResolutionPolicy::Pattern),
            _ => Err(Error::InvalidPolicy(s.to_string())),
        }
    }
}

/// A calendar date as received from a client (`YYYY-MM-DD`).
///
/// The value is kept verbatim. Only the first two dash-separated components
/// are interpreted, as the year and month directory names, and they are not
/// checked for being numeric or in range. A date that names a non-existent
/// month simply resolves to a directory that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogDate(String);

impl LogDate {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Today's date in local time
    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date.format("%Y-%m-%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `(year, month)` directory components.
    ///
    /// Returns `None` when the date has fewer than two components or when a
    /// component could not be used as a single directory name (empty, `.`,
    /// `..`, or containing a path separator).
    pub fn partition(&self) -> Option<(&str, &str)> {
        if self.0.contains(['/', '\\', '\0']) {
            return None;
        }
        let mut parts = self.0.split('-');
        let year = parts.next()?;
        let month = parts.next()?;
        if is_unsafe_component(year) || is_unsafe_component(month) {
            return None;
        }
        Some((year, month))
    }
}

fn is_unsafe_component(part: &str) -> bool {
    part.is_empty() || part == "." || part == ".."
}

impl std::fmt::Display for LogDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LogDate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for LogDate {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One mismatching line pair produced by the positional diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffEntry {
    /// Zero-based line index
    pub position: usize,
    pub first: String,
    pub second: String,
}

impl DiffEntry {
    pub fn new(position: usize, first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            position,
            first: first.into(),
            second: second.into(),
        }
    }
}
