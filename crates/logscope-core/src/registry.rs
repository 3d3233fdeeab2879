//! Read-only registry of known servers

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::{validate_server_name, ServerClass, ServerEntry};

/// Immutable server registry, built once at start-up and shared by reference.
#[derive(Debug, Clone, Default)]
pub struct ServerRegistry {
    entries: Vec<ServerEntry>,
    index: HashMap<String, usize>,
}

impl ServerRegistry {
    /// Build a registry, rejecting invalid or duplicate names
    pub fn new(entries: Vec<ServerEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (i, entry) in entries.iter().enumerate() {
            if !validate_server_name(&entry.name) {
                return Err(Error::InvalidServerName(entry.name.clone()));
            }
            if index.insert(entry.name.clone(), i).is_some() {
                return Err(Error::DuplicateServer(entry.name.clone()));
            }
        }
        Ok(Self { entries, index })
    }

    /// Registry used when no servers are configured
    pub fn builtin() -> Self {
        let entries = vec![
            ServerEntry::new("server1", "192.168.1.101", ServerClass::VirtualMachine),
            ServerEntry::new("server2", "192.168.1.102", ServerClass::BareMetal),
        ];
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();
        Self { entries, index }
    }

    pub fn lookup(&self, name: &str) -> Option<&ServerEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Like [`lookup`](Self::lookup) but as an error for `?` propagation
    pub fn require(&self, name: &str) -> Result<&ServerEntry> {
        self.lookup(name)
            .ok_or_else(|| Error::ServerNotFound(name.to_string()))
    }

    /// All servers in configuration order
    pub fn list_all(&self) -> &[ServerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
