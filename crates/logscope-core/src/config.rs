//! Configuration file parsing for LogScope
//!
//! Supports multiple configuration file formats:
//! - TOML (.toml)
//! - YAML (.yaml, .yml)
//! - JSON (.json)
//!
//! Values resolve in layers: built-in defaults, then the config file, then
//! environment variables. The CLI applies its own flags last.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::error::{Error, Result};
use crate::registry::ServerRegistry;
use crate::types::{ResolutionPolicy, ServerClass, ServerEntry};

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(ConfigFormat::Toml),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    /// Detect format from file path
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Configuration file structure (logscope.toml/yaml/json)
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Log root; relative paths are taken from the config file's directory
    pub log_dir: Option<String>,
    /// "exact" or "pattern"
    pub policy: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    #[serde(default)]
    pub servers: Vec<ServerConfig>,
}

/// Single server entry from config file
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    pub name: String,
    pub ip: String,
    #[serde(rename = "type")]
    pub class: String,
}

impl ServerConfig {
    pub fn into_entry(self) -> Result<ServerEntry> {
        let class = self.class.parse::<ServerClass>()?;
        Ok(ServerEntry::new(self.name, self.ip, class))
    }
}

impl ConfigFile {
    /// Load config from file, automatically detecting format from extension
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            Error::ConfigError(format!(
                "Unsupported config file extension: {}. Expected .toml, .yaml, .yml, or .json",
                path.display()
            ))
        })?;

        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, format)
    }

    /// Parse config content with specified format
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Toml => Ok(toml::from_str(content)?),
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(content)?),
            ConfigFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }

    /// Find and load the first known config file in a directory
    pub fn find_and_load(dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        for name in CONFIG_FILES {
            let path = dir.join(name);
            if path.exists() {
                let config = Self::load(&path)?;
                return Ok(Some((config, path)));
            }
        }
        Ok(None)
    }

    /// Resolve into runtime settings
    pub fn into_settings(self, base_dir: &Path) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(dir) = self.log_dir {
            let p = Path::new(&dir);
            settings.log_dir = if p.is_absolute() {
                p.to_path_buf()
            } else {
                base_dir.join(p)
            };
        }
        if let Some(policy) = self.policy {
            settings.policy = policy.parse()?;
        }
        if let Some(host) = self.host {
            settings.host = host;
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if !self.servers.is_empty() {
            let entries = self
                .servers
                .into_iter()
                .map(ServerConfig::into_entry)
                .collect::<Result<Vec<_>>>()?;
            settings.registry = ServerRegistry::new(entries)?;
        }

        Ok(settings)
    }
}

/// Fully resolved runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub log_dir: PathBuf,
    pub policy: ResolutionPolicy,
    pub host: String,
    pub port: u16,
    pub registry: ServerRegistry,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            policy: ResolutionPolicy::default(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            registry: ServerRegistry::builtin(),
        }
    }
}

impl Settings {
    /// Load settings from an explicit config file, or from the first config
    /// file found in `dir`, falling back to defaults.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        match explicit {
            Some(path) => {
                let base = path.parent().unwrap_or(dir);
                ConfigFile::load(path)?.into_settings(base)
            }
            None => match ConfigFile::find_and_load(dir)? {
                Some((config, _)) => config.into_settings(dir),
                None => Ok(Self::default()),
            },
        }
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key/value source
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_LOG_DIR) {
            self.log_dir = PathBuf::from(dir);
        }
        if let Some(policy) = lookup(ENV_POLICY) {
            self.policy = policy.parse()?;
        }
        if let Some(host) = lookup(ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port
                .parse()
                .map_err(|_| Error::config(format!("Invalid {}: {}", ENV_PORT, port)))?;
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_config_format_detection() {
        assert_eq!(ConfigFormat::from_extension("toml"), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_extension("YML"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("json"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("ini"), None);
    }

    #[test]
    fn test_config_parse_toml() {
        let config_content = r#"
log_dir = "/var/log/fleet"
policy = "exact"
port = 8080

[[servers]]
name = "vm1"
ip = "10.0.0.1"
type = "VM"

[[servers]]
name = "bm1"
ip = "10.0.0.2"
type = "BM"
"#;
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        file.write_all(config_content.as_bytes()).unwrap();

        let settings = ConfigFile::load(file.path())
            .unwrap()
            .into_settings(Path::new("/etc"))
            .unwrap();
        assert_eq!(settings.log_dir, PathBuf::from("/var/log/fleet"));
        assert_eq!(settings.policy, ResolutionPolicy::Exact);
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.host, DEFAULT_HOST);
        assert_eq!(settings.registry.len(), 2);
        assert_eq!(
            settings.registry.lookup("bm1").unwrap().class,
            ServerClass::BareMetal
        );
    }

    #[test]
    fn test_config_parse_yaml_relative_log_dir() {
        let config_content = r#"
log_dir: data/logs
servers:
  - name: web-01
    ip: 172.16.0.10
    type: vm
"#;
        let config = ConfigFile::parse(config_content, ConfigFormat::Yaml).unwrap();
        let settings = config.into_settings(Path::new("/srv/app")).unwrap();
        assert_eq!(settings.log_dir, PathBuf::from("/srv/app/data/logs"));
        assert_eq!(settings.policy, ResolutionPolicy::Pattern);
        assert!(settings.registry.lookup("web-01").is_some());
    }

    #[test]
    fn test_config_parse_json() {
        let config_content = r#"{ "policy": "pattern", "servers": [
            { "name": "vm1", "ip": "10.0.0.1", "type": "VM" }
        ] }"#;
        let config = ConfigFile::parse(config_content, ConfigFormat::Json).unwrap();
        assert_eq!(config.servers.len(), 1);
        assert_eq!(config.servers[0].class, "VM");
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let bad_type = r#"{ "servers": [ { "name": "vm1", "ip": "x", "type": "lxc" } ] }"#;
        let config = ConfigFile::parse(bad_type, ConfigFormat::Json).unwrap();
        assert!(matches!(
            config.into_settings(Path::new(".")),
            Err(Error::InvalidServerClass(_))
        ));

        let bad_policy = r#"policy = "fuzzy""#;
        let config = ConfigFile::parse(bad_policy, ConfigFormat::Toml).unwrap();
        assert!(matches!(
            config.into_settings(Path::new(".")),
            Err(Error::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_config_not_found() {
        let result = ConfigFile::load(Path::new("/nonexistent/logscope.toml"));
        assert!(matches!(result, Err(Error::ConfigNotFound(_))));
    }

    #[test]
    fn test_settings_load_defaults_without_file() {
        let dir = TempDir::new().unwrap();
        let settings = Settings::load(None, dir.path()).unwrap();
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.log_dir, default_log_dir());
        assert_eq!(settings.registry.len(), 2);
    }

    #[test]
    fn test_settings_load_discovers_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("logscope.toml"), "port = 7000\n").unwrap();
        let settings = Settings::load(None, dir.path()).unwrap();
        assert_eq!(settings.port, 7000);
    }

    #[test]
    fn test_apply_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_LOG_DIR, "/data/logs"),
            (ENV_POLICY, "exact"),
            (ENV_PORT, "9000"),
        ]);
        let mut settings = Settings::default();
        settings
            .apply_overrides(|k| env.get(k).map(|v| v.to_string()))
            .unwrap();
        assert_eq!(settings.log_dir, PathBuf::from("/data/logs"));
        assert_eq!(settings.policy, ResolutionPolicy::Exact);
        assert_eq!(settings.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn test_apply_overrides_invalid_port() {
        let mut settings = Settings::default();
        let result = settings.apply_overrides(|k| (k == ENV_PORT).then(|| "http".to_string()));
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }
}
