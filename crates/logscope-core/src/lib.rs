//! LogScope Core - Shared types, server registry, configuration, and error handling

pub mod config;
pub mod constants;
pub mod error;
pub mod registry;
pub mod types;

pub use config::*;
pub use constants::*;
pub use error::{Error, Result};
pub use registry::ServerRegistry;
pub use types::*;
