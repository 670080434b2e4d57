//! Backend Configuration
//!
//! Selects which magnitude backend the transaction layer is given.
//!
//! The selection comes from the `BIGNUM_BACKEND` environment variable
//! (`host` or `fixed`, case-insensitive). When it is unset or unreadable the
//! fixed-capacity backend is used.

use std::env;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::backend_facades::AnyBackend;

/// Environment variable naming the backend
pub const BACKEND_ENV_VAR: &str = "BIGNUM_BACKEND";

/// Available magnitude backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BackendKind {
    /// Arbitrary-precision library, canonical big-endian storage
    Host,
    /// Raw bytes in a fixed-capacity buffer, stored as received
    #[default]
    FixedCapacity,
}

/// Errors produced while reading configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown bignum backend {0:?}")]
    UnknownBackend(String),
}

impl FromStr for BackendKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "host" => Ok(BackendKind::Host),
            "fixed" => Ok(BackendKind::FixedCapacity),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::Host => write!(f, "host"),
            BackendKind::FixedCapacity => write!(f, "fixed"),
        }
    }
}

/// Marshaling layer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarshalConfig {
    pub backend: BackendKind,
}

impl MarshalConfig {
    pub fn new(backend: BackendKind) -> Self {
        Self { backend }
    }

    /// Read the configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownBackend` if the variable is set to an
    /// unrecognised name.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(BACKEND_ENV_VAR) {
            Ok(value) => Ok(Self::new(value.parse()?)),
            Err(_) => Ok(Self::new(BackendKind::default())),
        }
    }

    /// Construct the configured backend
    pub fn build(&self) -> AnyBackend {
        log::debug!("using {} bignum backend", self.backend);
        AnyBackend::new(self.backend)
    }
}

impl Default for MarshalConfig {
    /// Environment configuration, falling back to the default backend if the
    /// variable holds an unknown name
    fn default() -> Self {
        Self::from_env().unwrap_or_else(|err| {
            log::warn!("{}; using {} backend", err, BackendKind::default());
            Self::new(BackendKind::default())
        })
    }
}
