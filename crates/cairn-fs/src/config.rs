//! Backend connection configuration.
//!
//! Pure data, parsed from TOML: the embedding application reads these values
//! and constructs the object store and index store clients itself, since the
//! adapter core only composes already-built backends. The optional `backup`
//! table describes a secondary adapter to mirror mutations into; leaving it
//! out is valid and permanent.

use serde::{Deserialize, Serialize};

use crate::error::{FsError, FsResult};

/// Object store client settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectStoreConfig {
    pub hostname: String,
    /// Gateway port.
    pub port: u16,
    /// API port.
    pub api_port: u16,
}

impl Default for ObjectStoreConfig {
    fn default() -> Self {
        Self {
            hostname: "localhost".to_string(),
            port: 8080,
            api_port: 5001,
        }
    }
}

/// Index store connection descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    pub url: String,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://127.0.0.1:6379".to_string(),
        }
    }
}

/// Full adapter configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Adapter variant to construct.
    pub adapter: String,
    pub object_store: ObjectStoreConfig,
    pub redis: RedisConfig,
    /// Secondary adapter receiving a replay of every mutation.
    pub backup: Option<Box<AdapterConfig>>,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            adapter: "ipfs".to_string(),
            object_store: ObjectStoreConfig::default(),
            redis: RedisConfig::default(),
            backup: None,
        }
    }
}

impl AdapterConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(raw: &str) -> FsResult<Self> {
        toml::from_str(raw).map_err(|e| FsError::Config(e.to_string()))
    }
}
