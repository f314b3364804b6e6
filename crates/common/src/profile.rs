//! Audience profile loading from YAML
//!
//! Each generated document takes its `info` block and server URL from a
//! profile. The default table is embedded at build time; an alternative file
//! can be supplied at runtime.

use crate::{Audience, GeneratorError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const BUILTIN_PROFILES: &str = include_str!("../profiles.yaml");

fn default_version() -> String {
    "1.0.0".to_string()
}

/// Document metadata for one audience
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AudienceProfile {
    /// Document title (`info.title`)
    pub title: String,
    /// Document description (`info.description`)
    pub description: String,
    /// Base URL placed in `servers[0].url`
    pub server_url: String,
    /// Document version (`info.version`)
    #[serde(default = "default_version")]
    pub version: String,
}

/// Profiles for every audience
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AudienceProfiles {
    pub public: AudienceProfile,
    pub publisher_only: AudienceProfile,
    pub undocumented: AudienceProfile,
}

impl AudienceProfiles {
    /// Profiles bundled with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_PROFILES)
    }

    /// Load profiles from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GeneratorError::Config(format!("Failed to read profiles file {:?}: {}", path, e))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse profiles from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| GeneratorError::Config(format!("Failed to parse profiles YAML: {}", e)))
    }

    pub fn get(&self, audience: Audience) -> &AudienceProfile {
        match audience {
            Audience::Public => &self.public,
            Audience::PublisherOnly => &self.publisher_only,
            Audience::Undocumented => &self.undocumented,
        }
    }
}
