//! Raw catalog type definitions
//!
//! Field names follow the catalog notation verbatim.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Catalog root: service name -> service
pub type RawCatalog = IndexMap<String, RawService>;

/// Service: method name -> method
pub type RawService = IndexMap<String, RawMethod>;

/// Method descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMethod {
    /// Audience tag ("undocumented", "publisher_only"); absent means public
    #[serde(rename = "_type")]
    #[serde(default)]
    pub audience: Option<String>,

    /// Method version
    pub version: u32,

    /// HTTP verb (e.g., "GET", "POST")
    #[serde(rename = "httpmethod")]
    #[serde(default)]
    pub http_method: Option<String>,

    /// Parameters, in declaration order
    #[serde(default, deserialize_with = "null_as_default")]
    pub parameters: Vec<RawParameter>,

    /// Description
    #[serde(default)]
    pub description: Option<String>,
}

/// Parameter descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawParameter {
    /// Parameter name; `[0]` marks an array
    pub name: String,

    /// Primitive or symbolic type name
    #[serde(rename = "type")]
    pub type_name: String,

    /// Inverted required flag
    #[serde(default, deserialize_with = "null_as_default")]
    pub optional: bool,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Fields of a structured parameter
    #[serde(default, deserialize_with = "null_as_default")]
    pub extra: Vec<RawParameter>,
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RawParameter {
    /// Check if this descriptor describes a JSON object
    pub fn is_object(&self) -> bool {
        !self.extra.is_empty()
    }
}
