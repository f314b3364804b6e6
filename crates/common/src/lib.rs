//! Common types and utilities for the Steam OpenAPI generator
//!
//! This crate contains the catalog intermediate representation, the audience
//! profile table, and the error type shared by the parser, generator, and CLI.

mod profile;

pub use profile::{AudienceProfile, AudienceProfiles};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur during catalog parsing and document generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Access tier a catalog method belongs to
///
/// Each audience gets its own generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Audience {
    Public,
    PublisherOnly,
    Undocumented,
}

impl Audience {
    /// All audiences, in document generation order
    pub const ALL: [Audience; 3] = [
        Audience::Public,
        Audience::PublisherOnly,
        Audience::Undocumented,
    ];

    /// Catalog tag for this audience (`_type` value)
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::Public => "public",
            Audience::PublisherOnly => "publisher_only",
            Audience::Undocumented => "undocumented",
        }
    }

    /// Resolve a catalog `_type` tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == tag)
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audience tag as authored in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudienceTag {
    /// One of the three known tiers (an absent tag means public)
    Known(Audience),
    /// A tag the generator does not know; never matches any audience
    Unrecognized(String),
}

impl AudienceTag {
    /// Classify an optional raw `_type` value
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            None => AudienceTag::Known(Audience::Public),
            Some(tag) => Audience::from_tag(tag)
                .map(AudienceTag::Known)
                .unwrap_or_else(|| AudienceTag::Unrecognized(tag.to_string())),
        }
    }
}

/// OpenAPI primitive type a catalog type name maps to
///
/// `Other` holds symbolic names (enums, messages) passed through lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SchemaType {
    Integer,
    Boolean,
    String,
    Number,
    Other(String),
}

impl SchemaType {
    pub fn as_str(&self) -> &str {
        match self {
            SchemaType::Integer => "integer",
            SchemaType::Boolean => "boolean",
            SchemaType::String => "string",
            SchemaType::Number => "number",
            SchemaType::Other(name) => name,
        }
    }
}

impl From<String> for SchemaType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "integer" => SchemaType::Integer,
            "boolean" => SchemaType::Boolean,
            "string" => SchemaType::String,
            "number" => SchemaType::Number,
            _ => SchemaType::Other(value),
        }
    }
}

impl From<SchemaType> for String {
    fn from(value: SchemaType) -> Self {
        match value {
            SchemaType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed Steam Web API catalog, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub services: Vec<ServiceDefinition>,
}

impl Catalog {
    /// Iterate every (service, method) pair in catalog order
    pub fn methods(&self) -> impl Iterator<Item = (&ServiceDefinition, &MethodDefinition)> {
        self.services
            .iter()
            .flat_map(|service| service.methods.iter().map(move |method| (service, method)))
    }
}

/// A Steam Web API interface (e.g. `ISteamUser`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDefinition {
    pub name: String,
    pub methods: Vec<MethodDefinition>,
}

/// A single callable method of a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDefinition {
    pub name: String,
    pub version: u32,
    /// HTTP verb as authored (e.g. "GET"); `None` means not independently callable
    pub http_method: Option<String>,
    pub audience: AudienceTag,
    pub description: Option<String>,
    pub parameters: Vec<ParameterDefinition>,
}

impl MethodDefinition {
    /// Audience this method is published under, if its tag is recognized
    pub fn effective_audience(&self) -> Option<Audience> {
        match &self.audience {
            AudienceTag::Known(audience) => Some(*audience),
            AudienceTag::Unrecognized(_) => None,
        }
    }
}

/// A method parameter with its shape resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    /// Emitted name (array parameters have their `[0]` marker removed)
    pub name: String,
    pub description: Option<String>,
    pub required: bool,
    pub shape: ParameterShape,
}

/// Structural kind of a parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterShape {
    /// JSON object with one level of named fields
    Object(Vec<ObjectField>),
    /// Array of the given element type
    Array(SchemaType),
    /// Single primitive value
    Scalar(SchemaType),
}

/// Field of an object-shaped parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectField {
    pub name: String,
    pub schema_type: SchemaType,
    pub description: Option<String>,
    pub required: bool,
}
