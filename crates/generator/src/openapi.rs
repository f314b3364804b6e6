//! OpenAPI 3.0 output types
//!
//! Serialize-only subset of OpenAPI 3.0 covering what the generated documents
//! use. Maps are insertion-ordered so serialized output is stable.

use indexmap::IndexMap;
use serde::Serialize;
use steam_openapi_common::{ObjectField, SchemaType};

/// OpenAPI version written to every document
pub const OPENAPI_VERSION: &str = "3.0.0";

/// Location of every generated parameter
pub const QUERY_LOCATION: &str = "query";

/// Operations of one path, keyed by lowercase HTTP verb
pub type PathItem = IndexMap<String, Operation>;

/// OpenAPI document root
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// OpenAPI version ("3.0.0")
    pub openapi: String,

    /// API metadata
    pub info: Info,

    /// Servers
    pub servers: Vec<Server>,

    /// API paths (endpoints)
    pub paths: IndexMap<String, PathItem>,
}

/// API information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Info {
    pub title: String,
    pub description: String,
    pub version: String,
}

/// Server information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Server {
    pub url: String,
}

/// HTTP operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    pub summary: String,

    pub description: String,

    /// Operation ID (`{service}_{method}`)
    #[serde(rename = "operationId")]
    pub operation_id: String,

    pub parameters: Vec<Parameter>,

    /// Responses keyed by status code
    pub responses: IndexMap<String, Response>,
}

/// Parameter definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    pub name: String,

    /// Location: always "query" for generated documents
    #[serde(rename = "in")]
    pub location: String,

    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub schema: Schema,
}

/// Response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub description: String,
}

/// Schema definition
///
/// One of three forms: primitive (`type` only), array (`type` + `items`), or
/// object (`type` + `properties` + `required`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    /// Type: string, integer, boolean, number, array, object, or a symbolic name
    #[serde(rename = "type")]
    pub schema_type: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Items schema (for array type)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    /// Properties (for object type)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,

    /// Required properties (for object type)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

impl Schema {
    fn of_type(schema_type: &str) -> Self {
        Self {
            schema_type: schema_type.to_string(),
            description: None,
            items: None,
            properties: None,
            required: None,
        }
    }

    pub fn primitive(schema_type: &SchemaType) -> Self {
        Self::of_type(schema_type.as_str())
    }

    pub fn array(element_type: &SchemaType) -> Self {
        Self {
            items: Some(Box::new(Self::primitive(element_type))),
            ..Self::of_type("array")
        }
    }

    /// Object schema with one primitive property per field
    pub fn object(fields: &[ObjectField]) -> Self {
        let properties = fields
            .iter()
            .map(|field| {
                let mut property = Self::primitive(&field.schema_type);
                property.description = field.description.clone();
                (field.name.clone(), property)
            })
            .collect();

        let required = fields
            .iter()
            .filter(|field| field.required)
            .map(|field| field.name.clone())
            .collect();

        Self {
            properties: Some(properties),
            required: Some(required),
            ..Self::of_type("object")
        }
    }
}
