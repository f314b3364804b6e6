//! OpenAPI document generation for the Steam Web API catalog
//!
//! This crate turns the parsed `Catalog` into one OpenAPI 3.0 document per
//! audience. Each callable method becomes a single path,
//! `/{service}/{method}/v{version}`, with one operation under its HTTP verb.

mod flattener;
pub mod openapi;

pub use flattener::{flatten_parameter, flatten_parameters};
pub use openapi::{Document, Operation, Parameter, Schema};

use indexmap::IndexMap;
use openapi::{Info, PathItem, Response, Server, OPENAPI_VERSION};
use steam_openapi_common::{
    Audience, AudienceProfiles, Catalog, MethodDefinition, Result, ServiceDefinition,
};
use tracing::debug;

/// Document assembler
///
/// Walks the catalog once per requested audience and emits every method
/// published under that audience.
pub struct DocumentAssembler {
    profiles: AudienceProfiles,
}

impl DocumentAssembler {
    /// Create an assembler using the given audience profiles
    pub fn new(profiles: AudienceProfiles) -> Self {
        Self { profiles }
    }

    /// Create an assembler using the bundled audience profiles
    pub fn with_builtin_profiles() -> Result<Self> {
        Ok(Self::new(AudienceProfiles::builtin()?))
    }

    /// Build the document for one audience
    pub fn assemble(&self, catalog: &Catalog, audience: Audience) -> Document {
        let profile = self.profiles.get(audience);
        let mut paths: IndexMap<String, PathItem> = IndexMap::new();

        for (service, method) in catalog.methods() {
            let Some(verb) = method.http_method.as_deref() else {
                debug!(
                    service = service.name.as_str(),
                    method = method.name.as_str(),
                    "skipping method without an HTTP verb"
                );
                continue;
            };

            if method.effective_audience() != Some(audience) {
                continue;
            }

            let path = operation_path(service, method);
            let mut item = PathItem::new();
            item.insert(verb.to_lowercase(), build_operation(service, method));

            // Last write wins
            if paths.insert(path.clone(), item).is_some() {
                debug!(path = path.as_str(), "path overwritten by a later method");
            }
        }

        Document {
            openapi: OPENAPI_VERSION.to_string(),
            info: Info {
                title: profile.title.clone(),
                description: profile.description.clone(),
                version: profile.version.clone(),
            },
            servers: vec![Server {
                url: profile.server_url.clone(),
            }],
            paths,
        }
    }
}

/// Path of a method: `/{service}/{method}/v{version}`
pub fn operation_path(service: &ServiceDefinition, method: &MethodDefinition) -> String {
    format!("/{}/{}/v{}", service.name, method.name, method.version)
}

/// Operation ID of a method: `{service}_{method}`
pub fn operation_id(service: &ServiceDefinition, method: &MethodDefinition) -> String {
    format!("{}_{}", service.name, method.name)
}

fn build_operation(service: &ServiceDefinition, method: &MethodDefinition) -> Operation {
    let summary = method
        .description
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(String::from)
        .unwrap_or_else(|| format!("{} method of the {} service", method.name, service.name));

    Operation {
        summary,
        description: method.description.clone().unwrap_or_default(),
        operation_id: operation_id(service, method),
        parameters: flatten_parameters(&method.parameters),
        responses: standard_responses(),
    }
}

fn standard_responses() -> IndexMap<String, Response> {
    IndexMap::from([
        (
            "200".to_string(),
            Response {
                description: "Successful response".to_string(),
            },
        ),
        (
            "400".to_string(),
            Response {
                description: "Invalid input".to_string(),
            },
        ),
    ])
}

/// Serialize a document as pretty-printed JSON
pub fn render_document(document: &Document) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Generate and render the document for one audience (convenience function)
pub fn generate_document(
    catalog: &Catalog,
    profiles: AudienceProfiles,
    audience: Audience,
) -> Result<String> {
    let assembler = DocumentAssembler::new(profiles);
    render_document(&assembler.assemble(catalog, audience))
}
