//! Converts the raw catalog to Catalog IR

use super::types::{RawCatalog, RawMethod, RawParameter};
use crate::type_mapper::TypeMapper;
use steam_openapi_common::{
    AudienceTag, Catalog, MethodDefinition, ObjectField, ParameterDefinition, ParameterShape,
    ServiceDefinition,
};
use tracing::{debug, warn};

/// Convert a raw catalog to Catalog IR, preserving catalog order
pub fn convert_catalog(raw: &RawCatalog) -> Catalog {
    let services = raw
        .iter()
        .map(|(service_name, methods)| ServiceDefinition {
            name: service_name.clone(),
            methods: methods
                .iter()
                .map(|(method_name, method)| convert_method(service_name, method_name, method))
                .collect(),
        })
        .collect();

    Catalog { services }
}

fn convert_method(service_name: &str, method_name: &str, method: &RawMethod) -> MethodDefinition {
    let audience = AudienceTag::from_raw(method.audience.as_deref());
    if let AudienceTag::Unrecognized(ref tag) = audience {
        warn!(
            service = service_name,
            method = method_name,
            tag = tag.as_str(),
            "unrecognized audience tag; method will not appear in any document"
        );
    }

    MethodDefinition {
        name: method_name.to_string(),
        version: method.version,
        http_method: method.http_method.clone(),
        audience,
        description: method.description.clone(),
        parameters: method
            .parameters
            .iter()
            .map(|param| convert_parameter(method_name, param))
            .collect(),
    }
}

/// Classify a descriptor into its shape
///
/// Object descriptors win over the array marker.
fn convert_parameter(method_name: &str, param: &RawParameter) -> ParameterDefinition {
    let (name, shape) = if param.is_object() {
        let fields = param
            .extra
            .iter()
            .map(|field| convert_object_field(method_name, &param.name, field))
            .collect();
        (param.name.clone(), ParameterShape::Object(fields))
    } else if TypeMapper::is_array_name(&param.name) {
        (
            TypeMapper::strip_array_marker(&param.name),
            ParameterShape::Array(TypeMapper::map_element_type(&param.type_name)),
        )
    } else {
        (
            param.name.clone(),
            ParameterShape::Scalar(TypeMapper::map_type(&param.type_name)),
        )
    };

    ParameterDefinition {
        name,
        description: param.description.clone(),
        required: !param.optional,
        shape,
    }
}

/// Only one level of object fields is kept
fn convert_object_field(method_name: &str, parent: &str, field: &RawParameter) -> ObjectField {
    if field.is_object() {
        debug!(
            method = method_name,
            parameter = parent,
            field = field.name.as_str(),
            dropped = field.extra.len(),
            "nested object field flattened to its type name"
        );
    }

    ObjectField {
        name: field.name.clone(),
        schema_type: TypeMapper::map_type(&field.type_name),
        description: field.description.clone(),
        required: !field.optional,
    }
}
