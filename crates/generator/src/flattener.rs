//! Parameter flattening
//!
//! Turns a method's parameter definitions into OpenAPI query parameters.

use crate::openapi::{Parameter, Schema, QUERY_LOCATION};
use steam_openapi_common::{ParameterDefinition, ParameterShape};

/// Flatten parameters, preserving their order
pub fn flatten_parameters(parameters: &[ParameterDefinition]) -> Vec<Parameter> {
    parameters.iter().map(flatten_parameter).collect()
}

/// Flatten a single parameter into a query parameter
pub fn flatten_parameter(parameter: &ParameterDefinition) -> Parameter {
    let schema = match &parameter.shape {
        ParameterShape::Object(fields) => Schema::object(fields),
        ParameterShape::Array(element_type) => Schema::array(element_type),
        ParameterShape::Scalar(schema_type) => Schema::primitive(schema_type),
    };

    Parameter {
        name: parameter.name.clone(),
        location: QUERY_LOCATION.to_string(),
        required: parameter.required,
        description: parameter.description.clone(),
        schema,
    }
}
