//! Type mapping from catalog type names to OpenAPI primitives
//!
//! The catalog uses protobuf-style scalar names (`uint32`, `fixed64`, ...)
//! alongside symbolic names for enums and messages. Only the scalar names
//! have a mapping; everything else passes through lower-cased.

use steam_openapi_common::SchemaType;

/// Marker a catalog parameter name carries when it is array-valued
const ARRAY_MARKER: &str = "[0]";

/// Maps catalog type names to SchemaType
pub struct TypeMapper;

impl TypeMapper {
    /// Map a catalog type name to an OpenAPI primitive
    ///
    /// # Examples
    /// ```
    /// use steam_openapi_parser::TypeMapper;
    /// use steam_openapi_common::SchemaType;
    ///
    /// assert_eq!(TypeMapper::map_type("fixed64"), SchemaType::Integer);
    /// assert_eq!(TypeMapper::map_type("bytes"), SchemaType::String);
    /// assert_eq!(
    ///     TypeMapper::map_type("ETradeOfferState"),
    ///     SchemaType::Other("etradeofferstate".to_string())
    /// );
    /// ```
    pub fn map_type(type_name: &str) -> SchemaType {
        match type_name {
            "uint32" | "uint64" | "int32" | "int64" | "fixed64" | "fixed32" => SchemaType::Integer,
            "bool" => SchemaType::Boolean,
            "string" | "bytes" => SchemaType::String,
            "float" | "double" => SchemaType::Number,
            // Symbolic names are not an error
            other => SchemaType::from(other.to_lowercase()),
        }
    }

    /// Map the element type of an array type name (`int32[]` -> integer)
    pub fn map_element_type(type_name: &str) -> SchemaType {
        Self::map_type(type_name.strip_suffix("[]").unwrap_or(type_name))
    }

    /// Check if a parameter name marks an array-valued parameter
    pub fn is_array_name(name: &str) -> bool {
        name.contains(ARRAY_MARKER)
    }

    /// Parameter name with its array marker removed
    pub fn strip_array_marker(name: &str) -> String {
        name.replacen(ARRAY_MARKER, "", 1)
    }
}
