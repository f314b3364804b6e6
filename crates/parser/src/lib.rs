//! Steam Web API catalog parsing
//!
//! This crate reads the catalog of Steam Web API services, methods, and
//! parameters into the intermediate representation (`Catalog`).
//!
//! ## Parameter Shapes
//!
//! Each parameter descriptor is classified once, while parsing:
//! - descriptors with a non-empty `extra` list → `ParameterShape::Object`
//! - names containing `[0]` → `ParameterShape::Array`
//! - everything else → `ParameterShape::Scalar`

pub mod catalog;
mod type_mapper;

pub use catalog::CatalogParser;
pub use type_mapper::TypeMapper;

use steam_openapi_common::{Catalog, Result};

/// Parse the catalog bundled with this crate
pub fn parse_bundled_catalog() -> Result<Catalog> {
    CatalogParser::bundled()?.parse()
}
