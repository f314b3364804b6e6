//! Catalog file parser

use super::types::RawCatalog;
use steam_openapi_common::{Catalog, GeneratorError, Result};
use std::fs;
use std::path::Path;

const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Steam Web API catalog parser
///
/// Reads the catalog notation from the bundled copy, a file, or a string.
pub struct CatalogParser {
    /// Loaded raw catalog
    raw: RawCatalog,
}

impl CatalogParser {
    /// Use the catalog bundled with this crate
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// Load catalog from file path
    ///
    /// # Example
    /// ```rust,ignore
    /// let parser = CatalogParser::from_file("catalog.json")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            GeneratorError::Parse(format!(
                "Failed to read catalog file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        Self::from_json(&content)
    }

    /// Parse catalog from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalog = serde_json::from_str(json)
            .map_err(|e| GeneratorError::Parse(format!("Failed to parse catalog JSON: {}", e)))?;

        Ok(Self { raw })
    }

    /// Convert the catalog into Catalog IR
    pub fn parse(&self) -> Result<Catalog> {
        Ok(super::converter::convert_catalog(&self.raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_catalog() {
        let catalog_json = r#"{
            "ISteamWebAPIUtil": {
                "GetServerInfo": {"version": 1, "httpmethod": "GET"}
            }
        }"#;

        let parser = CatalogParser::from_json(catalog_json);
        assert!(parser.is_ok());

        let parser = parser.unwrap();
        assert_eq!(parser.raw.len(), 1);
        assert_eq!(parser.raw["ISteamWebAPIUtil"]["GetServerInfo"].version, 1);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = CatalogParser::from_json("{\"ISteamUser\": [");
        assert!(matches!(result, Err(GeneratorError::Parse(_))));
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = CatalogParser::bundled().unwrap().parse().unwrap();
        assert!(!catalog.services.is_empty());
    }
}
