//! Steam Web API catalog parser
//!
//! Parses the catalog's nested-object notation into the `Catalog` IR.
//!
//! ## Catalog Format
//!
//! The catalog is a JSON object keyed by service name (`ISteamUser`), whose
//! values are objects keyed by method name. Each method carries a version,
//! an optional HTTP verb, an optional `_type` audience tag, and an ordered
//! list of parameter descriptors. Key order is significant and preserved.
//!
//! ## Usage
//! ```rust,ignore
//! use steam_openapi_parser::catalog::CatalogParser;
//!
//! let catalog = CatalogParser::bundled()?.parse()?;
//! ```

mod converter;
mod parser;
mod types;

pub use parser::CatalogParser;
pub use types::*;
