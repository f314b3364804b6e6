//! Integration test for the catalog parser

use pretty_assertions::assert_eq;
use std::io::Write;
use steam_openapi_common::{Audience, AudienceTag, GeneratorError, ParameterShape, SchemaType};
use steam_openapi_parser::CatalogParser;

#[test]
fn test_parse_catalog_preserves_order() {
    let catalog_json = r#"{
        "ISteamUserStats": {
            "GetSchemaForGame": {"version": 2, "httpmethod": "GET"},
            "GetGlobalStatsForGame": {"version": 1, "httpmethod": "GET"}
        },
        "ISteamApps": {
            "UpToDateCheck": {"version": 1, "httpmethod": "GET"},
            "GetAppList": {"version": 2, "httpmethod": "GET"}
        }
    }"#;

    let catalog = CatalogParser::from_json(catalog_json)
        .unwrap()
        .parse()
        .unwrap();

    let order: Vec<String> = catalog
        .methods()
        .map(|(service, method)| format!("{}.{}", service.name, method.name))
        .collect();
    assert_eq!(
        order,
        vec![
            "ISteamUserStats.GetSchemaForGame",
            "ISteamUserStats.GetGlobalStatsForGame",
            "ISteamApps.UpToDateCheck",
            "ISteamApps.GetAppList",
        ]
    );
}

#[test]
fn test_parse_method_fields() {
    let catalog_json = r#"{
        "ISteamMicroTxn": {
            "InitTxn": {
                "_type": "publisher_only",
                "version": 3,
                "httpmethod": "POST",
                "description": "Creates a new purchase.",
                "parameters": [
                    {"name": "orderid", "type": "uint64", "optional": false, "description": "Unique 64-bit ID for order"},
                    {"name": "qty[0]", "type": "int16", "optional": false},
                    {"name": "usersession", "type": "string", "optional": true, "description": null}
                ]
            }
        }
    }"#;

    let catalog = CatalogParser::from_json(catalog_json)
        .unwrap()
        .parse()
        .unwrap();
    let method = &catalog.services[0].methods[0];

    assert_eq!(method.audience, AudienceTag::Known(Audience::PublisherOnly));
    assert_eq!(method.version, 3);
    assert_eq!(method.description.as_deref(), Some("Creates a new purchase."));

    let params = &method.parameters;
    assert_eq!(params.len(), 3);

    assert_eq!(params[0].name, "orderid");
    assert_eq!(params[0].shape, ParameterShape::Scalar(SchemaType::Integer));
    assert_eq!(
        params[0].description.as_deref(),
        Some("Unique 64-bit ID for order")
    );

    assert_eq!(params[1].name, "qty");
    assert_eq!(
        params[1].shape,
        ParameterShape::Array(SchemaType::Other("int16".to_string()))
    );

    assert!(!params[2].required);
    assert_eq!(params[2].description, None);
}

#[test]
fn test_parse_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"ISteamWebAPIUtil": {{"GetServerInfo": {{"version": 1, "httpmethod": "GET"}}}}}}"#
    )
    .unwrap();

    let catalog = CatalogParser::from_file(file.path())
        .unwrap()
        .parse()
        .unwrap();
    assert_eq!(catalog.services[0].name, "ISteamWebAPIUtil");
    assert_eq!(
        catalog.services[0].methods[0].http_method.as_deref(),
        Some("GET")
    );
}

#[test]
fn test_missing_file_is_parse_error() {
    let result = CatalogParser::from_file("/nonexistent/catalog.json");
    assert!(matches!(result, Err(GeneratorError::Parse(_))));
}

#[test]
fn test_method_without_version_is_rejected() {
    let result = CatalogParser::from_json(r#"{"ISteamApps": {"GetAppList": {"httpmethod": "GET"}}}"#);
    assert!(result.is_err());
}

#[test]
fn test_bundled_catalog_covers_every_audience() {
    let catalog = CatalogParser::bundled().unwrap().parse().unwrap();

    for audience in Audience::ALL {
        assert!(
            catalog
                .methods()
                .any(|(_, method)| method.effective_audience() == Some(audience)),
            "no {} methods in bundled catalog",
            audience
        );
    }

    // Bundled data carries only known tags
    assert!(catalog
        .methods()
        .all(|(_, method)| method.effective_audience().is_some()));
}

#[test]
fn test_null_extra_and_parameters_are_tolerated() {
    let catalog_json = r#"{
        "ISteamUser": {
            "GetPlayerSummaries": {
                "version": 2,
                "httpmethod": "GET",
                "parameters": [
                    {"name": "key", "type": "string", "optional": false, "extra": null}
                ]
            },
            "GetPlayerBans": {"version": 1, "httpmethod": "GET", "parameters": null}
        }
    }"#;

    let catalog = CatalogParser::from_json(catalog_json)
        .unwrap()
        .parse()
        .unwrap();
    let methods = &catalog.services[0].methods;

    assert_eq!(
        methods[0].parameters[0].shape,
        ParameterShape::Scalar(SchemaType::String)
    );
    assert!(methods[1].parameters.is_empty());
}
