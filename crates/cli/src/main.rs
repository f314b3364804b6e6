//! Steam OpenAPI CLI
//!
//! Command-line interface for generating OpenAPI documents from the Steam
//! Web API catalog.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use std::path::{Path, PathBuf};
use steam_openapi_common::{Audience, AudienceProfiles, AudienceTag, Catalog};
use steam_openapi_generator::{render_document, DocumentAssembler};
use steam_openapi_parser::CatalogParser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "steam-openapi")]
#[command(version, about = "Generate OpenAPI documents from the Steam Web API catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the OpenAPI document for one audience and print it to stdout
    #[command(after_help = "EXAMPLES:\n  \
        # Public methods from the bundled catalog\n  \
        steam-openapi generate\n\n  \
        # Publisher-only methods\n  \
        steam-openapi generate --audience publisher-only > publisher.json\n\n  \
        # Custom catalog and document metadata\n  \
        steam-openapi generate \\\n    \
        --catalog ./catalog.json \\\n    \
        --profiles ./profiles.yaml \\\n    \
        --audience undocumented")]
    Generate {
        /// Audience to generate the document for
        #[arg(short, long, value_enum, default_value_t = AudienceArg::Public)]
        audience: AudienceArg,

        /// Catalog file (defaults to the bundled catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// Audience profiles YAML (defaults to the bundled profiles)
        #[arg(short, long)]
        profiles: Option<PathBuf>,
    },

    /// Summarize a catalog and report entries that no document will contain
    Inspect {
        /// Catalog file (defaults to the bundled catalog)
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AudienceArg {
    /// Methods callable with a regular Web API key
    Public,
    /// Methods restricted to publisher keys
    PublisherOnly,
    /// Methods missing from the official documentation
    Undocumented,
}

impl From<AudienceArg> for Audience {
    fn from(arg: AudienceArg) -> Self {
        match arg {
            AudienceArg::Public => Audience::Public,
            AudienceArg::PublisherOnly => Audience::PublisherOnly,
            AudienceArg::Undocumented => Audience::Undocumented,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Failures are reported, not mapped to an exit code
    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "✗".red().bold(), e);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate {
            audience,
            catalog,
            profiles,
        } => generate_command(
            audience.into(),
            catalog.as_deref(),
            profiles.as_deref(),
            cli.verbose,
        ),
        Commands::Inspect { catalog } => inspect_command(catalog.as_deref(), cli.verbose),
    }
}

fn generate_command(
    audience: Audience,
    catalog_path: Option<&Path>,
    profiles_path: Option<&Path>,
    verbose: bool,
) -> Result<()> {
    let catalog = load_catalog(catalog_path, verbose)?;

    let profiles = match profiles_path {
        Some(path) => AudienceProfiles::load(path).context("Failed to load audience profiles")?,
        None => AudienceProfiles::builtin().context("Failed to load bundled audience profiles")?,
    };

    if verbose {
        let profile = profiles.get(audience);
        eprintln!("  Audience: {}", audience);
        eprintln!("  Title: {}", profile.title);
        eprintln!("  Server: {}", profile.server_url);
    }

    let document = DocumentAssembler::new(profiles).assemble(&catalog, audience);
    let rendered = render_document(&document).context("Failed to serialize document")?;

    println!("{}", rendered);

    eprintln!(
        "{} Generated {} paths for the {} audience",
        "✓".green(),
        document.paths.len(),
        audience.to_string().yellow()
    );

    Ok(())
}

fn inspect_command(catalog_path: Option<&Path>, verbose: bool) -> Result<()> {
    let catalog = load_catalog(catalog_path, verbose)?;

    println!("\n{}", "Catalog Summary:".bold());
    println!("  Services: {}", catalog.services.len());
    println!("  Methods: {}", catalog.methods().count());

    println!("\n{}", "Documented paths per audience:".bold());
    for audience in Audience::ALL {
        let count = catalog
            .methods()
            .filter(|(_, method)| method.http_method.is_some())
            .filter(|(_, method)| method.effective_audience() == Some(audience))
            .count();
        println!("  • {}: {}", audience.to_string().cyan(), count);
    }

    let without_verb: Vec<String> = catalog
        .methods()
        .filter(|(_, method)| method.http_method.is_none())
        .map(|(service, method)| format!("{}.{}", service.name, method.name))
        .collect();

    println!(
        "\n{} ({})",
        "Methods without an HTTP verb:".bold(),
        without_verb.len()
    );
    if verbose {
        for name in &without_verb {
            println!("  • {}", name);
        }
    }

    let unrecognized = unrecognized_tags(&catalog);
    if unrecognized.is_empty() {
        println!("\n{} All audience tags recognized", "✓".green());
    } else {
        println!(
            "\n{} {} method(s) carry unrecognized audience tags and appear in no document:",
            "⚠".yellow(),
            unrecognized.len()
        );
        for (name, tag) in &unrecognized {
            println!("  • {} ({})", name, tag.yellow());
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>, verbose: bool) -> Result<Catalog> {
    let parser = match path {
        Some(path) => {
            if verbose {
                eprintln!("{} Loading catalog: {}", "→".cyan(), path.display());
            }
            CatalogParser::from_file(path).context("Failed to load catalog")?
        }
        None => {
            if verbose {
                eprintln!("{} Using bundled catalog", "→".cyan());
            }
            CatalogParser::bundled().context("Failed to load bundled catalog")?
        }
    };

    parser.parse().context("Failed to parse catalog")
}

/// Methods whose audience tag matches no known audience, as (`Service.Method`, tag)
fn unrecognized_tags(catalog: &Catalog) -> Vec<(String, String)> {
    catalog
        .methods()
        .filter_map(|(service, method)| match &method.audience {
            AudienceTag::Unrecognized(tag) => {
                Some((format!("{}.{}", service.name, method.name), tag.clone()))
            }
            AudienceTag::Known(_) => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults_to_public() {
        let cli = Cli::try_parse_from(["steam-openapi", "generate"]).unwrap();
        match cli.command {
            Commands::Generate {
                audience,
                catalog,
                profiles,
            } => {
                assert_eq!(Audience::from(audience), Audience::Public);
                assert!(catalog.is_none());
                assert!(profiles.is_none());
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_audience_flag() {
        let cli = Cli::try_parse_from(["steam-openapi", "generate", "--audience", "publisher-only"])
            .unwrap();
        match cli.command {
            Commands::Generate { audience, .. } => {
                assert_eq!(Audience::from(audience), Audience::PublisherOnly);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_unrecognized_tags_report() {
        let catalog = CatalogParser::from_json(
            r#"{
                "ISteamUser": {
                    "GetPlayerSummaries": {"version": 2, "httpmethod": "GET"},
                    "GetFriendsGameplayInfo": {"_type": "internal", "version": 1, "httpmethod": "GET"}
                }
            }"#,
        )
        .unwrap()
        .parse()
        .unwrap();

        assert_eq!(
            unrecognized_tags(&catalog),
            vec![(
                "ISteamUser.GetFriendsGameplayInfo".to_string(),
                "internal".to_string()
            )]
        );
    }
}
