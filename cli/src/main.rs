#![deny(missing_docs)]

//! # Sillywalk CLI
//!
//! Renders Swagger documents from a declaration catalog.
//!
//! Supported Commands:
//! - `index`: prints the index document.
//! - `resource NAME`: prints one resource document.
//! - `routes`: lists the routes a server would bind.

use crate::error::CliResult;
use crate::render::CatalogArgs;
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::EnvFilter;

mod error;
mod render;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Swagger catalog renderer")]
struct Cli {
    #[clap(flatten)]
    catalog: CatalogArgs,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the index document.
    Index,
    /// Print the document of one resource.
    Resource {
        /// Resource name, e.g. `cheese`.
        name: String,
    },
    /// List bound routes as `METHODS PATH -> endpoint`.
    Routes,
}

fn main() -> CliResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut out = io::stdout().lock();

    match &cli.command {
        Commands::Index => render::index(&cli.catalog, &mut out)?,
        Commands::Resource { name } => render::resource(&cli.catalog, name, &mut out)?,
        Commands::Routes => render::routes(&cli.catalog, &mut out)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resource_command() {
        let cli = Cli::try_parse_from([
            "sillywalk",
            "--catalog",
            "shop.yaml",
            "--base-url",
            "http://localhost:5000/api",
            "resource",
            "cheese",
        ])
        .unwrap();
        assert_eq!(cli.catalog.base_url.as_deref(), Some("http://localhost:5000/api"));
        assert!(matches!(cli.command, Commands::Resource { ref name } if name == "cheese"));
    }
}
