#![deny(missing_docs)]

//! # Render Commands
//!
//! Loads a catalog into a fresh registry and writes its documents or its
//! route table.

use crate::error::CliResult;
use sillywalk_core::{Catalog, RouteBinding, RouteLog, SwaggerRegistry};
use std::io::Write;
use std::path::PathBuf;

/// Options shared by every command.
#[derive(clap::Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Catalog file (`.json`, otherwise YAML).
    #[clap(long)]
    pub catalog: PathBuf,

    /// Overrides the catalog's base URL.
    #[clap(long, env = "SILLYWALK_BASE_URL")]
    pub base_url: Option<String>,

    /// Overrides the catalog's API version.
    #[clap(long, env = "SILLYWALK_API_VERSION")]
    pub api_version: Option<String>,
}

/// Builds a registry from the catalog named by `args`.
pub fn load(args: &CatalogArgs) -> CliResult<(SwaggerRegistry, Vec<RouteBinding>)> {
    let mut catalog = Catalog::from_path(&args.catalog)?;
    if let Some(base_url) = &args.base_url {
        catalog.config.base_url = base_url.clone();
    }
    if let Some(api_version) = &args.api_version {
        catalog.config.api_version = api_version.clone();
    }

    let log = RouteLog::new();
    let mut registry = SwaggerRegistry::with_binder(catalog.config.clone(), log.clone())?;
    catalog.apply(&mut registry)?;
    let bindings = log.bindings()?;
    tracing::debug!(catalog = %args.catalog.display(), routes = bindings.len(), "catalog loaded");
    Ok((registry, bindings))
}

/// Writes the index document as pretty JSON.
pub fn index(args: &CatalogArgs, out: &mut impl Write) -> CliResult<()> {
    let (registry, _) = load(args)?;
    serde_json::to_writer_pretty(&mut *out, &registry.render_index()?)?;
    writeln!(out)?;
    Ok(())
}

/// Writes the document of `resource` as pretty JSON.
pub fn resource(args: &CatalogArgs, resource: &str, out: &mut impl Write) -> CliResult<()> {
    let (registry, _) = load(args)?;
    let document = registry.render_resource(resource)?;
    serde_json::to_writer_pretty(&mut *out, &document)?;
    writeln!(out)?;
    Ok(())
}

/// Writes one `METHODS PATH -> endpoint` line per bound route.
pub fn routes(args: &CatalogArgs, out: &mut impl Write) -> CliResult<()> {
    let (_, bindings) = load(args)?;
    for binding in bindings {
        let methods: Vec<&str> = binding.methods.iter().map(|m| m.as_str()).collect();
        writeln!(out, "{} {} -> {}", methods.join(","), binding.path, binding.endpoint)?;
    }
    Ok(())
}
