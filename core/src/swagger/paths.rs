#![deny(missing_docs)]

//! # Path Utilities
//!
//! Helpers for relating registration paths to the registry's base path,
//! deriving resource names and converting placeholder syntax.

use crate::error::{RegistryError, RegistryResult};
use url::Url;

const DUMMY_BASE: &str = "http://example.invalid/";

/// Document formats served for every resource.
pub const SUPPORTED_FORMATS: &[&str] = &["json"];

/// Extracts the path component of a base URL.
///
/// Relative base URLs (`/api/v1`) are accepted and resolved against a dummy host.
pub fn base_path_of(base_url: &str) -> RegistryResult<String> {
    if let Ok(url) = Url::parse(base_url) {
        return Ok(url.path().to_string());
    }
    let dummy = Url::parse(DUMMY_BASE)
        .map_err(|e| RegistryError::General(format!("Invalid dummy base: {}", e)))?;
    dummy
        .join(base_url)
        .map(|url| url.path().to_string())
        .map_err(|e| {
            RegistryError::Configuration(format!("Invalid base URL '{}': {}", base_url, e))
        })
}

/// The base path without trailing slashes (`""` for the root).
pub fn base_prefix(base_path: &str) -> &str {
    base_path.trim_end_matches('/')
}

/// Makes `path` relative to the base path.
///
/// Paths that do not start with the base path are taken as already
/// resource-relative. The result always starts with `/`.
pub fn relative_path(base_path: &str, path: &str) -> String {
    let rooted = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };

    let prefix = base_prefix(base_path);
    if prefix.is_empty() {
        return rooted;
    }
    match rooted.strip_prefix(prefix) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => rooted,
    }
}

/// Prefixes a resource-relative path with the base path.
pub fn qualified_path(base_path: &str, relative: &str) -> String {
    format!("{}{}", base_prefix(base_path), relative)
}

/// Derives the resource name: the first segment of a resource-relative path.
pub fn resource_name(relative: &str) -> RegistryResult<&str> {
    let resource = relative
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or_default();
    if resource.is_empty() {
        return Err(RegistryError::Configuration(format!(
            "Path '{}' has no resource segment",
            relative
        )));
    }
    Ok(resource)
}

/// Converts `<name>` placeholders to `{name}`.
///
/// Converter prefixes are dropped (`<int:id>` becomes `{id}`). An unterminated
/// `<` is copied through unchanged.
pub fn to_brace_placeholders(path: &str) -> String {
    map_placeholders(path, |_, name| format!("{{{}}}", name))
}

/// Rewrites every `<converter:name>` placeholder with `render(converter, name)`.
///
/// `converter` is `""` for a bare `<name>`; converter arguments such as
/// `string(length=2)` are passed through as written. An unterminated `<` is
/// copied through unchanged.
pub fn map_placeholders(path: &str, mut render: impl FnMut(&str, &str) -> String) -> String {
    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        match tail.find('>') {
            Some(end) => {
                let inner = &tail[..end];
                let (converter, name) = match inner.rsplit_once(':') {
                    Some((converter, name)) => (converter.trim(), name.trim()),
                    None => ("", inner.trim()),
                };
                out.push_str(&render(converter, name));
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Route serving the index document in `fmt`.
pub fn index_route(base_path: &str, fmt: &str) -> String {
    format!("{}/resources.{}", base_prefix(base_path), fmt)
}

/// Route serving the document of `resource` in `fmt`.
pub fn listing_route(base_path: &str, resource: &str, fmt: &str) -> String {
    format!("{}/{}.{}", base_prefix(base_path), resource, fmt)
}
