//! Locating and loading the hub catalog for a CLI invocation.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use hubnet_lib::{default_hub_data_path, CatalogConfig, HubCatalog};

/// Where the hub catalog for this run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HubSource {
    /// A CSV file on disk.
    File(PathBuf),
    /// The table compiled into the library.
    Builtin,
}

impl fmt::Display for HubSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HubSource::File(path) => write!(f, "{}", path.display()),
            HubSource::Builtin => f.write_str("built-in catalog"),
        }
    }
}

/// Pick the catalog source.
///
/// Searches in the following order:
/// 1. `explicit` (from `--hubs` or `HUBNET_HUB_DATA`)
/// 2. `hubs.csv` in the platform data directory, if present
/// 3. The built-in catalog
pub fn resolve_hub_source(explicit: Option<&Path>) -> HubSource {
    if let Some(path) = explicit {
        return HubSource::File(path.to_path_buf());
    }

    match default_hub_data_path() {
        Ok(path) if path.is_file() => HubSource::File(path),
        Ok(path) => {
            debug!(path = %path.display(), "no user hub data; using built-in catalog");
            HubSource::Builtin
        }
        Err(err) => {
            debug!(error = %err, "using built-in catalog");
            HubSource::Builtin
        }
    }
}

/// Load the catalog from `source`.
pub fn load_catalog(source: &HubSource, config: &CatalogConfig) -> Result<HubCatalog> {
    let catalog = match source {
        HubSource::File(path) => HubCatalog::from_path_with(path, config)
            .with_context(|| format!("failed to load hub data from {}", path.display()))?,
        HubSource::Builtin => {
            HubCatalog::builtin_with(config).context("failed to load the built-in catalog")?
        }
    };
    debug!(
        source = %source,
        hubs = catalog.len(),
        skipped = catalog.skipped().len(),
        "hub catalog loaded"
    );
    Ok(catalog)
}
