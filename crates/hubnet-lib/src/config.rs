//! Runtime configuration for catalog loading.
//!
//! # Environment Variables
//!
//! - `HUBNET_MAX_HUBS`: maximum number of hubs accepted by the loader
//!   (default: 10000)
//! - `HUBNET_HUB_DATA`: path to a hub CSV file, read by the CLI

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::warn;

use crate::error::{Error, Result};

/// Default upper bound on the number of hubs loaded into a catalog.
pub const DEFAULT_MAX_HUBS: usize = 10_000;

/// Environment variable overriding [`CatalogConfig::max_hubs`].
pub const MAX_HUBS_ENV: &str = "HUBNET_MAX_HUBS";

/// Environment variable pointing at a hub CSV file.
pub const HUB_DATA_ENV: &str = "HUBNET_HUB_DATA";

const HUB_DATA_FILENAME: &str = "hubs.csv";

/// Options controlling how a hub catalog is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Records past this many loaded hubs are truncated with a warning.
    pub max_hubs: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_hubs: DEFAULT_MAX_HUBS,
        }
    }
}

impl CatalogConfig {
    /// Create configuration from environment variables.
    ///
    /// Unparseable or zero values for `HUBNET_MAX_HUBS` fall back to the
    /// default bound.
    pub fn from_env() -> Self {
        match std::env::var(MAX_HUBS_ENV) {
            Ok(value) => Self::default().with_max_hubs_str(&value),
            Err(_) => Self::default(),
        }
    }

    fn with_max_hubs_str(self, value: &str) -> Self {
        match value.trim().parse::<usize>() {
            Ok(max_hubs) if max_hubs > 0 => Self { max_hubs },
            _ => {
                warn!(
                    value,
                    default = DEFAULT_MAX_HUBS,
                    "ignoring invalid {MAX_HUBS_ENV}"
                );
                self
            }
        }
    }
}

/// Platform-specific location of a user-supplied hub catalog.
///
/// Callers should check whether the file exists; the built-in catalog is the
/// fallback when it does not.
pub fn default_hub_data_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "hubnet", "hubnet").ok_or(Error::ProjectDirsUnavailable)?;
    Ok(dirs.data_dir().join(HUB_DATA_FILENAME))
}
