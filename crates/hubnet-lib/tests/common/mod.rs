//! Common test utilities and fixture helpers.

use std::path::PathBuf;

use hubnet_lib::{CatalogConfig, Coordinates, Hub, HubCatalog, HubTier};

/// Path to fixtures directory used by tests.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

/// Catalog with two majors (Mumbai, Delhi) and one sub hub (Pune).
#[allow(dead_code)]
pub fn scenario_catalog() -> HubCatalog {
    HubCatalog::from_path_with(
        &fixtures_dir().join("scenario_hubs.csv"),
        &CatalogConfig::default(),
    )
    .expect("scenario fixture loads")
}

/// Build a hub in code; panics on invalid coordinates.
#[allow(dead_code)]
pub fn hub(region: &str, city: &str, tier: HubTier, latitude: f64, longitude: f64) -> Hub {
    Hub::new(
        region,
        city,
        tier,
        Coordinates::new(latitude, longitude).expect("valid fixture coordinates"),
    )
}
