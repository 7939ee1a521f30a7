//! Hub network library entry points.
//!
//! This crate loads hub catalogs, derives the hub network (majors chained,
//! sub hubs attached to their nearest major), and answers fewest-hops path
//! queries. Higher-level consumers (CLI, view layers) should only depend on
//! the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod geo;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;

pub use catalog::{hub_id, Hub, HubCatalog, HubId, HubTier, SkippedRecord};
pub use config::{default_hub_data_path, CatalogConfig, DEFAULT_MAX_HUBS, HUB_DATA_ENV};
pub use error::{Error, ParseError, Result};
pub use geo::{distance_km, Coordinates, EARTH_RADIUS_KM};
pub use graph::{build_graph, Graph, Link};
pub use network::{build_edges, Edge, EdgeKind};
pub use output::{PathRenderMode, PathStep, PathSummary};
pub use path::{find_path, PathOutcome};
pub use routing::{HubNetwork, NetworkSnapshot, NetworkSummary, NetworkView, PathPlan};
