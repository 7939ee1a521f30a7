use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::catalog::{Hub, HubCatalog, HubId};
use crate::error::{Error, Result};
use crate::geo::distance_km;
use crate::graph::{build_graph, Graph};
use crate::network::{build_edges, Edge, EdgeKind};
use crate::path::{find_path, PathOutcome};

/// Number of "did you mean" suggestions attached to unknown hub errors.
const MAX_SUGGESTIONS: usize = 3;

/// Which part of the network a view should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkView {
    /// Every hub and edge.
    #[default]
    Full,
    /// Major hubs and the trunk edges between them.
    MajorOnly,
}

impl fmt::Display for NetworkView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            NetworkView::Full => "full",
            NetworkView::MajorOnly => "major",
        };
        f.write_str(value)
    }
}

/// Hubs and edges handed to a renderer.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NetworkSnapshot {
    pub hubs: Vec<Hub>,
    pub edges: Vec<Edge>,
}

/// Aggregate counters describing a built network.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NetworkSummary {
    pub major_hubs: usize,
    pub sub_hubs: usize,
    pub regions: usize,
    pub edges: usize,
    pub total_distance_km: f64,
    pub skipped_records: usize,
}

/// Planned path returned by [`HubNetwork::get_path`].
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathPlan {
    pub start: HubId,
    pub goal: HubId,
    pub steps: Vec<HubId>,
    pub total_distance_km: f64,
}

impl PathPlan {
    /// Number of hops in the path.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Catalog, edge set and adjacency graph built together.
///
/// The network is derived wholesale from its catalog and never mutated;
/// call [`HubNetwork::rebuild`] when the catalog changes. Clones share the
/// derived data.
#[derive(Debug, Clone)]
pub struct HubNetwork {
    catalog: Arc<HubCatalog>,
    edges: Arc<Vec<Edge>>,
    graph: Graph,
}

impl HubNetwork {
    /// Derive the edge set and graph for `catalog`.
    ///
    /// Fails with [`Error::EmptyCatalog`] when the catalog has no major hub.
    pub fn build(catalog: HubCatalog) -> Result<Self> {
        let edges = build_edges(catalog.hubs())?;
        let graph = build_graph(catalog.hubs(), &edges);
        debug!(
            hubs = catalog.len(),
            edges = edges.len(),
            "hub network ready"
        );
        Ok(Self {
            catalog: Arc::new(catalog),
            edges: Arc::new(edges),
            graph,
        })
    }

    /// Replace the catalog and everything derived from it.
    ///
    /// On error the current network is left untouched.
    pub fn rebuild(&mut self, catalog: HubCatalog) -> Result<()> {
        *self = Self::build(catalog)?;
        Ok(())
    }

    pub fn catalog(&self) -> &HubCatalog {
        &self.catalog
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Every hub and edge, for rendering.
    pub fn get_network(&self) -> NetworkSnapshot {
        self.view(NetworkView::Full)
    }

    /// Hubs and edges restricted to `view`.
    pub fn view(&self, view: NetworkView) -> NetworkSnapshot {
        match view {
            NetworkView::Full => NetworkSnapshot {
                hubs: self.catalog.hubs().to_vec(),
                edges: self.edges.to_vec(),
            },
            NetworkView::MajorOnly => NetworkSnapshot {
                hubs: self.catalog.majors().cloned().collect(),
                edges: self
                    .edges
                    .iter()
                    .filter(|edge| edge.kind == EdgeKind::Trunk)
                    .cloned()
                    .collect(),
            },
        }
    }

    /// Resolve a hub by identifier or city name.
    pub fn resolve(&self, key: &str) -> Result<&Hub> {
        self.catalog.resolve(key).ok_or_else(|| Error::UnknownHub {
            name: key.to_string(),
            suggestions: self.catalog.fuzzy_matches(key, MAX_SUGGESTIONS),
        })
    }

    /// Fewest-hops path between two hubs given by identifier or city name.
    ///
    /// Fails with [`Error::UnknownHub`] (`UNKNOWN_HUB`) when an endpoint
    /// cannot be resolved and [`Error::NoPathFound`] (`NO_PATH`) when the
    /// hubs are not connected.
    pub fn get_path(&self, start: &str, goal: &str) -> Result<PathPlan> {
        let start_hub = self.resolve(start)?;
        let goal_hub = self.resolve(goal)?;

        let steps = match find_path(&self.graph, &start_hub.id, &goal_hub.id)? {
            PathOutcome::Found(steps) => steps,
            PathOutcome::NoPath => {
                return Err(Error::NoPathFound {
                    start: start.to_string(),
                    goal: goal.to_string(),
                })
            }
        };

        let total_distance_km = steps
            .windows(2)
            .filter_map(|pair| self.graph.link_distance(&pair[0], &pair[1]))
            .fold(0.0, |total, distance| total + distance);

        Ok(PathPlan {
            start: start_hub.id.clone(),
            goal: goal_hub.id.clone(),
            steps,
            total_distance_km,
        })
    }

    /// Great-circle distance between two hubs given by identifier or city name.
    pub fn distance_between(&self, a: &str, b: &str) -> Result<f64> {
        let from = self.resolve(a)?;
        let to = self.resolve(b)?;
        distance_km(from.coordinates, to.coordinates)
    }

    /// Counters describing the network.
    pub fn summary(&self) -> NetworkSummary {
        let major_hubs = self.catalog.majors().count();
        NetworkSummary {
            major_hubs,
            sub_hubs: self.catalog.len() - major_hubs,
            regions: self.catalog.regions().len(),
            edges: self.edges.len(),
            total_distance_km: self
                .edges
                .iter()
                .fold(0.0, |total, edge| total + edge.distance_km),
            skipped_records: self.catalog.skipped().len(),
        }
    }
}
