use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::{Hub, HubId};
use crate::network::{Edge, EdgeKind};

/// Outgoing link within the adjacency graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    pub target: HubId,
    pub kind: EdgeKind,
    pub distance_km: f64,
}

/// Adjacency structure used by pathfinding.
///
/// Every edge is stored in both directions. Neighbour lists keep the order in
/// which edges were produced by the network builder, which keeps traversal
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<HubId, Vec<Link>>>,
}

impl Graph {
    /// Return the neighbours for a given hub identifier.
    pub fn neighbours(&self, hub: &str) -> &[Link] {
        self.adjacency
            .get(hub)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `hub` is a node of the graph.
    pub fn contains(&self, hub: &str) -> bool {
        self.adjacency.contains_key(hub)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Length of the direct link between two hubs, if one exists.
    pub fn link_distance(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbours(from)
            .iter()
            .find(|link| link.target == to)
            .map(|link| link.distance_km)
    }
}

/// Build the adjacency graph for `hubs` connected by `edges`.
///
/// Hubs without any edge still appear as isolated nodes so that lookups can
/// tell an unknown hub apart from an unreachable one.
pub fn build_graph(hubs: &[Hub], edges: &[Edge]) -> Graph {
    let mut adjacency: HashMap<HubId, Vec<Link>> = HashMap::with_capacity(hubs.len());
    for hub in hubs.iter().filter(|hub| hub.coordinates.is_valid()) {
        adjacency.entry(hub.id.clone()).or_default();
    }

    for edge in edges {
        adjacency.entry(edge.source.clone()).or_default().push(Link {
            target: edge.target.clone(),
            kind: edge.kind,
            distance_km: edge.distance_km,
        });
        adjacency.entry(edge.target.clone()).or_default().push(Link {
            target: edge.source.clone(),
            kind: edge.kind,
            distance_km: edge.distance_km,
        });
    }

    Graph {
        adjacency: Arc::new(adjacency),
    }
}
