//! Derivation of the hub network edge set.
//!
//! Majors are chained in catalog order and every sub hub is attached to its
//! nearest major. The chain is a cheap, deterministic O(n) heuristic rather
//! than a minimum spanning tree: it guarantees connectivity but never
//! promises the globally shortest network.

use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::{Hub, HubId, HubTier};
use crate::error::{Error, Result};

/// Classification for an edge of the hub network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Link between consecutive major hubs.
    Trunk,
    /// Link from a sub hub to its nearest major hub.
    Feeder,
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            EdgeKind::Trunk => "trunk",
            EdgeKind::Feeder => "feeder",
        };
        f.write_str(value)
    }
}

/// Undirected connection between two hubs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub source: HubId,
    pub target: HubId,
    pub kind: EdgeKind,
    pub distance_km: f64,
}

impl Edge {
    /// Whether the edge touches `id` at either end.
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }
}

/// Build the network edges for a hub collection.
///
/// Hubs with invalid coordinates are left out. Returns
/// [`Error::EmptyCatalog`] when no major hub is present. A lone major hub
/// without sub hubs yields an empty edge list.
pub fn build_edges(hubs: &[Hub]) -> Result<Vec<Edge>> {
    let (majors, subs): (Vec<&Hub>, Vec<&Hub>) = hubs
        .iter()
        .filter(|hub| {
            let valid = hub.coordinates.is_valid();
            if !valid {
                warn!(hub = %hub.id, "excluding hub with invalid coordinates");
            }
            valid
        })
        .partition(|hub| hub.tier == HubTier::Major);

    if majors.is_empty() {
        return Err(Error::EmptyCatalog);
    }

    let mut edges = Vec::with_capacity(majors.len() - 1 + subs.len());

    for pair in majors.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        edges.push(Edge {
            source: from.id.clone(),
            target: to.id.clone(),
            kind: EdgeKind::Trunk,
            distance_km: from.coordinates.distance_to(&to.coordinates),
        });
    }

    for sub in &subs {
        let Some((nearest, distance_km)) = nearest_major(sub, &majors) else {
            continue;
        };
        edges.push(Edge {
            source: sub.id.clone(),
            target: nearest.id.clone(),
            kind: EdgeKind::Feeder,
            distance_km,
        });
    }

    debug!(
        majors = majors.len(),
        subs = subs.len(),
        edges = edges.len(),
        "built hub network"
    );

    Ok(edges)
}

/// Closest major to `sub`; the earliest major wins ties.
fn nearest_major<'a>(sub: &Hub, majors: &[&'a Hub]) -> Option<(&'a Hub, f64)> {
    let mut best: Option<(&'a Hub, f64)> = None;
    for &major in majors {
        let distance = sub.coordinates.distance_to(&major.coordinates);
        match best {
            Some((_, current)) if distance >= current => {}
            _ => best = Some((major, distance)),
        }
    }
    best
}
