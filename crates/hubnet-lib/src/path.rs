use std::collections::{HashMap, VecDeque};

use crate::catalog::HubId;
use crate::error::{Error, Result};
use crate::graph::Graph;

/// Result of a path query against a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// Ordered hub identifiers from start to goal, both inclusive.
    Found(Vec<HubId>),
    /// Both hubs exist but no chain of edges connects them.
    NoPath,
}

impl PathOutcome {
    /// Hubs along the path; empty when no path exists.
    pub fn hubs(&self) -> &[HubId] {
        match self {
            PathOutcome::Found(hubs) => hubs,
            PathOutcome::NoPath => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    pub fn into_hubs(self) -> Vec<HubId> {
        match self {
            PathOutcome::Found(hubs) => hubs,
            PathOutcome::NoPath => Vec::new(),
        }
    }
}

/// Find the fewest-hops path between `start` and `goal` with breadth-first
/// search.
///
/// Neighbours are expanded in adjacency order and a hub's parent is fixed the
/// first time it is reached, so repeated calls return the same path. Returns
/// [`Error::UnknownHub`] when either endpoint is not in the graph.
pub fn find_path(graph: &Graph, start: &str, goal: &str) -> Result<PathOutcome> {
    for id in [start, goal] {
        if !graph.contains(id) {
            return Err(Error::UnknownHub {
                name: id.to_string(),
                suggestions: Vec::new(),
            });
        }
    }

    if start == goal {
        return Ok(PathOutcome::Found(vec![start.to_string()]));
    }

    let mut parents: HashMap<&str, Option<&str>> = HashMap::new();
    let mut queue = VecDeque::new();

    parents.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for link in graph.neighbours(current) {
            let next = link.target.as_str();
            if parents.contains_key(next) {
                continue;
            }

            parents.insert(next, Some(current));
            if next == goal {
                return Ok(PathOutcome::Found(reconstruct_path(&parents, start, goal)));
            }
            queue.push_back(next);
        }
    }

    Ok(PathOutcome::NoPath)
}

fn reconstruct_path(parents: &HashMap<&str, Option<&str>>, start: &str, goal: &str) -> Vec<HubId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node.to_string());
        if node == start {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}
