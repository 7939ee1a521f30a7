use std::fmt::Write;

use serde::Serialize;

use crate::catalog::{HubId, HubTier};
use crate::routing::{HubNetwork, PathPlan};

/// Presentation style for turning a [`PathSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathRenderMode {
    PlainText,
    RichText,
}

/// Step taken along a planned path.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathStep {
    pub index: usize,
    pub id: HubId,
    pub name: String,
    pub region: String,
    pub tier: HubTier,
    /// Length of the hop that reached this hub; absent for the first step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// Structured representation of a planned path that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PathSummary {
    pub hops: usize,
    pub total_distance_km: f64,
    pub steps: Vec<PathStep>,
}

impl PathSummary {
    /// Convert a [`PathPlan`] into a summary with resolved hub names.
    ///
    /// Steps whose hub is missing from the network's catalog are left out.
    pub fn from_plan(network: &HubNetwork, plan: &PathPlan) -> Self {
        let mut steps = Vec::with_capacity(plan.steps.len());
        let mut previous: Option<&str> = None;
        for (index, id) in plan.steps.iter().enumerate() {
            let Some(hub) = network.catalog().find_by_id(id) else {
                continue;
            };
            let distance_km =
                previous.and_then(|prev| network.graph().link_distance(prev, id));
            steps.push(PathStep {
                index,
                id: hub.id.clone(),
                name: hub.name.clone(),
                region: hub.region.clone(),
                tier: hub.tier,
                distance_km,
            });
            previous = Some(id.as_str());
        }

        Self {
            hops: plan.hop_count(),
            total_distance_km: plan.total_distance_km,
            steps,
        }
    }

    fn start_name(&self) -> &str {
        self.steps
            .first()
            .map(|step| step.name.as_str())
            .unwrap_or("<unknown>")
    }

    fn goal_name(&self) -> &str {
        self.steps
            .last()
            .map(|step| step.name.as_str())
            .unwrap_or("<unknown>")
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: PathRenderMode) -> String {
        match mode {
            PathRenderMode::PlainText => self.render_plain(),
            PathRenderMode::RichText => self.render_rich(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Path: {} -> {} ({} hops, {:.1} km)",
            self.start_name(),
            self.goal_name(),
            self.hops,
            self.total_distance_km
        );
        for step in &self.steps {
            match step.distance_km {
                Some(distance) => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} ({}, {}) +{:.1} km",
                        step.index, step.name, step.id, step.tier, distance
                    );
                }
                None => {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: {} ({}, {})",
                        step.index, step.name, step.id, step.tier
                    );
                }
            }
        }
        buffer
    }

    fn render_rich(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Path**: _{} → {}_ ({} hops, {:.1} km)",
            self.start_name(),
            self.goal_name(),
            self.hops,
            self.total_distance_km
        );
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "* {:>2}. **{}** (`{}`, {})",
                step.index, step.name, step.id, step.region
            );
        }
        buffer
    }
}
