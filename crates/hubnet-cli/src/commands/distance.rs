//! Distance command handler for great-circle queries between two hubs.

use anyhow::{Context, Result};
use serde::Serialize;

use hubnet_lib::{HubId, HubNetwork};

use hubnet_cli::output::{render_json, OutputFormat};

#[derive(Debug, Serialize)]
struct DistanceOutput {
    from: HubId,
    to: HubId,
    distance_km: f64,
}

/// Handle the distance subcommand.
pub fn handle_distance(
    network: &HubNetwork,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    let context = || format!("failed to measure the distance from {from} to {to}");
    let start = network.resolve(from).with_context(context)?;
    let goal = network.resolve(to).with_context(context)?;
    let distance_km = network
        .distance_between(&start.id, &goal.id)
        .with_context(context)?;

    if format.is_json() {
        render_json(&DistanceOutput {
            from: start.id.clone(),
            to: goal.id.clone(),
            distance_km,
        })?;
    } else {
        println!(
            "{} ({}) -> {} ({}): {:.1} km",
            start.name, start.id, goal.name, goal.id, distance_km
        );
    }
    Ok(())
}
