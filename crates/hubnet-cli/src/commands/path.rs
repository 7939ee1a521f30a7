//! Path command handler for fewest-hops queries.

use anyhow::{Context, Result};

use hubnet_lib::{HubNetwork, PathSummary};

use hubnet_cli::output::{render_json, OutputFormat};

/// Handle the path subcommand.
///
/// Endpoints may be given as hub identifiers or city names.
pub fn handle_path(network: &HubNetwork, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let plan = network
        .get_path(from, to)
        .with_context(|| format!("failed to find a path from {from} to {to}"))?;
    let summary = PathSummary::from_plan(network, &plan);

    if format.is_json() {
        render_json(&summary)?;
    } else {
        print!("{}", summary.render(format.path_mode()));
    }
    Ok(())
}
