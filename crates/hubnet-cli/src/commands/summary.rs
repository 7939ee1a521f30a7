//! Summary command handler.

use anyhow::Result;

use hubnet_lib::HubNetwork;

use hubnet_cli::output::{format_summary, render_json, OutputFormat};

/// Handle the summary subcommand.
pub fn handle_summary(network: &HubNetwork, format: OutputFormat) -> Result<()> {
    let summary = network.summary();
    if format.is_json() {
        render_json(&summary)?;
    } else {
        println!("{}", format_summary(&summary));
    }
    Ok(())
}
