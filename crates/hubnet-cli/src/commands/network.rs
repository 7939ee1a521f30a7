//! Network command handler for printing the derived edge set.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use hubnet_lib::{HubNetwork, NetworkSnapshot, NetworkView};

use hubnet_cli::output::{format_network, render_json, OutputFormat};

/// View selector accepted by `network --view`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ViewArg {
    /// Every hub and edge.
    #[default]
    Full,
    /// Major hubs and trunk edges only.
    Major,
}

impl From<ViewArg> for NetworkView {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Full => NetworkView::Full,
            ViewArg::Major => NetworkView::MajorOnly,
        }
    }
}

/// JSON payload for the network command.
#[derive(Debug, Serialize)]
struct NetworkOutput {
    view: NetworkView,
    #[serde(flatten)]
    snapshot: NetworkSnapshot,
}

/// Handle the network subcommand.
pub fn handle_network(network: &HubNetwork, view: ViewArg, format: OutputFormat) -> Result<()> {
    let view = NetworkView::from(view);
    let snapshot = network.view(view);

    if format.is_json() {
        render_json(&NetworkOutput { view, snapshot })?;
    } else {
        println!("{}", format_network(view, &snapshot));
    }
    Ok(())
}
