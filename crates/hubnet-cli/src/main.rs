use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hubnet_lib::{CatalogConfig, HubCatalog, HubNetwork, HUB_DATA_ENV};

use hubnet_cli::output::OutputFormat;
use hubnet_cli::source::{load_catalog, resolve_hub_source, HubSource};

mod commands;

use commands::hubs::TierFilter;
use commands::network::ViewArg;

#[derive(Parser, Debug)]
#[command(author, version, about = "Hub network utilities")]
struct Cli {
    /// Hub catalog CSV file. Defaults to hubs.csv in the platform data
    /// directory, then the built-in catalog.
    #[arg(long, global = true, env = HUB_DATA_ENV)]
    hubs: Option<PathBuf>,

    /// Maximum number of hubs to load; later records are ignored. Falls
    /// back to HUBNET_MAX_HUBS, then 10000.
    #[arg(long, global = true)]
    max_hubs: Option<NonZeroUsize>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List hubs in the catalog.
    Hubs {
        /// Only show hubs in this region.
        #[arg(long)]
        region: Option<String>,
        /// Only show hubs of this tier.
        #[arg(long, value_enum)]
        tier: Option<TierFilter>,
    },
    /// Print the hubs and edges of the derived network.
    Network {
        /// Which part of the network to print.
        #[arg(long, value_enum, default_value_t = ViewArg::Full)]
        view: ViewArg,
    },
    /// Compute the fewest-hops path between two hubs.
    Path {
        /// Starting hub id or city name.
        #[arg(long = "from")]
        from: String,
        /// Destination hub id or city name.
        #[arg(long = "to")]
        to: String,
    },
    /// Measure the great-circle distance between two hubs.
    Distance {
        /// First hub id or city name.
        #[arg(long = "from")]
        from: String,
        /// Second hub id or city name.
        #[arg(long = "to")]
        to: String,
    },
    /// Print network counters.
    Summary,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = match cli.max_hubs {
        Some(max_hubs) => CatalogConfig {
            max_hubs: max_hubs.get(),
        },
        None => CatalogConfig::from_env(),
    };
    let source = resolve_hub_source(cli.hubs.as_deref());
    let catalog = load_catalog(&source, &config)?;

    match cli.command {
        Command::Hubs { region, tier } => {
            commands::hubs::handle_list_hubs(&catalog, region.as_deref(), tier, cli.format)
        }
        Command::Network { view } => {
            let network = build_network(catalog, &source)?;
            commands::network::handle_network(&network, view, cli.format)
        }
        Command::Path { from, to } => {
            let network = build_network(catalog, &source)?;
            commands::path::handle_path(&network, &from, &to, cli.format)
        }
        Command::Distance { from, to } => {
            let network = build_network(catalog, &source)?;
            commands::distance::handle_distance(&network, &from, &to, cli.format)
        }
        Command::Summary => {
            let network = build_network(catalog, &source)?;
            commands::summary::handle_summary(&network, cli.format)
        }
    }
}

fn build_network(catalog: HubCatalog, source: &HubSource) -> Result<HubNetwork> {
    HubNetwork::build(catalog)
        .with_context(|| format!("failed to build the hub network from {source}"))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
