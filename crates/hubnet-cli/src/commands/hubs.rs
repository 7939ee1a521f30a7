//! Hubs command handler for listing catalog entries.

use anyhow::Result;
use clap::ValueEnum;

use hubnet_lib::{Hub, HubCatalog, HubTier};

use hubnet_cli::output::{format_hub_table, render_json, OutputFormat};

/// Tier filter accepted by `hubs --tier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TierFilter {
    Major,
    Sub,
}

impl From<TierFilter> for HubTier {
    fn from(filter: TierFilter) -> Self {
        match filter {
            TierFilter::Major => HubTier::Major,
            TierFilter::Sub => HubTier::Sub,
        }
    }
}

/// Handle the hubs subcommand.
///
/// Lists catalog hubs in catalog order, optionally restricted to one region
/// (case-insensitive) and/or one tier.
pub fn handle_list_hubs(
    catalog: &HubCatalog,
    region: Option<&str>,
    tier: Option<TierFilter>,
    format: OutputFormat,
) -> Result<()> {
    let hubs = filter_hubs(catalog, region, tier.map(HubTier::from));

    if format.is_json() {
        render_json(&hubs)?;
        return Ok(());
    }

    if hubs.is_empty() {
        println!("No hubs match the given filters.");
    } else {
        println!("{}", format_hub_table(&hubs));
    }
    Ok(())
}

fn filter_hubs<'a>(
    catalog: &'a HubCatalog,
    region: Option<&str>,
    tier: Option<HubTier>,
) -> Vec<&'a Hub> {
    let region = region.map(str::trim);
    catalog
        .hubs()
        .iter()
        .filter(|hub| region.is_none_or(|wanted| hub.region.eq_ignore_ascii_case(wanted)))
        .filter(|hub| tier.is_none_or(|wanted| hub.tier == wanted))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "region,city,latitude,longitude,tier\n\
        Maharashtra,Mumbai,19.076,72.8777,major\n\
        Delhi,Delhi,28.7041,77.1025,major\n\
        Maharashtra,Pune,18.5204,73.8567,sub\n";

    fn catalog() -> HubCatalog {
        HubCatalog::from_reader(CSV.as_bytes()).expect("catalog loads")
    }

    #[test]
    fn filters_by_region_case_insensitively() {
        let catalog = catalog();
        let hubs = filter_hubs(&catalog, Some("maharashtra"), None);
        let ids: Vec<_> = hubs.iter().map(|hub| hub.id.as_str()).collect();
        assert_eq!(ids, ["MAH-MUMBA", "MAH-PUNE"]);
    }

    #[test]
    fn filters_by_tier() {
        let catalog = catalog();
        let hubs = filter_hubs(&catalog, None, Some(HubTier::Major));
        let ids: Vec<_> = hubs.iter().map(|hub| hub.id.as_str()).collect();
        assert_eq!(ids, ["MAH-MUMBA", "DEL-DELHI"]);
    }

    #[test]
    fn combined_filters_can_match_nothing() {
        let catalog = catalog();
        assert!(filter_hubs(&catalog, Some("Delhi"), Some(HubTier::Sub)).is_empty());
    }
}
