//! Output formatting for command results.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use hubnet_lib::{Edge, Hub, NetworkSnapshot, NetworkSummary, NetworkView, PathRenderMode};

/// Output style selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text.
    #[default]
    Text,
    /// Markdown-flavoured text.
    Rich,
    /// Pretty-printed JSON on stdout.
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }

    /// Text mode used when rendering a path summary.
    pub fn path_mode(self) -> PathRenderMode {
        match self {
            OutputFormat::Rich => PathRenderMode::RichText,
            OutputFormat::Text | OutputFormat::Json => PathRenderMode::PlainText,
        }
    }
}

/// Write `value` as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or writing to stdout fails.
pub fn render_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    writeln!(stdout)
}

/// Render hubs as an aligned table.
pub fn format_hub_table(hubs: &[&Hub]) -> String {
    let mut lines = Vec::with_capacity(hubs.len() + 2);
    lines.push(format!("Hubs ({}):", hubs.len()));
    lines.push(format!(
        "{:<10} {:<20} {:<18} {:<5} {:>10} {:>10}",
        "ID", "City", "Region", "Tier", "Latitude", "Longitude"
    ));
    for hub in hubs {
        lines.push(format!(
            "{:<10} {:<20} {:<18} {:<5} {:>10.4} {:>10.4}",
            hub.id,
            hub.name,
            hub.region,
            hub.tier,
            hub.coordinates.latitude,
            hub.coordinates.longitude
        ));
    }
    lines.join("\n")
}

fn format_edge(edge: &Edge) -> String {
    format!(
        "  {} -- {} [{}] {:.1} km",
        edge.source, edge.target, edge.kind, edge.distance_km
    )
}

/// Render a network snapshot as a header followed by one line per edge.
pub fn format_network(view: NetworkView, snapshot: &NetworkSnapshot) -> String {
    let mut lines = Vec::with_capacity(snapshot.edges.len() + 2);
    lines.push(format!(
        "Network ({} view): {} hubs, {} edges",
        view,
        snapshot.hubs.len(),
        snapshot.edges.len()
    ));
    if snapshot.edges.is_empty() {
        lines.push("  (no edges)".to_string());
    }
    lines.extend(snapshot.edges.iter().map(format_edge));
    lines.join("\n")
}

/// Render network counters, one per line.
pub fn format_summary(summary: &NetworkSummary) -> String {
    [
        format!("Major hubs:      {}", summary.major_hubs),
        format!("Sub hubs:        {}", summary.sub_hubs),
        format!("Regions:         {}", summary.regions),
        format!("Edges:           {}", summary.edges),
        format!("Total distance:  {:.1} km", summary.total_distance_km),
        format!("Skipped records: {}", summary.skipped_records),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hubnet_lib::{Coordinates, EdgeKind, HubTier};

    fn hub(region: &str, name: &str, tier: HubTier, lat: f64, lon: f64) -> Hub {
        Hub::new(region, name, tier, Coordinates { latitude: lat, longitude: lon })
    }

    #[test]
    fn hub_table_lists_every_hub() {
        let mumbai = hub("Maharashtra", "Mumbai", HubTier::Major, 19.076, 72.8777);
        let pune = hub("Maharashtra", "Pune", HubTier::Sub, 18.5204, 73.8567);
        let table = format_hub_table(&[&mumbai, &pune]);

        assert!(table.starts_with("Hubs (2):"));
        assert!(table.contains("MAH-MUMBA"));
        assert!(table.contains("MAH-PUNE"));
        assert!(table.contains("18.5204"));
    }

    #[test]
    fn empty_network_says_so() {
        let snapshot = NetworkSnapshot {
            hubs: vec![hub("Delhi", "Delhi", HubTier::Major, 28.7041, 77.1025)],
            edges: Vec::new(),
        };
        let text = format_network(NetworkView::Full, &snapshot);
        assert!(text.starts_with("Network (full view): 1 hubs, 0 edges"));
        assert!(text.contains("(no edges)"));
    }

    #[test]
    fn edges_show_kind_and_distance() {
        let edge = Edge {
            source: "MAH-PUNE".to_string(),
            target: "MAH-MUMBA".to_string(),
            kind: EdgeKind::Feeder,
            distance_km: 120.24,
        };
        assert_eq!(format_edge(&edge), "  MAH-PUNE -- MAH-MUMBA [feeder] 120.2 km");
    }

    #[test]
    fn rich_format_selects_rich_path_mode() {
        assert_eq!(OutputFormat::Rich.path_mode(), PathRenderMode::RichText);
        assert_eq!(OutputFormat::Text.path_mode(), PathRenderMode::PlainText);
        assert!(OutputFormat::Json.is_json());
    }
}
