mod common;

use std::collections::{HashSet, VecDeque};

use common::hub;
use hubnet_lib::{build_edges, build_graph, EdgeKind, Error, Graph, HubCatalog, HubTier};

fn reachable_from(graph: &Graph, start: &str) -> HashSet<String> {
    let mut seen = HashSet::from([start.to_string()]);
    let mut queue = VecDeque::from([start.to_string()]);
    while let Some(current) = queue.pop_front() {
        for link in graph.neighbours(&current) {
            if seen.insert(link.target.clone()) {
                queue.push_back(link.target.clone());
            }
        }
    }
    seen
}

fn assert_connected(catalog: &HubCatalog) {
    let edges = build_edges(catalog.hubs()).expect("network builds");
    let graph = build_graph(catalog.hubs(), &edges);
    assert_eq!(graph.node_count(), catalog.len());
    for hub in catalog.hubs() {
        assert_eq!(
            reachable_from(&graph, &hub.id).len(),
            catalog.len(),
            "every hub reachable from {}",
            hub.id
        );
    }
}

#[test]
fn scenario_chains_majors_and_attaches_sub_to_nearest() {
    let catalog = common::scenario_catalog();
    let edges = build_edges(catalog.hubs()).expect("network builds");

    let pairs: Vec<(&str, &str, EdgeKind)> = edges
        .iter()
        .map(|edge| (edge.source.as_str(), edge.target.as_str(), edge.kind))
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("MAH-MUMBA", "DEL-DELHI", EdgeKind::Trunk),
            ("MAH-PUNE", "MAH-MUMBA", EdgeKind::Feeder),
        ]
    );
    assert!((edges[0].distance_km - 1153.24).abs() < 0.1);
    assert!((edges[1].distance_km - 120.15).abs() < 0.1);
}

#[test]
fn single_major_without_subs_has_no_edges() {
    let catalog = HubCatalog::from_hubs([hub("Goa", "Panaji", HubTier::Major, 15.48, 73.83)]);
    let edges = build_edges(catalog.hubs()).expect("single major is fine");
    assert!(edges.is_empty());

    let graph = build_graph(catalog.hubs(), &edges);
    assert_eq!(graph.node_count(), 1);
    assert!(graph.contains("GOA-PANAJ"));
    assert!(graph.neighbours("GOA-PANAJ").is_empty());
}

#[test]
fn catalog_without_majors_is_rejected() {
    let only_subs = HubCatalog::from_hubs([
        hub("Maharashtra", "Pune", HubTier::Sub, 18.5204, 73.8567),
        hub("Maharashtra", "Thane", HubTier::Sub, 19.226139, 72.988056),
    ]);
    let err = build_edges(only_subs.hubs()).expect_err("no major hub");
    assert!(matches!(err, Error::EmptyCatalog));
    assert_eq!(err.code(), "EMPTY_CATALOG");

    assert!(matches!(build_edges(&[]), Err(Error::EmptyCatalog)));
}

#[test]
fn equidistant_sub_attaches_to_first_major() {
    let catalog = HubCatalog::from_hubs([
        hub("West", "Westport", HubTier::Major, 0.0, -1.0),
        hub("East", "Eastport", HubTier::Major, 0.0, 1.0),
        hub("Mid", "Midway", HubTier::Sub, 0.0, 0.0),
    ]);
    let edges = build_edges(catalog.hubs()).expect("network builds");

    let feeder = edges
        .iter()
        .find(|edge| edge.kind == EdgeKind::Feeder)
        .expect("feeder edge");
    assert_eq!(feeder.source, "MID-MIDWA");
    assert_eq!(feeder.target, "WES-WESTP");
}

#[test]
fn every_sub_has_exactly_one_edge_to_a_major() {
    let catalog = HubCatalog::builtin().expect("builtin catalog");
    let edges = build_edges(catalog.hubs()).expect("network builds");

    for sub in catalog.subs() {
        let incident: Vec<_> = edges.iter().filter(|edge| edge.touches(&sub.id)).collect();
        assert_eq!(incident.len(), 1, "{} has one edge", sub.id);
        let major = catalog
            .find_by_id(&incident[0].target)
            .expect("feeder target exists");
        assert_eq!(major.tier, HubTier::Major);
    }

    let majors = catalog.majors().count();
    let trunks = edges.iter().filter(|e| e.kind == EdgeKind::Trunk).count();
    assert_eq!(trunks, majors - 1);
}

#[test]
fn majors_are_chained_in_catalog_order() {
    let catalog = HubCatalog::builtin().expect("builtin catalog");
    let edges = build_edges(catalog.hubs()).expect("network builds");
    let majors: Vec<&str> = catalog.majors().map(|hub| hub.id.as_str()).collect();

    let trunks: Vec<(&str, &str)> = edges
        .iter()
        .filter(|edge| edge.kind == EdgeKind::Trunk)
        .map(|edge| (edge.source.as_str(), edge.target.as_str()))
        .collect();
    let expected: Vec<(&str, &str)> = majors.windows(2).map(|w| (w[0], w[1])).collect();
    assert_eq!(trunks, expected);
}

#[test]
fn built_networks_are_connected() {
    assert_connected(&common::scenario_catalog());
    assert_connected(&HubCatalog::builtin().expect("builtin catalog"));

    // Grid of hubs with every third one a major.
    let hubs = (0..30).map(|i| {
        let tier = if i % 3 == 0 { HubTier::Major } else { HubTier::Sub };
        let latitude = -60.0 + (i / 6) as f64 * 25.0;
        let longitude = -170.0 + (i % 6) as f64 * 65.0;
        hub(&format!("Region{i}"), &format!("Hub{i:02}"), tier, latitude, longitude)
    });
    assert_connected(&HubCatalog::from_hubs(hubs));
}

#[test]
fn graph_links_are_bidirectional_in_edge_order() {
    let catalog = common::scenario_catalog();
    let edges = build_edges(catalog.hubs()).expect("network builds");
    let graph = build_graph(catalog.hubs(), &edges);

    let mumbai: Vec<&str> = graph
        .neighbours("MAH-MUMBA")
        .iter()
        .map(|link| link.target.as_str())
        .collect();
    assert_eq!(mumbai, vec!["DEL-DELHI", "MAH-PUNE"]);
    assert_eq!(
        graph.link_distance("DEL-DELHI", "MAH-MUMBA"),
        graph.link_distance("MAH-MUMBA", "DEL-DELHI")
    );
    assert!(graph.link_distance("DEL-DELHI", "MAH-PUNE").is_none());
    assert!(graph.neighbours("ATL-ATLAN").is_empty());
}
