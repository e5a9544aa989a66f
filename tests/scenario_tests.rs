use std::collections::HashSet;
use std::fs;

use asrank_propagator::as_graph::{AsGraph, REL_PEER, REL_PROVIDER_TO_CUSTOMER};
use asrank_propagator::io::{announcements, relationships, rib_csv, rov_asns};
use asrank_propagator::Relationship;

fn temp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("asrank_propagator_{}_{}", name, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn end_to_end_linear_chain_from_files() {
    let dir = temp_dir("linear_chain");
    let rel_path = dir.join("rel.txt");
    let ann_path = dir.join("ann.csv");
    let rov_path = dir.join("rov.txt");

    fs::write(&rel_path, "1|2|-1|src\n2|3|-1|src\n").unwrap();
    fs::write(&ann_path, "asn,prefix,rov_invalid\n3,192.168.1.0/24,false\n").unwrap();
    fs::write(&rov_path, "").unwrap();

    let mut graph = AsGraph::new();
    relationships::load_relationships(&mut graph, &rel_path).unwrap();
    assert!(!graph.has_provider_cycle());
    assert!(!graph.has_customer_cycle());
    graph.flatten();

    let rov_asns = rov_asns::load_rov_asns(&rov_path).unwrap();
    graph.initialize_policies(&rov_asns);
    announcements::load_announcements(&mut graph, &ann_path).unwrap();
    graph.propagate_announcements();

    assert_eq!(graph.nodes[&3].propagation_rank, 0);
    assert_eq!(graph.nodes[&2].propagation_rank, 1);
    assert_eq!(graph.nodes[&1].propagation_rank, 2);

    let mut out = Vec::new();
    rib_csv::write_rib_csv(&graph, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("3,192.168.1.0/24,\"(3,)\""));
    assert!(text.contains("2,192.168.1.0/24,\"(2, 3)\""));
    assert!(text.contains("1,192.168.1.0/24,\"(1, 2, 3)\""));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn provider_cycle_refuses_propagation() {
    let mut graph = AsGraph::new();
    graph.add_relationship(1, 2, REL_PROVIDER_TO_CUSTOMER);
    graph.add_relationship(2, 3, REL_PROVIDER_TO_CUSTOMER);
    graph.add_relationship(3, 1, REL_PROVIDER_TO_CUSTOMER);

    assert!(graph.has_provider_cycle());
    // A real driver would bail out here without calling flatten/propagate;
    // this test only documents that the check fires before any propagation
    // would be attempted.
}

#[test]
fn rov_drop_end_to_end() {
    let dir = temp_dir("rov_drop");
    let rel_path = dir.join("rel.txt");
    let ann_path = dir.join("ann.csv");
    let rov_path = dir.join("rov.txt");

    fs::write(&rel_path, "1|2|-1|src\n").unwrap();
    fs::write(&ann_path, "asn,prefix,rov_invalid\n1,1.2.0.0/16,true\n").unwrap();
    fs::write(&rov_path, "2\n").unwrap();

    let mut graph = AsGraph::new();
    relationships::load_relationships(&mut graph, &rel_path).unwrap();
    graph.flatten();
    let rov_asns = rov_asns::load_rov_asns(&rov_path).unwrap();
    graph.initialize_policies(&rov_asns);
    announcements::load_announcements(&mut graph, &ann_path).unwrap();
    graph.propagate_announcements();

    // AS1 runs plain BGP and seeded it itself.
    assert!(graph.nodes[&1]
        .policy
        .as_ref()
        .unwrap()
        .local_rib
        .contains_key("1.2.0.0/16"));
    // AS2 runs ROV and never sees the invalid route.
    assert!(!graph.nodes[&2]
        .policy
        .as_ref()
        .unwrap()
        .local_rib
        .contains_key("1.2.0.0/16"));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn peer_topology_scenario() {
    let mut graph = AsGraph::new();
    graph.add_relationship(1, 2, REL_PEER);
    graph.add_relationship(1, 3, REL_PROVIDER_TO_CUSTOMER);
    graph.add_relationship(2, 3, REL_PROVIDER_TO_CUSTOMER);
    graph.flatten();
    graph.initialize_policies(&HashSet::new());
    graph.seed_announcement(3, "10.0.1.0/24".to_string(), false);
    graph.seed_announcement(2, "10.0.2.0/24".to_string(), false);
    graph.propagate_announcements();

    let rib1 = &graph.nodes[&1].policy.as_ref().unwrap().local_rib;
    assert!(rib1.contains_key("10.0.1.0/24"));
    let via_2 = &rib1["10.0.2.0/24"];
    assert_eq!(via_2.received_from, Relationship::Peer);
    assert_eq!(via_2.as_path, vec![1, 2]);
}

#[test]
fn empty_graph_end_to_end_produces_header_only() {
    let graph = AsGraph::new();
    let mut out = Vec::new();
    rib_csv::write_rib_csv(&graph, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "asn,prefix,as_path\n");
}
