#![cfg(test)]
use std::io::Cursor;

use prim_common::error::{GraphError, LoadError};
use prim_core::graph::Graph;
use prim_core::loader::{self, DistanceGraph};
use prim_core::prim::minimum_spanning_forest;

const NORTH_ITALY: &str = "\
torino,milano,125.9
torino,genova,123.0
milano,genova,119.5
milano,bologna,200.8
genova,bologna,225.2
bologna,firenze,80.6
firenze,roma,232.0
bologna,roma,300.0
";

fn read(data: &str) -> DistanceGraph {
    loader::read_graph(Cursor::new(data), ',').expect("sample data should parse")
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

/// Loads a connected distance table and checks the forest is a single minimal tree.
#[test]
fn forest_of_connected_cities() {
    let graph = read(NORTH_ITALY);
    assert_eq!(graph.num_nodes(), 6);
    assert_eq!(graph.num_edges(), 16);

    let forest = minimum_spanning_forest(&graph).expect("graph is labelled and undirected");

    assert_eq!(forest.trees, 1);
    assert_eq!(forest.len(), 5);
    assert_close(forest.total_weight(), 755.9);
    assert_eq!(format!("{:.0}", forest.total_weight()), "756");

    for edge in forest.iter() {
        let weight = graph.label(&edge.start, &edge.end).unwrap().copied();
        assert_eq!(weight, edge.label().copied(), "forest edge {edge} not taken from the graph");
    }
}

/// Islands without a bridge end up in their own tree.
#[test]
fn forest_of_disconnected_regions() {
    let data = format!("{NORTH_ITALY}cagliari,sassari,212.3\n");
    let graph = read(&data);

    let forest = minimum_spanning_forest(&graph).unwrap();

    assert_eq!(forest.trees, 2);
    assert_eq!(forest.len(), graph.num_nodes() - 2);
    assert_close(forest.total_weight(), 755.9 + 212.3);
}

/// Reading from disk goes through the same path as reading from memory.
#[test]
fn load_from_file() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("prim-integration-{}.csv", std::process::id()));
    std::fs::write(&path, NORTH_ITALY.replace(',', ";"))?;

    let graph = loader::load_graph(&path, ';');
    std::fs::remove_file(&path)?;

    let forest = minimum_spanning_forest(&graph?)?;
    assert_close(forest.total_weight(), 755.9);
    Ok(())
}

#[test]
fn cutting_off_a_city_splits_the_forest() {
    let mut graph = read(NORTH_ITALY);
    let roma = "roma".to_string();
    assert!(graph.remove_edge(&"firenze".to_string(), &roma));
    assert!(graph.remove_edge(&roma, &"bologna".to_string()));
    assert_eq!(graph.num_edges(), 12);

    let forest = minimum_spanning_forest(&graph).unwrap();
    assert_eq!(forest.trees, 2);
    assert_eq!(forest.len(), 4);
    assert_close(forest.total_weight(), 755.9 - 232.0);
}

#[test]
fn errors_reach_the_caller() {
    let err = loader::read_graph(Cursor::new("torino,milano\n"), ',').unwrap_err();
    assert!(matches!(err, LoadError::MalformedLine { line: 1, .. }));

    let mut directed = DistanceGraph::new(true, true);
    directed.add_node("a".to_string());
    assert_eq!(minimum_spanning_forest(&directed).err(), Some(GraphError::DirectedGraph));
}
