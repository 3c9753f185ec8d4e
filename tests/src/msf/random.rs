#![cfg(test)]
use std::collections::HashSet;

use prim_core::graph::{AdjacencyGraph, Graph};
use prim_core::prim::minimum_spanning_forest;
use prim_core::queue::{PriorityQueue, Queue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Union-find used by the Kruskal reference.
struct Components {
    parent: Vec<usize>,
}

impl Components {
    fn new(n: usize) -> Self {
        Self { parent: (0..n).collect() }
    }

    fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        self.parent[x] = root;
        root
    }

    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}

/// Total weight and tree count of a minimum spanning forest, computed with Kruskal.
fn kruskal(nodes: usize, links: &[(usize, usize, u32)]) -> (u64, usize) {
    let mut sorted = links.to_vec();
    sorted.sort_by_key(|&(_, _, w)| w);

    let mut components = Components::new(nodes);
    let mut total = 0u64;
    let mut merged = 0;
    for (a, b, w) in sorted {
        if components.union(a, b) {
            total += u64::from(w);
            merged += 1;
        }
    }
    (total, nodes - merged)
}

fn random_links(rng: &mut StdRng, nodes: usize, density: f64) -> Vec<(usize, usize, u32)> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();
    for a in 0..nodes {
        for b in (a + 1)..nodes {
            if rng.random_bool(density) && seen.insert((a, b)) {
                links.push((a, b, rng.random_range(1..100)));
            }
        }
    }
    links
}

#[test]
fn prim_matches_kruskal_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for round in 0..40 {
        let nodes = rng.random_range(1..40);
        let density = [0.05, 0.2, 0.6][round % 3];
        let links = random_links(&mut rng, nodes, density);

        let mut graph: AdjacencyGraph<usize, u32> = AdjacencyGraph::labelled_undirected();
        for n in 0..nodes {
            graph.add_node(n);
        }
        for &(a, b, w) in &links {
            assert_eq!(graph.add_edge(a, b, Some(w)), Ok(true));
        }
        assert_eq!(graph.num_edges(), links.len() * 2);

        let forest = minimum_spanning_forest(&graph).unwrap();
        let (expected_weight, expected_trees) = kruskal(nodes, &links);

        assert_eq!(forest.trees, expected_trees, "round {round}");
        assert_eq!(forest.len(), nodes - expected_trees, "round {round}");
        assert_eq!(forest.total_weight(), expected_weight as f64, "round {round}");
    }
}

#[test]
fn queue_drains_in_sorted_order_after_random_removals() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut queue = PriorityQueue::<u32>::min();
    let mut reference: Vec<u32> = Vec::new();

    for _ in 0..500 {
        let value = rng.random_range(0..1000);
        if queue.push(value) {
            reference.push(value);
        }
    }

    for _ in 0..150 {
        let idx = rng.random_range(0..reference.len());
        let value = reference.swap_remove(idx);
        assert!(queue.remove(&value));
    }

    reference.sort_unstable();
    let drained: Vec<u32> = std::iter::from_fn(|| queue.pop().ok()).collect();
    assert_eq!(drained, reference);
    assert!(queue.is_empty());
}
