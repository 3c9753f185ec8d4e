//! # Minimum Spanning Forest
//!
//! Prim's algorithm, run once from every connected component of a labelled undirected graph.
//!
//! Candidate edges wait in a [`PriorityQueue`] ordered by weight. Candidates are never
//! updated in place: once an edge is popped whose end has already joined the forest it is
//! simply discarded.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;

use prim_common::error::GraphError;
use tracing::debug;

use crate::graph::{AdjacencyGraph, Edge, Graph};
use crate::queue::{PriorityQueue, Queue};

/// An edge label that can be used as a numeric weight.
pub trait Weight: Copy {
    fn as_f64(&self) -> f64;
}

macro_rules! impl_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn as_f64(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_weight!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

#[derive(Debug, Clone)]
pub struct SpanningForest<V, L> {
    pub edges: Vec<Edge<V, L>>,
    /// Number of trees, i.e. connected components of the input graph.
    pub trees: usize,
}

impl<V, L: Weight> SpanningForest<V, L> {
    pub fn total_weight(&self) -> f64 {
        self.edges
            .iter()
            .filter_map(|edge| edge.label().map(Weight::as_f64))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edge<V, L>> {
        self.edges.iter()
    }
}

fn by_weight<V, L: Weight>(a: &Edge<V, L>, b: &Edge<V, L>) -> Ordering {
    let weight = |edge: &Edge<V, L>| edge.label().map_or(f64::INFINITY, Weight::as_f64);
    weight(a).total_cmp(&weight(b))
}

/// Computes a minimum spanning forest of `graph`.
///
/// The forest holds one tree per connected component, so it has
/// `graph.num_nodes() - forest.trees` edges.
pub fn minimum_spanning_forest<V, L>(graph: &AdjacencyGraph<V, L>) -> Result<SpanningForest<V, L>, GraphError>
where
    V: Eq + Hash + Clone + 'static,
    L: Weight + 'static,
{
    if graph.is_directed() {
        return Err(GraphError::DirectedGraph);
    }
    if !graph.is_labelled() {
        return Err(GraphError::Unlabelled);
    }

    let total = graph.num_nodes();
    let mut visited: HashSet<V> = HashSet::with_capacity(total);
    let mut candidates: PriorityQueue<Edge<V, L>> = PriorityQueue::new(by_weight);
    let mut edges: Vec<Edge<V, L>> = Vec::with_capacity(total.saturating_sub(1));
    let mut trees = 0;

    for root in graph.nodes() {
        if visited.len() == total {
            break;
        }
        if !visited.insert(root.clone()) {
            continue;
        }

        trees += 1;
        let mut current = root.clone();

        loop {
            for (neighbour, label) in graph.outgoing(&current)? {
                if !visited.contains(neighbour) {
                    candidates.push(Edge::new(current.clone(), neighbour.clone(), label.copied()));
                }
            }

            let mut next = None;
            while let Ok(edge) = candidates.pop() {
                if !visited.contains(&edge.end) {
                    next = Some(edge);
                    break;
                }
            }

            // No candidate left: this tree spans its whole component.
            let Some(edge) = next else {
                break;
            };

            visited.insert(edge.end.clone());
            current = edge.end.clone();
            edges.push(edge);
        }
    }

    debug!("spanning forest with {} edges across {trees} trees", edges.len());

    Ok(SpanningForest { edges, trees })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
