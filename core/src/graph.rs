//! # Generic Graph
//!
//! Nodes of any hashable type joined by edges that may carry a label.
//!
//! [`AdjacencyGraph`] stores, for every node, a map from each reachable node to the label of
//! the connecting edge. Undirected graphs store every link twice, once per direction, and
//! both directions count towards [`Graph::num_edges`].

use std::collections::HashMap;
use std::hash::Hash;

use prim_common::error::GraphError;

mod edge;

pub use edge::Edge;

/// Operations every graph exposes.
pub trait Graph<V, L> {
    fn is_directed(&self) -> bool;

    fn is_labelled(&self) -> bool;

    /// Adds `node`. Returns `false` if it was already present. O(1).
    fn add_node(&mut self, node: V) -> bool;

    /// Adds an edge between two existing nodes. O(1).
    ///
    /// Returns `Ok(false)` if an endpoint is missing or the edge already exists, and
    /// [`GraphError::MissingLabel`] if the graph is labelled but `label` is `None`.
    fn add_edge(&mut self, start: V, end: V, label: Option<L>) -> Result<bool, GraphError>;

    fn contains_node(&self, node: &V) -> bool;

    fn contains_edge(&self, start: &V, end: &V) -> bool;

    /// Removes `node` along with every edge touching it. O(n).
    fn remove_node(&mut self, node: &V) -> bool;

    fn remove_edge(&mut self, start: &V, end: &V) -> bool;

    fn num_nodes(&self) -> usize;

    fn num_edges(&self) -> usize;

    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a;

    /// Every stored edge. Undirected graphs yield both directions of each link.
    fn edges(&self) -> Vec<Edge<V, L>>;

    fn neighbours<'a>(&'a self, node: &V) -> Result<impl Iterator<Item = &'a V>, GraphError>
    where
        V: 'a;

    /// Label of the edge from `start` to `end`, or `None` if there is no such edge.
    fn label(&self, start: &V, end: &V) -> Result<Option<&L>, GraphError>;
}

#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, L> {
    adjacency: HashMap<V, HashMap<V, Option<L>>>,
    directed: bool,
    labelled: bool,
    num_edges: usize,
    self_loops: usize,
}

impl<V, L> AdjacencyGraph<V, L>
where
    V: Eq + Hash + Clone,
    L: Clone,
{
    pub fn new(directed: bool, labelled: bool) -> Self {
        Self {
            adjacency: HashMap::new(),
            directed,
            labelled,
            num_edges: 0,
            self_loops: 0,
        }
    }

    pub fn directed() -> Self {
        Self::new(true, false)
    }

    pub fn undirected() -> Self {
        Self::new(false, false)
    }

    pub fn labelled_undirected() -> Self {
        Self::new(false, true)
    }

    /// Number of distinct connections. In an undirected graph a link stored in both
    /// directions counts once, and so does a self-loop.
    pub fn num_links(&self) -> usize {
        if self.directed {
            return self.num_edges;
        }
        (self.num_edges - self.self_loops) / 2 + self.self_loops
    }

    /// Outgoing edges of `node` together with their labels.
    pub fn outgoing(&self, node: &V) -> Result<impl Iterator<Item = (&V, Option<&L>)>, GraphError> {
        let targets = self.adjacency.get(node).ok_or(GraphError::NodeNotFound)?;
        Ok(targets.iter().map(|(end, label)| (end, label.as_ref())))
    }

    fn insert(&mut self, start: &V, end: V, label: Option<L>) {
        if let Some(targets) = self.adjacency.get_mut(start) {
            targets.insert(end, label);
            self.num_edges += 1;
        }
    }

    fn unlink(&mut self, start: &V, end: &V) -> bool {
        let removed = self
            .adjacency
            .get_mut(start)
            .is_some_and(|targets| targets.remove(end).is_some());

        if removed {
            self.num_edges -= 1;
        }
        removed
    }
}

impl<V, L> Default for AdjacencyGraph<V, L>
where
    V: Eq + Hash + Clone,
    L: Clone,
{
    fn default() -> Self {
        Self::undirected()
    }
}

impl<V, L> Graph<V, L> for AdjacencyGraph<V, L>
where
    V: Eq + Hash + Clone,
    L: Clone,
{
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_labelled(&self) -> bool {
        self.labelled
    }

    fn add_node(&mut self, node: V) -> bool {
        if self.contains_node(&node) {
            return false;
        }
        self.adjacency.insert(node, HashMap::new());
        true
    }

    fn add_edge(&mut self, start: V, end: V, label: Option<L>) -> Result<bool, GraphError> {
        if self.labelled && label.is_none() {
            return Err(GraphError::MissingLabel);
        }

        if !self.contains_node(&start) || !self.contains_node(&end) || self.contains_edge(&start, &end) {
            return Ok(false);
        }

        let label = if self.labelled { label } else { None };

        if start == end {
            self.self_loops += 1;
        } else if !self.directed {
            self.insert(&end, start.clone(), label.clone());
        }
        self.insert(&start, end, label);

        Ok(true)
    }

    fn contains_node(&self, node: &V) -> bool {
        self.adjacency.contains_key(node)
    }

    fn contains_edge(&self, start: &V, end: &V) -> bool {
        self.adjacency
            .get(start)
            .is_some_and(|targets| targets.contains_key(end))
    }

    fn remove_node(&mut self, node: &V) -> bool {
        let Some(targets) = self.adjacency.remove(node) else {
            return false;
        };

        self.num_edges -= targets.len();
        if targets.contains_key(node) {
            self.self_loops -= 1;
        }

        for other in self.adjacency.values_mut() {
            if other.remove(node).is_some() {
                self.num_edges -= 1;
            }
        }

        true
    }

    fn remove_edge(&mut self, start: &V, end: &V) -> bool {
        if !self.unlink(start, end) {
            return false;
        }

        if start == end {
            self.self_loops -= 1;
        } else if !self.directed {
            self.unlink(end, start);
        }

        true
    }

    fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    fn num_edges(&self) -> usize {
        self.num_edges
    }

    fn nodes<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.adjacency.keys()
    }

    fn edges(&self) -> Vec<Edge<V, L>> {
        self.adjacency
            .iter()
            .flat_map(|(start, targets)| {
                targets
                    .iter()
                    .map(move |(end, label)| Edge::new(start.clone(), end.clone(), label.clone()))
            })
            .collect()
    }

    fn neighbours<'a>(&'a self, node: &V) -> Result<impl Iterator<Item = &'a V>, GraphError>
    where
        V: 'a,
    {
        let targets = self.adjacency.get(node).ok_or(GraphError::NodeNotFound)?;
        Ok(targets.keys())
    }

    fn label(&self, start: &V, end: &V) -> Result<Option<&L>, GraphError> {
        if !self.labelled {
            return Err(GraphError::Unlabelled);
        }

        Ok(self
            .adjacency
            .get(start)
            .and_then(|targets| targets.get(end))
            .and_then(Option::as_ref))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
