use std::fmt;
use std::hash::{Hash, Hasher};

/// A directed connection between two nodes, optionally carrying a label.
///
/// Two edges are equal when they join the same nodes in the same direction. The label does
/// not take part in equality or hashing.
#[derive(Debug, Clone)]
pub struct Edge<V, L> {
    pub start: V,
    pub end: V,
    pub label: Option<L>,
}

impl<V, L> Edge<V, L> {
    pub fn new(start: V, end: V, label: Option<L>) -> Self {
        Self { start, end, label }
    }

    pub fn label(&self) -> Option<&L> {
        self.label.as_ref()
    }
}

impl<V: PartialEq, L> PartialEq for Edge<V, L> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }
}

impl<V: Eq, L> Eq for Edge<V, L> {}

impl<V: Hash, L> Hash for Edge<V, L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
    }
}

impl<V: fmt::Display, L: fmt::Display> fmt::Display for Edge<V, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "[{}]--({})--[{}]", self.start, label, self.end),
            None => write!(f, "[{}]----[{}]", self.start, self.end),
        }
    }
}
