use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, HashMap};

/// A vertex in a [`DependencyGraph`]. Source files and reference strings live
/// in separate namespaces, so a reference that happens to spell a source path
/// is still a distinct node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphNode {
    Source(String),
    Reference(String),
}

impl GraphNode {
    pub fn label(&self) -> &str {
        match self {
            GraphNode::Source(label) | GraphNode::Reference(label) => label,
        }
    }
}

/// Directed graph from source files to the raw reference strings they name.
///
/// Edges are unique per (source, reference) pair. Node indices are assigned in
/// insertion order and never removed, so iterating sources yields them in the
/// order they were first seen.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    graph: DiGraph<GraphNode, ()>,
    sources: HashMap<String, NodeIndex>,
    references: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record edges from `source` to every non-empty reference. Does nothing
    /// when there are no references, so sources without dependencies never
    /// appear in the graph.
    pub fn add<I, S>(&mut self, source: &str, references: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut references = references
            .into_iter()
            .filter(|reference| !reference.as_ref().is_empty())
            .peekable();
        if references.peek().is_none() {
            return;
        }

        let source_idx = self.source_index(source);
        for reference in references {
            let target_idx = self.reference_index(reference.as_ref());
            self.graph.update_edge(source_idx, target_idx, ());
        }
    }

    /// Source → sorted reference list, keyed in sorted order.
    pub fn to_sorted_map(&self) -> BTreeMap<String, Vec<String>> {
        self.sources
            .iter()
            .map(|(source, &idx)| (source.clone(), self.sorted_targets(idx)))
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Sorted references recorded for `source`, if it has any.
    pub fn references_of(&self, source: &str) -> Option<Vec<String>> {
        self.sources
            .get(source)
            .map(|&idx| self.sorted_targets(idx))
    }

    /// Out-degree of every source in first-seen order.
    pub fn out_degrees(&self) -> Vec<(&str, usize)> {
        self.graph
            .node_indices()
            .filter_map(|idx| match &self.graph[idx] {
                GraphNode::Source(label) => Some((
                    label.as_str(),
                    self.graph.neighbors_directed(idx, Direction::Outgoing).count(),
                )),
                GraphNode::Reference(_) => None,
            })
            .collect()
    }

    fn sorted_targets(&self, idx: NodeIndex) -> Vec<String> {
        let mut targets: Vec<String> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|target| self.graph[target].label().to_string())
            .collect();
        targets.sort();
        targets
    }

    fn source_index(&mut self, source: &str) -> NodeIndex {
        if let Some(&idx) = self.sources.get(source) {
            return idx;
        }
        let idx = self.graph.add_node(GraphNode::Source(source.to_string()));
        self.sources.insert(source.to_string(), idx);
        idx
    }

    fn reference_index(&mut self, reference: &str) -> NodeIndex {
        if let Some(&idx) = self.references.get(reference) {
            return idx;
        }
        let idx = self
            .graph
            .add_node(GraphNode::Reference(reference.to_string()));
        self.references.insert(reference.to_string(), idx);
        idx
    }
}

impl Serialize for DependencyGraph {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        self.to_sorted_map().serialize(serializer)
    }
}
