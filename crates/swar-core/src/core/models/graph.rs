use super::ligand::Ligand;
use super::node::{NodeName, NodePair};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;
use tracing::{trace, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node '{0}' cannot be related to itself")]
    SelfRelation(NodeName),
}

/// One `left ligand right` statement after expansion of a schema line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relation {
    pub left: NodeName,
    pub ligand: Ligand,
    pub right: NodeName,
}

impl Relation {
    pub fn new(left: NodeName, ligand: Ligand, right: NodeName) -> Self {
        Self {
            left,
            ligand,
            right,
        }
    }

    pub fn weight(&self) -> f64 {
        self.ligand.weight()
    }
}

/// Raised when a pair that already carries a weight is assigned again.
#[derive(Debug, Clone, PartialEq)]
pub struct Redefinition {
    pub pair: NodePair,
    pub previous: f64,
    pub current: f64,
}

/// Sparse symmetric weighted graph over node names.
///
/// Each unordered pair is stored once under its canonical [`NodePair`]; pairs without a
/// recorded relation read as weight `0.0`. The graph is built by folding relations in and
/// is treated as read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyGraph {
    weights: BTreeMap<NodePair, f64>,
    nodes: BTreeSet<NodeName>,
}

impl AdjacencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from relations in order, returning every redefinition encountered.
    pub fn from_relations<'a>(
        relations: impl IntoIterator<Item = &'a Relation>,
    ) -> Result<(Self, Vec<Redefinition>), GraphError> {
        let mut graph = Self::new();
        let mut redefinitions = Vec::new();
        for relation in relations {
            if let Some(redefinition) = graph.add_relation(
                relation.left.clone(),
                relation.ligand,
                relation.right.clone(),
            )? {
                redefinitions.push(redefinition);
            }
        }
        Ok((graph, redefinitions))
    }

    /// Records `x ligand y`, overwriting any earlier weight for the pair.
    ///
    /// Both names join the node set even when the pair itself is rejected because `x`
    /// and `y` are the same node.
    ///
    /// Reassigning a pair is never fatal; it is logged and reported back to the caller even
    /// when the new weight equals the old one.
    pub fn add_relation(
        &mut self,
        x: NodeName,
        ligand: Ligand,
        y: NodeName,
    ) -> Result<Option<Redefinition>, GraphError> {
        self.nodes.insert(x.clone());
        self.nodes.insert(y.clone());
        if x == y {
            return Err(GraphError::SelfRelation(x));
        }

        let pair = NodePair::new(x, y);
        let current = ligand.weight();
        trace!("Setting weight {} for {}", current, pair);

        let redefinition = self
            .weights
            .insert(pair.clone(), current)
            .map(|previous| Redefinition {
                pair,
                previous,
                current,
            });
        if let Some(r) = &redefinition {
            warn!("Relationship between {} redefined", r.pair);
        }
        Ok(redefinition)
    }

    pub fn get(&self, x: &NodeName, y: &NodeName) -> Option<f64> {
        self.weights
            .get(&NodePair::new(x.clone(), y.clone()))
            .copied()
    }

    /// Weight of the unordered pair `{x, y}`, or `0.0` when no relation was recorded.
    pub fn weight(&self, x: &NodeName, y: &NodeName) -> f64 {
        self.get(x, y).unwrap_or(0.0)
    }

    pub fn pair_weight(&self, pair: &NodePair) -> f64 {
        self.weights.get(pair).copied().unwrap_or(0.0)
    }

    /// All nodes that appear in any relation, in sorted order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &NodeName> + Clone {
        self.nodes.iter()
    }

    pub fn node_set(&self) -> &BTreeSet<NodeName> {
        &self.nodes
    }

    pub fn contains_node(&self, node: &NodeName) -> bool {
        self.nodes.contains(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Stored relations as `(pair, weight)`, one entry per unordered pair.
    pub fn relations(&self) -> impl ExactSizeIterator<Item = (&NodePair, f64)> {
        self.weights.iter().map(|(pair, weight)| (pair, *weight))
    }

    pub fn relation_count(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
