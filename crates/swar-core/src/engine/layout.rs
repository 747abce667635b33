use crate::core::energy::{self, EnergyError};
use crate::core::models::graph::AdjacencyGraph;
use crate::core::models::node::NodeName;
use crate::core::models::placement::Placement;
use rand::Rng;
use tracing::debug;

/// A graph together with a placement of exactly its nodes.
///
/// The graph is fixed once the layout exists; the placement may be normalized or
/// replaced by its mirror image.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    graph: AdjacencyGraph,
    placement: Placement,
}

impl Layout {
    /// Places every node of `graph` at an independent random point in the unit disk.
    pub fn new(graph: AdjacencyGraph, rng: &mut impl Rng) -> Self {
        let placement = Placement::random(graph.nodes(), rng);
        debug!("Sampled initial placement for {} node(s).", placement.len());
        Self { graph, placement }
    }

    pub fn from_parts(graph: AdjacencyGraph, placement: Placement) -> Result<Self, EnergyError> {
        energy::check_domain(&graph, &placement)?;
        Ok(Self { graph, placement })
    }

    pub fn graph(&self) -> &AdjacencyGraph {
        &self.graph
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &NodeName> {
        self.graph.nodes()
    }

    pub fn energy(&self) -> Result<f64, EnergyError> {
        energy::energy(&self.graph, &self.placement)
    }

    pub fn normalize(&mut self) {
        self.placement.normalize();
    }

    pub fn mirrored(&self) -> Self {
        Self {
            graph: self.graph.clone(),
            placement: self.placement.mirror(),
        }
    }

    pub fn into_parts(self) -> (AdjacencyGraph, Placement) {
        (self.graph, self.placement)
    }
}
