use crate::core::models::graph::AdjacencyGraph;
use crate::core::models::node::NodeName;
use crate::core::models::placement::{PairDistance, Placement};
use thiserror::Error;
use tracing::instrument;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnergyError {
    #[error("Node '{0}' is referenced by the graph but has no point in the placement")]
    MissingNode(NodeName),
    #[error("Node '{0}' has a point in the placement but is not part of the graph")]
    UnexpectedNode(NodeName),
}

/// Checks that the placement covers exactly the graph's node set.
pub fn check_domain(graph: &AdjacencyGraph, placement: &Placement) -> Result<(), EnergyError> {
    if let Some(missing) = graph.nodes().find(|node| !placement.contains(node)) {
        return Err(EnergyError::MissingNode(missing.clone()));
    }
    if let Some(extra) = placement.nodes().find(|node| !graph.contains_node(node)) {
        return Err(EnergyError::UnexpectedNode(extra.clone()));
    }
    Ok(())
}

/// Sums `weight(u, v) * distance(u, v)` over every unordered node pair of the placement.
///
/// Attracting pairs (positive weight) raise the energy as they move apart, repelling pairs
/// lower it. Pairs without a relation contribute nothing.
#[instrument(level = "debug", skip_all, fields(nodes = placement.len()))]
pub fn energy(graph: &AdjacencyGraph, placement: &Placement) -> Result<f64, EnergyError> {
    check_domain(graph, placement)?;

    let table = placement.distance_table();
    let contribution = |d: &PairDistance<'_>| graph.weight(d.u, d.v) * d.distance;

    #[cfg(not(feature = "parallel"))]
    let total = table.iter().map(contribution).sum();

    #[cfg(feature = "parallel")]
    let total = table.par_iter().map(contribution).sum();

    Ok(total)
}
