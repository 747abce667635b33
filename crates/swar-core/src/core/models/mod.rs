//! # Core Models Module
//!
//! Data structures describing a Swar schema once it has been read: the ligand
//! vocabulary, node names, the weighted adjacency graph and node placements.
//!
//! ## Key Components
//!
//! - [`ligand`] - The four relation keywords and their signed weights
//! - [`node`] - Case-folded node names and canonical unordered node pairs
//! - [`graph`] - Sparse symmetric adjacency graph built by folding relations
//! - [`placement`] - Node-to-point assignment with normalization and mirroring
//!
//! ## Usage
//!
//! ```ignore
//! use swar::core::models::{graph::AdjacencyGraph, ligand::Ligand, placement::Placement};
//!
//! let mut graph = AdjacencyGraph::new();
//! graph.add_relation("a".into(), Ligand::StrongAttract, "b".into())?;
//!
//! let mut rng = rand::thread_rng();
//! let placement = Placement::random(graph.nodes(), &mut rng);
//! ```

pub mod graph;
pub mod ligand;
pub mod node;
pub mod placement;
