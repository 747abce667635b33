//! # Core Module
//!
//! Stateless building blocks of the Swar layout scheme: models, geometry, the energy
//! functional and file I/O.
//!
//! ## Architecture
//!
//! - **Models** ([`models`]) - Ligands, node names, adjacency graphs and placements
//! - **Geometry** ([`utils`]) - Vector norms, distances, unit-disk sampling, polar midpoints
//! - **Energy** ([`energy`]) - Weighted sum of pairwise distances for a placement
//! - **File I/O** ([`io`]) - Schema parsing and layout export
//!
//! Nothing in this module owns a random generator. Code that samples points takes one
//! as an argument, which keeps every computation reproducible under a fixed seed.

pub mod energy;
pub mod io;
pub mod models;
pub mod utils;
