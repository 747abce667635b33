//! # Workflows Module
//!
//! Top-level entry points that run a complete evaluation: read a schema, build its
//! adjacency graph, sample a placement, apply the configured transforms and score it.
//!
//! - **Evaluation Workflow** ([`evaluate`]) - Energy of one random placement of a schema

pub mod evaluate;
