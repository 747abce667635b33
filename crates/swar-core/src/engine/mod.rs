//! # Engine Module
//!
//! Stateful pieces that sit between the stateless [`crate::core`] models and the
//! end-to-end [`crate::workflows`].
//!
//! - **Configuration** ([`config`]) - Seed source and placement transforms for an evaluation
//! - **Layouts** ([`layout`]) - A graph bundled with a placement of exactly its nodes
//! - **Error Handling** ([`error`]) - Aggregated error type returned by workflows

pub mod config;
pub mod error;
pub mod layout;
