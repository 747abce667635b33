//! # Swar Core Library
//!
//! Parsing and scoring of Swar schemas: small line-oriented documents that declare
//! pairwise attraction and repulsion between named nodes. A schema becomes a sparse
//! weighted graph, every node is given a random point in the unit disk, and the layout is
//! scored by an energy that grows when attracting nodes drift apart and shrinks when
//! repelling nodes do.
//!
//! ## Architecture
//!
//! - **[`core`]: The Foundation.** Stateless models (`AdjacencyGraph`, `Placement`),
//!   geometry primitives, the energy functional and schema/layout I/O.
//!
//! - **[`engine`]: The Logic Core.** Evaluation configuration, the `Layout` aggregate and
//!   the error type shared by workflows.
//!
//! - **[`workflows`]: The Public API.** End-to-end evaluation of a schema file or of an
//!   in-memory relation list.
//!
//! Only the energy of a sampled placement is computed; there is no layout optimizer.

pub mod core;
pub mod engine;
pub mod workflows;
