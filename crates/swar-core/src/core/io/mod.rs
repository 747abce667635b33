//! Reading schema markup and exporting finished layouts.
//!
//! [`swar`] parses the line-oriented Swar schema format into relations and an
//! adjacency graph, collecting recoverable diagnostics along the way. [`traits`] defines
//! the [`traits::LayoutSink`] boundary towards renderers, and [`csv`] provides the
//! CSV implementation of it.

pub mod csv;
pub mod swar;
pub mod traits;
