use crate::core::models::graph::AdjacencyGraph;
use crate::core::models::placement::Placement;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the boundary to whatever consumes a finished layout (a renderer, a plotting
/// script, another tool).
///
/// Implementors receive the node placement and the weighted graph and serialize whatever
/// subset of them their format needs.
pub trait LayoutSink {
    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes the node placement to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    fn write_placement(placement: &Placement, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes the weighted relations of a graph to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the underlying writer fails.
    fn write_edges(graph: &AdjacencyGraph, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Writes the node placement to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_placement_to_path<P: AsRef<Path>>(
        placement: &Placement,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_placement(placement, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Writes the weighted relations of a graph to a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_edges_to_path<P: AsRef<Path>>(
        graph: &AdjacencyGraph,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_edges(graph, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
