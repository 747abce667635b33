use super::traits::LayoutSink;
use crate::core::models::graph::AdjacencyGraph;
use crate::core::models::node::NodeName;
use crate::core::models::placement::Placement;
use serde::Serialize;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct PointRecord<'a> {
    node: &'a NodeName,
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize)]
struct EdgeRecord<'a> {
    source: &'a NodeName,
    target: &'a NodeName,
    weight: f64,
}

/// Writes layouts as two headed CSV tables: `node,x,y` and `source,target,weight`.
pub struct CsvSink;

impl LayoutSink for CsvSink {
    type Error = ExportError;

    fn write_placement(placement: &Placement, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for (node, point) in placement.iter() {
            csv_writer.serialize(PointRecord {
                node,
                x: point.x,
                y: point.y,
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    fn write_edges(graph: &AdjacencyGraph, writer: &mut impl Write) -> Result<(), Self::Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for (pair, weight) in graph.relations() {
            csv_writer.serialize(EdgeRecord {
                source: pair.first(),
                target: pair.second(),
                weight,
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}
