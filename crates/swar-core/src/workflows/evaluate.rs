use crate::core::io::swar::{Diagnostic, ParsedSchema, SwarFile};
use crate::core::models::graph::{AdjacencyGraph, Relation};
use crate::engine::config::{EvaluationConfig, SeedSource};
use crate::engine::error::EngineError;
use crate::engine::layout::Layout;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct EvaluationResult {
    pub layout: Layout,
    pub energy: f64,
    pub relation_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Reads a schema file and scores one random placement of its nodes.
#[instrument(skip_all, name = "evaluate_workflow")]
pub fn run_path(path: &Path, config: &EvaluationConfig) -> Result<EvaluationResult, EngineError> {
    info!("Reading schema from {:?}", path);
    let schema = SwarFile::read_from_path(path)?;
    run(schema, config)
}

/// Scores one random placement of an already parsed schema.
#[instrument(skip_all, name = "evaluate_workflow")]
pub fn run(schema: ParsedSchema, config: &EvaluationConfig) -> Result<EvaluationResult, EngineError> {
    let ParsedSchema {
        relations,
        graph,
        diagnostics,
    } = schema;
    evaluate_graph(graph, relations.len(), diagnostics, config)
}

/// Folds a relation list into a graph and scores one random placement of it.
pub fn run_relations(
    relations: &[Relation],
    config: &EvaluationConfig,
) -> Result<EvaluationResult, EngineError> {
    let (graph, redefinitions) = AdjacencyGraph::from_relations(relations)?;
    let diagnostics = redefinitions
        .into_iter()
        .map(Diagnostic::Redefinition)
        .collect();
    evaluate_graph(graph, relations.len(), diagnostics, config)
}

fn evaluate_graph(
    graph: AdjacencyGraph,
    relation_count: usize,
    diagnostics: Vec<Diagnostic>,
    config: &EvaluationConfig,
) -> Result<EvaluationResult, EngineError> {
    let mut rng = match config.seed {
        SeedSource::Fixed(seed) => StdRng::seed_from_u64(seed),
        SeedSource::Entropy => StdRng::from_entropy(),
    };

    let mut layout = Layout::new(graph, &mut rng);
    if config.transform.normalize {
        layout.normalize();
    }
    if config.transform.mirror {
        layout = layout.mirrored();
    }

    let energy = layout.energy()?;
    info!(
        "Evaluated layout of {} node(s): energy = {:.6}",
        layout.graph().node_count(),
        energy
    );

    Ok(EvaluationResult {
        layout,
        energy,
        relation_count,
        diagnostics,
    })
}
