use crate::cli::EvaluateArgs;
use crate::config::{AppConfig, build_config};
use crate::error::{CliError, Result};
use std::path::Path;
use swar::core::io::csv::{CsvSink, ExportError};
use swar::core::io::swar::SwarFile;
use swar::core::io::traits::LayoutSink;
use swar::workflows::evaluate::{self, EvaluationResult};
use tracing::{info, warn};

pub fn run(args: EvaluateArgs) -> Result<()> {
    info!("Building evaluation configuration...");
    let app_config = build_config(&args)?;

    let result = evaluate_schema(&app_config)?;
    report(&result);
    export(&app_config, &result)?;
    Ok(())
}

pub fn evaluate_schema(app_config: &AppConfig) -> Result<EvaluationResult> {
    info!("Loading schema from {:?}", &app_config.input_path);
    let schema = SwarFile::read_from_path(&app_config.input_path).map_err(|e| {
        CliError::FileParsing {
            path: app_config.input_path.clone(),
            source: e.into(),
        }
    })?;

    let result = evaluate::run(schema, &app_config.core_config)?;
    if !result.diagnostics.is_empty() {
        warn!(
            "Schema produced {} diagnostic(s); see warnings above.",
            result.diagnostics.len()
        );
    }
    Ok(result)
}

fn report(result: &EvaluationResult) {
    println!("Nodes:       {}", result.layout.graph().node_count());
    println!("Relations:   {}", result.relation_count);
    println!("Diagnostics: {}", result.diagnostics.len());
    println!("Energy:      {:.6}", result.energy);
}

fn export(app_config: &AppConfig, result: &EvaluationResult) -> Result<()> {
    if let Some(path) = &app_config.placement_output {
        info!("Writing placement to {:?}", path);
        CsvSink::write_placement_to_path(result.layout.placement(), path)
            .map_err(|e| write_error(path, e))?;
        println!("Placement written to: {}", path.display());
    }
    if let Some(path) = &app_config.edges_output {
        info!("Writing edges to {:?}", path);
        CsvSink::write_edges_to_path(result.layout.graph(), path)
            .map_err(|e| write_error(path, e))?;
        println!("Edges written to: {}", path.display());
    }
    Ok(())
}

fn write_error(path: &Path, source: ExportError) -> CliError {
    CliError::FileWriting {
        path: path.to_path_buf(),
        source: source.into(),
    }
}
