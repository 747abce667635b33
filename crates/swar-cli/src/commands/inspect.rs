use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use swar::core::io::swar::{ParsedSchema, SwarFile};
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    info!("Loading schema from {:?}", &args.input);
    let schema = SwarFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
        path: args.input.clone(),
        source: e.into(),
    })?;
    print!("{}", render(&schema));
    Ok(())
}

/// Formats the node set, every stored weight and all diagnostics of a schema.
pub fn render(schema: &ParsedSchema) -> String {
    let graph = &schema.graph;

    let nodes: Vec<&str> = graph.nodes().map(|n| n.as_str()).collect();
    let mut lines = vec![
        format!("Nodes ({}): {}", nodes.len(), nodes.join(", ")),
        format!("Relations ({}):", graph.relation_count()),
    ];
    lines.extend(graph.relations().map(|(pair, weight)| {
        format!("  {:<12} {:<12} {:+.1}", pair.first(), pair.second(), weight)
    }));

    if !schema.diagnostics.is_empty() {
        lines.push(format!("Diagnostics ({}):", schema.diagnostics.len()));
        lines.extend(schema.diagnostics.iter().map(|d| format!("  {}", d)));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
