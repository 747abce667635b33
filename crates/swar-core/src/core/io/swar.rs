use crate::core::models::graph::{AdjacencyGraph, GraphError, Redefinition, Relation};
use crate::core::models::ligand::Ligand;
use crate::core::models::node::NodeName;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, instrument, warn};

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Failed to read schema '{source_name}': {source}")]
    Io {
        source_name: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("no ligand keyword found")]
    NoLigand,
    #[error("expected exactly one ligand keyword, found {0}")]
    MultipleLigands(usize),
    #[error("ligand '{0}' has no nodes on either side")]
    BareLigand(Ligand),
    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// A recoverable problem found while reading a schema. Parsing always continues past it.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The line is not a valid relation statement and was skipped.
    SyntaxError {
        source_name: String,
        line: usize,
        content: String,
        kind: SyntaxErrorKind,
    },
    /// The same node appears on both sides of a ligand; that pairing was dropped.
    SelfRelation {
        source_name: String,
        line: usize,
        node: NodeName,
    },
    /// A pair received a second weight; the newer one was kept.
    Redefinition(Redefinition),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SyntaxError {
                source_name,
                line,
                content,
                kind,
            } => write!(
                f,
                "Syntax error in '{}' at line {}: {} in '{}'",
                source_name, line, kind, content
            ),
            Diagnostic::SelfRelation {
                source_name,
                line,
                node,
            } => write!(
                f,
                "Ignored self relation of '{}' in '{}' at line {}",
                node, source_name, line
            ),
            Diagnostic::Redefinition(r) => write!(
                f,
                "Relationship between {} redefined ({} -> {})",
                r.pair, r.previous, r.current
            ),
        }
    }
}

/// Outcome of reading a schema: the expanded relations in source order, the graph they
/// fold into, and everything that was skipped or overwritten on the way.
#[derive(Debug, Clone, Default)]
pub struct ParsedSchema {
    pub relations: Vec<Relation>,
    pub graph: AdjacencyGraph,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedSchema {
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &NodeName> + Clone {
        self.graph.nodes()
    }

    pub fn syntax_error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::SyntaxError { .. }))
            .count()
    }

    pub fn redefinition_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::Redefinition(_)))
            .count()
    }
}

/// Result of classifying a single schema line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Blank,
    Relations(Vec<Relation>),
    SyntaxError(SyntaxErrorKind),
}

/// Splits a case-folded line and expands its single ligand into the cross product of the
/// tokens on either side.
///
/// A ligand with tokens on only one side is valid and expands to no relations. A ligand
/// standing alone on its line is rejected.
///
/// Pairs where one token appears on both sides are left in the result; the caller decides
/// how to treat them.
pub fn parse_line(line: &str) -> LineOutcome {
    let folded = line.trim().to_lowercase();
    if folded.is_empty() {
        return LineOutcome::Blank;
    }
    let tokens: Vec<&str> = folded.split_whitespace().collect();

    let ligands: Vec<(usize, Ligand)> = tokens
        .iter()
        .enumerate()
        .filter_map(|(i, token)| Ligand::from_token(token).map(|l| (i, l)))
        .collect();
    let (index, ligand) = match ligands.as_slice() {
        [] => return LineOutcome::SyntaxError(SyntaxErrorKind::NoLigand),
        [single] => *single,
        many => return LineOutcome::SyntaxError(SyntaxErrorKind::MultipleLigands(many.len())),
    };

    let (left, rest) = tokens.split_at(index);
    let right = &rest[1..];
    if left.is_empty() && right.is_empty() {
        return LineOutcome::SyntaxError(SyntaxErrorKind::BareLigand(ligand));
    }
    let relations = left
        .iter()
        .flat_map(|l| {
            right
                .iter()
                .map(move |r| Relation::new(NodeName::new(l), ligand, NodeName::new(r)))
        })
        .collect();
    LineOutcome::Relations(relations)
}

/// Reader for the line-oriented Swar schema markup.
///
/// Every non-blank line must contain exactly one of the ligands `sa`, `wa`, `sr`, `wr`
/// (case-insensitive). Tokens before the ligand are related to every token after it with
/// the ligand's weight. Lines that break this rule are reported and skipped.
pub struct SwarFile;

impl SwarFile {
    #[instrument(skip_all, fields(source = source_name))]
    pub fn read_from(
        reader: &mut impl BufRead,
        source_name: &str,
    ) -> Result<ParsedSchema, SchemaError> {
        let mut schema = ParsedSchema::default();

        for (line_idx, bytes_res) in reader.split(b'\n').enumerate() {
            let bytes = bytes_res.map_err(|source| SchemaError::Io {
                source_name: source_name.to_string(),
                source,
            })?;
            let line_num = line_idx + 1;

            let line = match String::from_utf8(bytes) {
                Ok(line) => line,
                Err(e) => {
                    let content = String::from_utf8_lossy(e.as_bytes()).trim().to_string();
                    Self::report_syntax_error(
                        &mut schema,
                        source_name,
                        line_num,
                        content,
                        SyntaxErrorKind::InvalidUtf8,
                    );
                    continue;
                }
            };

            match parse_line(&line) {
                LineOutcome::Blank => continue,
                LineOutcome::SyntaxError(kind) => {
                    Self::report_syntax_error(
                        &mut schema,
                        source_name,
                        line_num,
                        line.trim().to_string(),
                        kind,
                    );
                }
                LineOutcome::Relations(relations) => {
                    for relation in relations {
                        Self::fold_relation(&mut schema, relation, source_name, line_num);
                    }
                }
            }
        }

        debug!(
            "Parsed {} relation(s) over {} node(s) with {} diagnostic(s).",
            schema.relations.len(),
            schema.graph.node_count(),
            schema.diagnostics.len()
        );
        Ok(schema)
    }

    pub fn read_from_str(content: &str, source_name: &str) -> Result<ParsedSchema, SchemaError> {
        Self::read_from(&mut content.as_bytes(), source_name)
    }

    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<ParsedSchema, SchemaError> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|source| SchemaError::Io {
            source_name: source_name.clone(),
            source,
        })?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader, &source_name)
    }

    fn report_syntax_error(
        schema: &mut ParsedSchema,
        source_name: &str,
        line_num: usize,
        content: String,
        kind: SyntaxErrorKind,
    ) {
        warn!(
            "Syntax error in '{}' at line {}: {} in '{}'",
            source_name, line_num, kind, content
        );
        schema.diagnostics.push(Diagnostic::SyntaxError {
            source_name: source_name.to_string(),
            line: line_num,
            content,
            kind,
        });
    }

    fn fold_relation(
        schema: &mut ParsedSchema,
        relation: Relation,
        source_name: &str,
        line_num: usize,
    ) {
        match schema.graph.add_relation(
            relation.left.clone(),
            relation.ligand,
            relation.right.clone(),
        ) {
            Ok(Some(redefinition)) => schema
                .diagnostics
                .push(Diagnostic::Redefinition(redefinition)),
            Ok(None) => {}
            Err(GraphError::SelfRelation(node)) => {
                warn!(
                    "Ignoring self relation of '{}' in '{}' at line {}",
                    node, source_name, line_num
                );
                schema.diagnostics.push(Diagnostic::SelfRelation {
                    source_name: source_name.to_string(),
                    line: line_num,
                    node,
                });
                return;
            }
        }
        schema.relations.push(relation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn n(name: &str) -> NodeName {
        NodeName::new(name)
    }

    fn parse(content: &str) -> ParsedSchema {
        SwarFile::read_from_str(content, "test.swar").unwrap()
    }

    #[test]
    fn simple_schema_builds_expected_graph() {
        let schema = parse("a sa b\nb wr c\n");
        let nodes: Vec<&str> = schema.nodes().map(NodeName::as_str).collect();
        assert_eq!(nodes, ["a", "b", "c"]);
        assert_eq!(schema.graph.weight(&n("a"), &n("b")), 2.0);
        assert_eq!(schema.graph.weight(&n("b"), &n("c")), -1.0);
        assert_eq!(schema.graph.weight(&n("a"), &n("c")), 0.0);
        assert!(schema.diagnostics.is_empty());
    }

    #[test]
    fn line_expands_to_full_cross_product_in_order() {
        let LineOutcome::Relations(relations) = parse_line("x y wa p q r") else {
            panic!("expected relations");
        };
        let rendered: Vec<(String, String)> = relations
            .iter()
            .map(|r| (r.left.to_string(), r.right.to_string()))
            .collect();
        let expected: Vec<(String, String)> = [
            ("x", "p"),
            ("x", "q"),
            ("x", "r"),
            ("y", "p"),
            ("y", "q"),
            ("y", "r"),
        ]
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect();
        assert_eq!(rendered, expected);
        assert!(relations.iter().all(|r| r.ligand == Ligand::WeakAttract));
    }

    #[test]
    fn ligand_matching_is_case_insensitive_and_names_are_folded() {
        let schema = parse("Alpha SR BETA\n");
        assert_eq!(schema.graph.weight(&n("alpha"), &n("beta")), -2.0);
        assert_eq!(schema.relations[0].left.as_str(), "alpha");
    }

    #[test]
    fn one_sided_ligand_line_yields_no_relations_and_no_diagnostics() {
        assert_eq!(parse_line("a wa"), LineOutcome::Relations(vec![]));
        assert_eq!(parse_line("wr b"), LineOutcome::Relations(vec![]));

        let schema = parse("a sa\nsa b\nx wa y\n");
        assert_eq!(schema.syntax_error_count(), 0);
        assert!(schema.diagnostics.is_empty());
        assert_eq!(schema.relations.len(), 1);
        let nodes: Vec<&str> = schema.nodes().map(NodeName::as_str).collect();
        assert_eq!(nodes, ["x", "y"]);
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_parsing_continues() {
        let mut input: &[u8] = b"a sa b\n\xff\xfe bad\nc wr d\n";
        let schema = SwarFile::read_from(&mut input, "bytes.swar").unwrap();
        assert_eq!(schema.relations.len(), 2);
        assert_eq!(schema.diagnostics.len(), 1);
        match &schema.diagnostics[0] {
            Diagnostic::SyntaxError { line, content, kind, .. } => {
                assert_eq!(*line, 2);
                assert!(content.ends_with("bad"));
                assert_eq!(*kind, SyntaxErrorKind::InvalidUtf8);
            }
            other => panic!("unexpected diagnostic: {:?}", other),
        }
        assert_eq!(schema.graph.weight(&n("a"), &n("b")), 2.0);
        assert_eq!(schema.graph.weight(&n("c"), &n("d")), -1.0);
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let schema = parse("a sa b\r\nb wr c\r\n");
        assert!(schema.diagnostics.is_empty());
        assert_eq!(schema.relations.len(), 2);
    }

    #[test]
    fn bare_ligand_line_emits_no_relations_and_one_syntax_error() {
        let schema = parse("sa\n");
        assert!(schema.relations.is_empty());
        assert!(schema.graph.is_empty());
        assert_eq!(schema.syntax_error_count(), 1);
        assert!(matches!(
            schema.diagnostics[0],
            Diagnostic::SyntaxError {
                kind: SyntaxErrorKind::BareLigand(Ligand::StrongAttract),
                ..
            }
        ));
    }

    #[test]
    fn line_without_ligand_is_a_syntax_error() {
        let schema = parse("a b c\nd sa e\n");
        assert_eq!(schema.syntax_error_count(), 1);
        assert_eq!(schema.relations.len(), 1);
        match &schema.diagnostics[0] {
            Diagnostic::SyntaxError {
                source_name,
                line,
                content,
                kind,
            } => {
                assert_eq!(source_name, "test.swar");
                assert_eq!(*line, 1);
                assert_eq!(content, "a b c");
                assert_eq!(*kind, SyntaxErrorKind::NoLigand);
            }
            other => panic!("unexpected diagnostic: {:?}", other),
        }
    }

    #[test]
    fn line_with_two_ligands_is_skipped_and_parsing_continues() {
        let schema = parse("a sa b wr c\nc wa d\n");
        assert_eq!(schema.syntax_error_count(), 1);
        assert!(matches!(
            schema.diagnostics[0],
            Diagnostic::SyntaxError {
                kind: SyntaxErrorKind::MultipleLigands(2),
                line: 1,
                ..
            }
        ));
        assert_eq!(schema.graph.weight(&n("c"), &n("d")), 1.0);
        assert!(!schema.graph.contains_node(&n("a")));
    }

    #[test]
    fn blank_lines_are_skipped_silently() {
        let schema = parse("\n   \na sa b\n\t\n");
        assert!(schema.diagnostics.is_empty());
        assert_eq!(schema.relations.len(), 1);
    }

    #[test]
    fn redefinition_is_reported_and_newest_weight_wins() {
        let schema = parse("a sa b\nb sr a\n");
        assert_eq!(schema.redefinition_count(), 1);
        assert_eq!(schema.graph.weight(&n("a"), &n("b")), -2.0);
        assert_eq!(schema.relations.len(), 2);
    }

    #[test]
    fn self_relation_is_dropped_with_diagnostic() {
        let schema = parse("a b sa b c\n");
        assert!(matches!(
            &schema.diagnostics[..],
            [Diagnostic::SelfRelation { line: 1, .. }]
        ));
        assert_eq!(schema.relations.len(), 3);
        assert_eq!(schema.graph.weight(&n("a"), &n("b")), 2.0);
        assert_eq!(schema.graph.weight(&n("b"), &n("c")), 2.0);
    }

    #[test]
    fn self_only_line_keeps_its_node() {
        let schema = parse("a sa a\n");
        assert!(schema.relations.is_empty());
        let nodes: Vec<&str> = schema.nodes().map(NodeName::as_str).collect();
        assert_eq!(nodes, ["a"]);
        assert_eq!(schema.graph.relation_count(), 0);
        assert!(matches!(
            &schema.diagnostics[..],
            [Diagnostic::SelfRelation { line: 1, .. }]
        ));
    }

    #[test]
    fn empty_input_produces_empty_schema() {
        let schema = parse("");
        assert!(schema.relations.is_empty());
        assert_eq!(schema.nodes().len(), 0);
    }

    #[test]
    fn read_from_path_uses_path_as_source_name() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "a sa b").unwrap();
        writeln!(file, "oops").unwrap();
        let schema = SwarFile::read_from_path(file.path()).unwrap();
        assert_eq!(schema.relations.len(), 1);
        match &schema.diagnostics[0] {
            Diagnostic::SyntaxError { source_name, .. } => {
                assert_eq!(source_name, &file.path().display().to_string());
            }
            other => panic!("unexpected diagnostic: {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = SwarFile::read_from_path(dir.path().join("absent.swar"));
        assert!(matches!(result, Err(SchemaError::Io { .. })));
    }

    #[test]
    fn diagnostics_render_human_readable_messages() {
        let schema = parse("nothing here\n");
        let message = schema.diagnostics[0].to_string();
        assert!(message.contains("test.swar"));
        assert!(message.contains("nothing here"));
    }
}
