//! Export of a finished graph in the Graphviz DOT language.
//!
//! Two layouts are available.  [`GvStyle::Plain`] declares every node and
//! every edge by identifier only.  [`GvStyle::Labeled`] prefixes node names
//! with `nodo_`, labels each node with its distance and gives each edge a
//! `weight` attribute, which makes shortest-path trees readable once
//! rendered.  Either way the output has one declaration line per node,
//! then one per edge, in insertion order.
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{Graph, node::NodeKey, tracing_support::info};

/// Errors that can occur while saving a `.gv` file.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Layout of the exported text.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum GvStyle {
    #[default]
    Plain,
    Labeled,
}

/// Quotes `text` as a DOT string literal.
fn quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

fn labeled_name<K: NodeKey>(id: &K) -> String {
    format!("nodo_{id}")
}

/// Writes `graph` as a DOT digraph in the given style.
pub fn write_gv<K: NodeKey>(
    graph: &Graph<K>,
    style: GvStyle,
    output: &mut impl Write,
) -> io::Result<()> {
    writeln!(output, "digraph {} {{", quoted(graph.id()))?;

    for node in graph.nodes() {
        match style {
            GvStyle::Plain => writeln!(output, "{};", quoted(&node.id().to_string()))?,
            GvStyle::Labeled => {
                let name = labeled_name(node.id());
                let label = format!("{name} ({})", node.distance());
                writeln!(output, "{} [label={}];", quoted(&name), quoted(&label))?;
            }
        }
    }

    for edge in graph.edges() {
        let source = graph.node_at(edge.source()).id();
        let target = graph.node_at(edge.target()).id();
        match style {
            GvStyle::Plain => writeln!(
                output,
                "{} -> {};",
                quoted(&source.to_string()),
                quoted(&target.to_string())
            )?,
            GvStyle::Labeled => writeln!(
                output,
                "{} -> {} [weight={}];",
                quoted(&labeled_name(source)),
                quoted(&labeled_name(target)),
                quoted(&edge.weight().to_string())
            )?,
        }
    }

    write!(output, "}}")
}

/// Renders `graph` to a string.
pub fn to_gv_string<K: NodeKey>(graph: &Graph<K>, style: GvStyle) -> String {
    let mut buffer = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_gv(graph, style, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Saves `graph` as `<dir>/<graph id>.gv` and returns the path written.
pub fn save_gv<K: NodeKey>(
    graph: &Graph<K>,
    dir: impl AsRef<Path>,
    style: GvStyle,
) -> Result<PathBuf, ExportError> {
    let path = dir.as_ref().join(format!("{}.gv", graph.id()));
    let to_export_error = |source: io::Error| ExportError::Io {
        path: path.clone(),
        source,
    };
    let file = File::create(&path).map_err(to_export_error)?;
    let mut output = BufWriter::new(file);
    write_gv(graph, style, &mut output).map_err(to_export_error)?;
    output.flush().map_err(to_export_error)?;
    info!(path = %path.display(), "graph exported");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> Graph<&'static str> {
        let mut graph = Graph::new("g");
        graph.add_node("a");
        graph.add_node("b");
        graph.add_node("c");
        graph.add_edge(&"a", &"b").unwrap();
        graph.add_edge(&"b", &"c").unwrap();
        graph.set_edge_weight(2.5, &"b", &"c");
        graph
    }

    #[test]
    fn test_quoted_escapes() {
        assert_eq!(quoted("plain"), "\"plain\"");
        assert_eq!(quoted("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }

    #[test]
    fn test_plain_layout() {
        let text = to_gv_string(&path_graph(), GvStyle::Plain);
        assert_eq!(
            text,
            "digraph \"g\" {\n\"a\";\n\"b\";\n\"c\";\n\"a\" -> \"b\";\n\"b\" -> \"c\";\n}"
        );
    }

    #[test]
    fn test_labeled_layout() {
        let mut graph = path_graph();
        let tree = graph.shortest_path_tree(&"a").unwrap();
        let text = to_gv_string(&tree, GvStyle::Labeled);
        assert!(text.starts_with("digraph \"g_Dijkstra_nodeSource_a\" {\n"));
        assert!(text.contains("\"nodo_a\" [label=\"nodo_a (0)\"];\n"));
        assert!(text.contains("\"nodo_c\" [label=\"nodo_c (3.5)\"];\n"));
        assert!(text.contains("\"nodo_b\" -> \"nodo_c\" [weight=\"2.5\"];\n"));
        assert!(text.ends_with('}'));
    }

    #[test]
    fn test_labeled_unreached_distance() {
        let text = to_gv_string(&path_graph(), GvStyle::Labeled);
        assert!(text.contains("\"nodo_a\" [label=\"nodo_a (inf)\"];\n"));
    }

    #[test]
    fn test_one_line_per_declaration() {
        let text = to_gv_string(&path_graph(), GvStyle::Labeled);
        // Header, three nodes, two edges, closing brace.
        assert_eq!(text.lines().count(), 7);
    }
}
