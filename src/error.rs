use std::fmt::{Debug, Display};

/// Errors reported by structural operations and shortest-path searches.
///
/// Both variants are raised before the graph is modified.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError<K: Debug + Display> {
    /// An edge was requested between identifiers that are not both nodes of
    /// the graph.  Nodes must be added before the edges that join them.
    #[error("cannot add edge {edge_source} -> {edge_target}: both endpoints must be added first")]
    MissingEndpoint { edge_source: K, edge_target: K },
    /// A search was started from an identifier that is not a node of the
    /// graph.
    #[error("node {0} not found")]
    NodeNotFound(K),
}
