//! A weighted graph of identified nodes and edges, with single-source
//! shortest paths returned as an explicit shortest-path tree.
//!
//! ```
//! use spgraph::Graph;
//!
//! let mut graph = Graph::new("roads");
//! for id in ["A", "B", "C"] {
//!     graph.add_node(id);
//! }
//! graph.add_edge(&"A", &"B").unwrap();
//! graph.add_edge(&"B", &"C").unwrap();
//! graph.set_edge_weight(2.0, &"B", &"C");
//!
//! let tree = graph.shortest_path_tree(&"A").unwrap();
//! assert_eq!(tree.distance(&"C"), Some(3.0));
//! assert_eq!(tree.tree_path_to(&"C"), Some(vec!["A", "B", "C"]));
//! ```
pub mod directedness;
#[cfg(feature = "dot")]
pub mod dot;
pub mod edge;
pub mod error;
pub mod graph;
pub mod node;
pub mod prelude;
pub mod tracing_support;

mod finalized;

pub use directedness::{Directedness, GraphOptions};
pub use edge::{DEFAULT_EDGE_WEIGHT, Edge, EdgeId, EdgeKey};
pub use error::GraphError;
pub use graph::Graph;
pub use node::{Node, NodeId, NodeKey};
