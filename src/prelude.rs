pub use crate::directedness::{Directedness, GraphOptions};
pub use crate::edge::{Edge, EdgeId};
pub use crate::error::GraphError;
pub use crate::graph::Graph;
pub use crate::node::{Node, NodeId, NodeKey};
