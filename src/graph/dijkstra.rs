use std::{cmp::Ordering, collections::BinaryHeap};

use super::Graph;
use crate::{
    directedness::GraphOptions,
    error::GraphError,
    finalized::Finalized,
    node::{NodeId, NodeKey},
    tracing_support::{debug, info_span, trace},
};

/// A candidate on the search frontier.  Ordered so that `BinaryHeap`, a
/// max-heap, pops the smallest distance first; equal distances pop the
/// lower arena index first.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    distance: f64,
    node: NodeId,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<K: NodeKey> Graph<K> {
    /// Computes shortest paths from `source` with Dijkstra's algorithm and
    /// returns them as a new tree-shaped graph.
    ///
    /// The tree is directed, named `"{id}_Dijkstra_nodeSource_{source}"`,
    /// and holds one node per node reachable from `source`.  Each non-source
    /// node has a single incoming edge from its predecessor, weighted with
    /// the weight of the original edge, and carries its shortest distance;
    /// the source carries distance 0.  Unreachable nodes are left out.
    ///
    /// Edges are followed in both directions whatever the graph's
    /// directedness.  Weights are assumed non-negative: a negative weight
    /// reachable from `source` yields unspecified distances rather than an
    /// error.
    ///
    /// The per-node search labels on `self` are reset before returning, so
    /// the graph can be searched again from another source.
    pub fn shortest_path_tree(&mut self, source: &K) -> Result<Graph<K>, GraphError<K>> {
        let Some(root) = self.node_id(source) else {
            return Err(GraphError::NodeNotFound(source.clone()));
        };
        let _span = info_span!("shortest_path_tree", graph = %self.id, source = %source).entered();

        let settled = self.settle_from(root);
        let tree = self.build_tree(source, settled)?;
        debug!(
            tree = %tree.id,
            nodes = tree.total_nodes(),
            edges = tree.total_edges(),
            "shortest path tree built"
        );
        Ok(tree)
    }

    /// Runs the search proper, leaving distance and parent labels on every
    /// reached node.
    fn settle_from(&mut self, root: NodeId) -> Finalized {
        let mut frontier = BinaryHeap::new();
        let mut settled = Finalized::with_capacity(self.nodes.len());

        // A tree returned by an earlier search carries its distances as
        // labels; clear them so they cannot block relaxation.
        for node in &mut self.nodes {
            node.reset();
        }
        self.nodes[root.index()].set_distance(0.0);
        frontier.push(FrontierEntry {
            distance: 0.0,
            node: root,
        });

        while let Some(FrontierEntry { distance, node: u }) = frontier.pop() {
            // Improvements re-insert a node instead of updating its entry, so
            // older entries for it may still be queued.
            if settled.contains(u) || distance > self.nodes[u.index()].distance() {
                trace!(node = %self.nodes[u.index()].id(), distance, "skipping stale entry");
                continue;
            }
            settled.insert(u);
            let u_id = self.nodes[u.index()].id().clone();

            for slot in 0..self.nodes[u.index()].incident_edges().len() {
                let eid = self.nodes[u.index()].incident_edges()[slot];
                let edge = &self.edges[eid.index()];
                let v = edge.other_end(u);
                if settled.contains(v) {
                    continue;
                }
                let weight = edge.weight();
                let candidate = distance + weight;
                let neighbor = &mut self.nodes[v.index()];
                if candidate < neighbor.distance() {
                    trace!(from = %u_id, to = %neighbor.id(), candidate, "relaxed");
                    neighbor.relax(u_id.clone(), candidate, weight);
                    frontier.push(FrontierEntry {
                        distance: candidate,
                        node: v,
                    });
                }
            }
        }

        debug!(graph = %self.id, reached = settled.len(), "search finished");
        settled
    }

    /// Drains the settled nodes, latest first, into a fresh tree graph and
    /// resets each one's labels on `self` as it goes.
    fn build_tree(&mut self, source: &K, mut settled: Finalized) -> Result<Graph<K>, GraphError<K>> {
        let mut tree = Graph::with_options(
            format!("{}_Dijkstra_nodeSource_{}", self.id, source),
            GraphOptions::directed(),
        );

        while let Some(nid) = settled.pop() {
            let node = &self.nodes[nid.index()];
            let id = node.id().clone();
            let distance = node.distance();
            match node.parent().cloned() {
                Some(parent) => {
                    let weight = node.edge_weight_to_parent();
                    let child = tree.add_node(id.clone());
                    tree.nodes[child.index()].set_distance(distance);
                    tree.add_node(parent.clone());
                    tree.add_edge(&parent, &id)?;
                    tree.set_edge_weight(weight, &parent, &id);
                }
                None => {
                    let root = tree.add_node(id);
                    tree.nodes[root.index()].set_distance(0.0);
                }
            }
            self.nodes[nid.index()].reset();
        }

        Ok(tree)
    }

    /// Follows incoming edges from `id` back to a node with none and returns
    /// the identifiers met along the way, root first.
    ///
    /// Meant for graphs returned by
    /// [`shortest_path_tree`](Self::shortest_path_tree), where every node
    /// but the root has exactly one incoming edge.  Returns `None` if there
    /// is no such node, or if the walk comes back to a node it has already
    /// visited.
    pub fn tree_path_to(&self, id: &K) -> Option<Vec<K>> {
        let mut current = self.node_id(id)?;
        let mut path = vec![id.clone()];
        while let Some(parent) = self.nodes[current.index()]
            .incident_edges()
            .iter()
            .map(|&eid| &self.edges[eid.index()])
            .find(|edge| edge.target() == current && edge.source() != current)
            .map(|edge| edge.source())
        {
            if path.len() > self.nodes.len() {
                return None;
            }
            current = parent;
            path.push(self.nodes[current.index()].id().clone());
        }
        path.reverse();
        Some(path)
    }
}
