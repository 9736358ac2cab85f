#![allow(dead_code)]

use quickcheck::{Arbitrary, Gen};
use spgraph::prelude::*;

/// A random graph description: node identifiers are `0..num_nodes`, edges
/// are inserted in order and each successful insertion gets its weight.
#[derive(Clone, Debug)]
pub struct Recipe {
    pub num_nodes: u32,
    pub edges: Vec<(u32, u32, u8)>,
    pub options: GraphOptions,
}

impl Arbitrary for Recipe {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_nodes = u32::from(u8::arbitrary(g) % 12) + 1;
        let num_edges = usize::arbitrary(g) % 40;
        let edges = (0..num_edges)
            .map(|_| {
                (
                    u32::arbitrary(g) % num_nodes,
                    u32::arbitrary(g) % num_nodes,
                    u8::arbitrary(g) % 16,
                )
            })
            .collect();
        let directedness = if bool::arbitrary(g) {
            Directedness::Directed
        } else {
            Directedness::Undirected
        };
        Recipe {
            num_nodes,
            edges,
            options: GraphOptions {
                directedness,
                allow_self_loops: bool::arbitrary(g),
            },
        }
    }
}

impl Recipe {
    pub fn build(&self) -> Graph<u32> {
        let mut graph = Graph::with_options("random", self.options);
        for id in 0..self.num_nodes {
            graph.add_node(id);
        }
        for &(source, target, weight) in &self.edges {
            if graph
                .add_edge(&source, &target)
                .expect("endpoints were added")
                .is_some()
            {
                graph.set_edge_weight(f64::from(weight), &source, &target);
            }
        }
        graph
    }

    pub fn source(&self, seed: u32) -> u32 {
        seed % self.num_nodes
    }
}
