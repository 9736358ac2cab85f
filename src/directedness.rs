/// Whether a graph distinguishes `a -> b` from `b -> a`.
///
/// In an undirected graph both orientations name the same edge, so only one
/// of them can be inserted.  Directedness only affects edge identity: the
/// shortest-path search walks every edge in both directions.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directedness {
    Directed,
    #[default]
    Undirected,
}

impl Directedness {
    pub fn is_directed(&self) -> bool {
        match self {
            Directedness::Directed => true,
            Directedness::Undirected => false,
        }
    }
}

/// Structural policy a [`Graph`](crate::Graph) enforces on edge insertion.
///
/// The default is an undirected graph that rejects self-loops.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct GraphOptions {
    pub directedness: Directedness,
    pub allow_self_loops: bool,
}

impl GraphOptions {
    pub fn directed() -> Self {
        GraphOptions {
            directedness: Directedness::Directed,
            ..Default::default()
        }
    }

    pub fn undirected() -> Self {
        Self::default()
    }

    pub fn with_self_loops(self, allow_self_loops: bool) -> Self {
        GraphOptions {
            allow_self_loops,
            ..self
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = GraphOptions::default();
        assert!(!options.is_directed());
        assert!(!options.allow_self_loops);
        assert_eq!(options, GraphOptions::undirected());
    }

    #[test]
    fn test_builders() {
        let options = GraphOptions::directed().with_self_loops(true);
        assert!(options.is_directed());
        assert!(options.allow_self_loops);
    }
}
