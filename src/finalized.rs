#[cfg(feature = "bitvec")]
use bitvec::vec::BitVec;

use crate::node::NodeId;

/// The nodes a shortest-path search has settled, both as a membership set
/// indexed by arena position and as the sequence they were settled in.
///
/// The sequence is drained last-settled first, which visits every node
/// before its parent.
pub(crate) struct Finalized {
    #[cfg(feature = "bitvec")]
    members: BitVec,
    #[cfg(not(feature = "bitvec"))]
    members: Vec<bool>,
    order: Vec<NodeId>,
}

impl Finalized {
    pub fn with_capacity(num_nodes: usize) -> Self {
        Finalized {
            #[cfg(feature = "bitvec")]
            members: BitVec::repeat(false, num_nodes),
            #[cfg(not(feature = "bitvec"))]
            members: vec![false; num_nodes],
            order: Vec::new(),
        }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.members[node.index()]
    }

    /// Marks `node` as settled.  Returns false if it already was.
    pub fn insert(&mut self, node: NodeId) -> bool {
        if self.contains(node) {
            return false;
        }
        #[cfg(feature = "bitvec")]
        self.members.set(node.index(), true);
        #[cfg(not(feature = "bitvec"))]
        {
            self.members[node.index()] = true;
        }
        self.order.push(node);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Removes and returns the most recently settled node.  Membership is
    /// kept, so a popped node still counts as settled.
    pub fn pop(&mut self) -> Option<NodeId> {
        self.order.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut finalized = Finalized::with_capacity(4);
        assert!(!finalized.contains(NodeId::new(2)));
        assert!(finalized.insert(NodeId::new(2)));
        assert!(!finalized.insert(NodeId::new(2)));
        assert!(finalized.contains(NodeId::new(2)));
        assert_eq!(finalized.len(), 1);
    }

    #[test]
    fn test_pop_is_last_in_first_out() {
        let mut finalized = Finalized::with_capacity(3);
        finalized.insert(NodeId::new(0));
        finalized.insert(NodeId::new(2));
        finalized.insert(NodeId::new(1));
        assert_eq!(finalized.pop(), Some(NodeId::new(1)));
        assert_eq!(finalized.pop(), Some(NodeId::new(2)));
        assert_eq!(finalized.pop(), Some(NodeId::new(0)));
        assert_eq!(finalized.pop(), None);
        assert!(finalized.contains(NodeId::new(1)));
    }
}
