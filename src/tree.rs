//! Prefix-tree reconstruction for decoding
//!
//! A decode tree is rebuilt from the InfoByte at the start of each payload
//! segment and dropped when the segment is done. Nodes live in a small
//! arena indexed by position; the root is node 0. A tree for the largest
//! shape holds nine nodes, so construction is a handful of pushes.

use crate::nuc::Nucleotide;
use crate::topology::Topology;

/// Index of a node within a [`DecodeTree`] arena.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, Default)]
struct TreeNode {
    zero: Option<NodeId>,
    one: Option<NodeId>,
    symbol: Option<Nucleotide>,
}

/// The decoding tree of one topology: internal nodes have two children,
/// leaves carry the decoded symbol.
#[derive(Debug)]
pub struct DecodeTree {
    nodes: Vec<TreeNode>,
}

impl DecodeTree {
    /// Build the tree for `topology` by walking each symbol's code word from
    /// the root, materializing internal nodes along the way. Single-symbol
    /// topologies yield a bare root; their segments are decoded without
    /// tree walking.
    pub fn build(topology: Topology) -> Self {
        let mut tree = Self {
            nodes: vec![TreeNode::default()],
        };
        let slots = topology.shape().slots();
        for (slot, &symbol) in topology.symbols().iter().enumerate() {
            let code = slots[slot];
            if code.is_empty() {
                continue;
            }
            let mut node = Self::ROOT;
            for idx in 0..code.len() {
                node = tree.child_or_insert(node, code.bit(idx));
            }
            tree.nodes[node].symbol = Some(symbol);
        }
        tree
    }

    /// The root node id.
    pub const ROOT: NodeId = 0;

    /// Follow one payload bit: `true` descends to the "one" child.
    #[inline]
    pub fn step(&self, node: NodeId, bit: bool) -> Option<NodeId> {
        let node = &self.nodes[node];
        if bit {
            node.one
        } else {
            node.zero
        }
    }

    /// The symbol at `node`, if it is a leaf.
    #[inline]
    pub fn symbol(&self, node: NodeId) -> Option<Nucleotide> {
        self.nodes[node].symbol
    }

    fn child_or_insert(&mut self, node: NodeId, bit: bool) -> NodeId {
        let existing = if bit {
            self.nodes[node].one
        } else {
            self.nodes[node].zero
        };
        if let Some(child) = existing {
            return child;
        }
        let child = self.nodes.len();
        self.nodes.push(TreeNode::default());
        if bit {
            self.nodes[node].one = Some(child);
        } else {
            self.nodes[node].zero = Some(child);
        }
        child
    }
}
