//! Defines the inner representation
//! of the Decision Tree class.
use serde::{Serialize, Deserialize};

use crate::{Classifier, Sample};


/// The side of a split an example falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LR {
    Left,
    Right,
}


/// A splitting rule `x[feature] < threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(super) struct Splitter {
    pub(super) feature: usize,
    pub(super) threshold: f64,
}


impl Splitter {
    #[inline]
    pub(super) fn new(feature: usize, threshold: f64) -> Self {
        Self { feature, threshold }
    }


    /// Defines the splitting.
    #[inline]
    pub(super) fn split(&self, sample: &Sample, row: usize) -> LR {
        let value = sample.feature(self.feature)[row];

        if value < self.threshold {
            LR::Left
        } else {
            LR::Right
        }
    }
}


/// Enumeration of `BranchNode` and `LeafNode`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    /// A node that have two childrens.
    Branch(BranchNode),


    /// A node that have no child.
    Leaf(LeafNode),
}


/// Represents the branch nodes of decision tree.
/// Each `BranchNode` must have two childrens
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchNode {
    rule: Splitter,
    left: Box<Node>,
    right: Box<Node>,
}


/// Represents the leaf nodes of decision tree.
/// A leaf holds the weighted label balance of the examples reaching it,
/// a value in `[-1, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafNode {
    confidence: f64,
}


impl Node {
    #[inline]
    pub(super) fn leaf(confidence: f64) -> Self {
        Self::Leaf(LeafNode { confidence })
    }


    #[inline]
    pub(super) fn branch(rule: Splitter, left: Node, right: Node) -> Self {
        Self::Branch(BranchNode {
            rule,
            left: Box::new(left),
            right: Box::new(right),
        })
    }


    /// Returns the depth of the subtree rooted at `self`.
    pub(super) fn depth(&self) -> usize {
        match self {
            Node::Branch(b) => 1 + b.left.depth().max(b.right.depth()),
            Node::Leaf(_) => 0,
        }
    }


    /// Returns the number of leaves of the subtree rooted at `self`.
    pub(super) fn n_leaves(&self) -> usize {
        match self {
            Node::Branch(b) => b.left.n_leaves() + b.right.n_leaves(),
            Node::Leaf(_) => 1,
        }
    }


    pub(super) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Node::Branch(b) => {
                let b_info = format!(
                    "\tnode_{id} [ label = \"x[{feat}] < {thr:.2} ?\" ];\n",
                    feat = b.rule.feature,
                    thr = b.rule.threshold
                );

                let (l_info, next_id) = b.left.to_dot_info(id + 1);
                let (mut r_info, ret_id) = b.right.to_dot_info(next_id);

                let mut info = l_info;
                info.push(b_info);
                info.append(&mut r_info);

                let l_edge = format!(
                    "\tnode_{id} -- node_{l_id} [ label = \"Yes\" ];\n",
                    l_id = id + 1
                );
                let r_edge = format!(
                    "\tnode_{id} -- node_{r_id} [ label = \"No\" ];\n",
                    r_id = next_id
                );

                info.push(l_edge);
                info.push(r_edge);

                (info, ret_id)
            },
            Node::Leaf(l) => {
                let info = format!(
                    "\tnode_{id} [ label = \"{p:.3}\", shape = box ];\n",
                    p = l.confidence
                );

                (vec![info], id + 1)
            }
        }
    }
}


impl Classifier for LeafNode {
    #[inline]
    fn confidence(&self, _sample: &Sample, _row: usize) -> f64 {
        self.confidence
    }
}


impl Classifier for BranchNode {
    #[inline]
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        match self.rule.split(sample, row) {
            LR::Left => self.left.confidence(sample, row),
            LR::Right => self.right.confidence(sample, row)
        }
    }
}


impl Classifier for Node {
    #[inline]
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        match self {
            Node::Branch(ref node) => node.confidence(sample, row),
            Node::Leaf(ref node) => node.confidence(sample, row)
        }
    }
}
