use crate::{BoostError, Result};
use crate::constants::DEFAULT_MAX_DEPTH;
use super::{DecisionTree, SplitBy};


/// A struct that builds `DecisionTree`.
/// `DecisionTreeBuilder` keeps parameters for constructing `DecisionTree`.
///
/// # Example
///
/// ```no_run
/// use adaboost::prelude::*;
///
/// let weak_learner = DecisionTreeBuilder::new()
///     .max_depth(3)
///     .split_by(SplitBy::Gini)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DecisionTreeBuilder {
    max_depth: usize,
    split_by: SplitBy,
}


impl DecisionTreeBuilder {
    /// Construct a new instance of [`DecisionTreeBuilder`].
    /// By default, [`DecisionTreeBuilder`] sets the parameters as follows;
    /// ```text
    /// max_depth: DEFAULT_MAX_DEPTH == 2,
    /// split_by: SplitBy::Entropy,
    /// ```
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            split_by: SplitBy::default(),
        }
    }


    /// Specify the maximal depth of the tree.
    /// Default maximal depth is `2`.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }


    /// Set the node splitting rule.
    /// Default value is `SplitBy::Entropy`.
    /// See [`SplitBy`] for other rules.
    #[inline]
    pub fn split_by(mut self, split_by: SplitBy) -> Self {
        self.split_by = split_by;
        self
    }


    /// Build a `DecisionTree`.
    /// Returns `BoostError::Parameters` if `max_depth == 0`.
    pub fn build(self) -> Result<DecisionTree> {
        if self.max_depth == 0 {
            return Err(BoostError::Parameters(
                "a decision tree must have positive depth".into()
            ));
        }

        Ok(DecisionTree::from_components(self.split_by, self.max_depth))
    }
}


impl Default for DecisionTreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
