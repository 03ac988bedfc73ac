//! Defines the decision tree weak learner.
use crate::{
    weak_learner::core::check_training_input,
    Sample,
    TrainError,
    WeakLearner,
};

use super::{
    node::*,
    split_by::*,
    dtree_classifier::DecisionTreeClassifier,
};


/// Generates a [`DecisionTreeClassifier`] for a given distribution
/// over examples.
///
/// Construct it with [`DecisionTreeBuilder`](super::DecisionTreeBuilder).
/// The tree grows greedily: every node picks the split that is best
/// with respect to [`SplitBy`] on the examples reaching it,
/// until `max_depth` is reached or the node is pure.
#[derive(Debug, Clone, Copy)]
pub struct DecisionTree {
    split_by: SplitBy,
    max_depth: usize,
}


impl DecisionTree {
    /// Construct a `DecisionTree` from its components.
    /// `max_depth` is checked by the builder.
    #[inline]
    pub(super) fn from_components(split_by: SplitBy, max_depth: usize)
        -> Self
    {
        Self { split_by, max_depth, }
    }


    /// Returns the maximal depth of the produced trees.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }


    /// Returns the splitting criterion.
    pub fn split_by(&self) -> SplitBy {
        self.split_by
    }


    /// Grow a tree of depth at most `depth` over `indices`.
    fn grow(
        &self,
        sample: &Sample,
        dist: &[f64],
        indices: Vec<usize>,
        depth: usize,
    ) -> Node
    {
        let target = sample.target();
        let (confidence, loss) = confidence_and_loss(target, dist, &indices);

        if loss == 0f64 || depth == 0 {
            return Node::leaf(confidence);
        }

        let rule = match self.split_by.best_split(sample, dist, &indices) {
            Some(rule) => rule,
            None => { return Node::leaf(confidence); },
        };

        let mut lindices = Vec::new();
        let mut rindices = Vec::new();
        for i in indices.into_iter() {
            match rule.split(sample, i) {
                LR::Left  => { lindices.push(i); },
                LR::Right => { rindices.push(i); },
            }
        }

        if lindices.is_empty() || rindices.is_empty() {
            return Node::leaf(confidence);
        }

        let left = self.grow(sample, dist, lindices, depth - 1);
        let right = self.grow(sample, dist, rindices, depth - 1);

        Node::branch(rule, left, right)
    }
}


impl WeakLearner for DecisionTree {
    type Hypothesis = DecisionTreeClassifier;
    type Error = TrainError;


    fn name(&self) -> &str {
        "Decision Tree"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Max depth", format!("{}", self.max_depth)),
            ("Split criterion", format!("{}", self.split_by)),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample, dist: &[f64])
        -> Result<Self::Hypothesis, Self::Error>
    {
        check_training_input(sample, dist)?;

        // Examples with no mass do not affect any split.
        let indices = (0..sample.shape().0)
            .filter(|&i| dist[i] > 0f64)
            .collect::<Vec<usize>>();

        let root = self.grow(sample, dist, indices, self.max_depth);

        Ok(DecisionTreeClassifier::from(root))
    }
}


/// Returns a pair `(c, e)` where
/// - `c` is the weighted label balance `(pos - neg) / (pos + neg)`,
/// - `e` is the weighted error of predicting `sign(c)`.
#[inline]
fn confidence_and_loss(target: &[f64], dist: &[f64], indices: &[usize])
    -> (f64, f64)
{
    let mass = Mass::collect(target, dist, indices);
    let total = mass.total();

    let confidence = if total > 0f64 {
        (mass.pos - mass.neg) / total
    } else {
        0f64
    };

    (confidence, mass.pos.min(mass.neg))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_and_loss() {
        let target = [1.0, 1.0, -1.0, 1.0];
        let dist = [0.25, 0.25, 0.25, 0.25];

        let (c, e) = confidence_and_loss(&target, &dist, &[0, 1, 2, 3]);
        assert_eq!(c, 0.5);
        assert_eq!(e, 0.25);

        let (c, e) = confidence_and_loss(&target, &dist, &[2]);
        assert_eq!(c, -1.0);
        assert_eq!(e, 0.0);
    }
}
