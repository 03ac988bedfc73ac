//! Provides the decision stump class.
use serde::{Serialize, Deserialize};

use crate::{Classifier, Sample};


/// Defines the ray that are predicted as +1.0.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PositiveSide {
    /// The right-hand-side ray `x >= threshold` is predicted as +1.0
    RHS,
    /// The left-hand-side ray `x < threshold` is predicted as +1.0
    LHS
}


/// The struct `DecisionStumpClassifier` defines the decision stump class.
/// Given a point over the `d`-dimensional space,
/// a classifier predicts its label by comparing
/// `x[feature_index]` with `threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionStumpClassifier {
    /// The intercept of the stump
    pub threshold: f64,

    /// The index of the feature used in prediction.
    pub feature_index: usize,

    /// A ray to be predicted as +1.0
    pub positive_side: PositiveSide
}


impl DecisionStumpClassifier {
    /// Construct a stump from its parameters.
    pub fn new(
        feature_index: usize,
        threshold: f64,
        positive_side: PositiveSide,
    ) -> Self
    {
        Self { threshold, feature_index, positive_side, }
    }
}


impl Classifier for DecisionStumpClassifier {
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        let val = sample.feature(self.feature_index)[row];
        let is_rhs = val >= self.threshold;
        match (self.positive_side, is_rhs) {
            (PositiveSide::RHS, true) | (PositiveSide::LHS, false) => 1.0,
            _ => -1.0,
        }
    }
}
