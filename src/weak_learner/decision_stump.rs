//! Defines the decision stump weak learner.

/// Defines the decision stump algorithm.
pub mod dstump;
/// Defines the classifier produced by `DecisionStump`.
pub mod dstump_classifier;


pub use dstump::DecisionStump;
pub use dstump_classifier::{
    DecisionStumpClassifier,
    PositiveSide,
};
