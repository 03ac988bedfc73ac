//! Exports the standard boosting algorithms and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    // Classification ---------------------------
    AdaBoost,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,
    TrainError,


    // Decision stump
    DecisionStump,
    DecisionStumpClassifier,
    PositiveSide,


    // Decision tree
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    SplitBy,
};


pub use crate::hypothesis::{
    Classifier,
    WeightedMajority,
};


pub use crate::sample::{
    Feature,
    Sample,
    SampleReader,
};


pub use crate::error::BoostError;
