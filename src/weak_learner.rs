//! The files in `weak_learner/` directory defines
//! `WeakLearner` trait and weak learners.

/// Provides WeakLearner trait.
pub mod core;

/// Defines Decision Stump.
pub mod decision_stump;

/// Defines Decision Tree.
pub mod decision_tree;


pub use self::core::{
    WeakLearner,
    TrainError,
};

pub use self::decision_stump::{
    DecisionStump,
    DecisionStumpClassifier,
    PositiveSide,
};

pub use self::decision_tree::{
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    SplitBy,
};
