#![warn(missing_docs)]

//!
//! A crate that provides the discrete two-class AdaBoost algorithm.
//!
//! AdaBoost maintains a distribution over the training examples.
//! In each round, the weak learner returns a hypothesis
//! trained on the current distribution,
//! the booster assigns a weight (`alpha`) to the hypothesis
//! based on its weighted error,
//! and the distribution is updated so that
//! the misclassified examples gain more mass.
//! The final classifier is the weighted majority vote
//! of all hypotheses.
//!
//! This crate has three layers.
//!
//! - [`Sample`]
//!     A batch of training examples with labels in `{-1, +1}`.
//!
//! - [`WeakLearner`]
//!     Given a sample and a distribution over it,
//!     a weak learner returns a [`Classifier`].
//!     [`DecisionStump`] and [`DecisionTree`] are provided.
//!
//! - [`Booster`]
//!     [`AdaBoost`] runs the boosting loop
//!     and stores the resulting [`WeightedMajority`].
//!
//! # Example
//! ```no_run
//! use adaboost::prelude::*;
//!
//! let x = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
//! let y = vec![-1.0, -1.0, 1.0, 1.0];
//! let sample = Sample::from_rows(&x, &y).unwrap();
//!
//! let mut booster = AdaBoost::init(DecisionStump::new())
//!     .n_estimators(10);
//! booster.fit(&sample).unwrap();
//!
//! let predictions = booster.predict(&sample).unwrap();
//! assert_eq!(predictions, vec![-1, -1, 1, 1]);
//! ```

pub mod constants;
pub mod error;
pub mod common;
pub mod sample;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;
pub mod research;
pub mod prelude;


pub use error::{BoostError, Result};

pub use sample::{
    Feature,
    Sample,
    SampleReader,
};

pub use hypothesis::{
    Classifier,
    WeightedMajority,
};

pub use weak_learner::{
    WeakLearner,
    TrainError,
    DecisionStump,
    DecisionStumpClassifier,
    PositiveSide,
    DecisionTree,
    DecisionTreeBuilder,
    DecisionTreeClassifier,
    SplitBy,
};

pub use booster::{
    Booster,
    AdaBoost,
};
