//! The core library for the weak learner in the boosting protocol.
//!
//! The weak learner in the general boosting setting is as follows:
//!
//! Given a distribution over training examples,
//! the weak learner returns a hypothesis that is slightly better than
//! the random guessing with respect to the distribution.
//!
//! The booster does not verify this assumption.
use thiserror::Error;

use crate::{Classifier, Sample};


/// An interface for the weak learners used in boosting.
/// A weak learner is constructed once, with its own hyperparameters,
/// and is asked for a fresh hypothesis in every round.
///
/// # Required Methods
/// - [`WeakLearner::name`]
/// - [`WeakLearner::produce`]
/// - [`WeakLearner::info`] ... optional.
pub trait WeakLearner {
    /// The hypothesis returned by `self`.
    type Hypothesis: Classifier;

    /// The error raised when training fails.
    type Error: std::error::Error + Send + Sync + 'static;


    /// Returns the name of the weak learner.
    fn name(&self) -> &str;


    /// Returns the hyperparameters of the weak learner
    /// as `(name, value)` pairs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Trains a hypothesis on `sample`,
    /// weighting the `i`-th example by `dist[i]`.
    fn produce(&self, sample: &Sample, dist: &[f64])
        -> Result<Self::Hypothesis, Self::Error>;
}


/// Errors raised by the weak learners of this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainError {
    /// The sample has no example.
    #[error("the sample is empty")]
    EmptySample,

    /// The sample has no feature.
    #[error("the sample has no feature")]
    NoFeature,

    /// The number of labels differs from the number of examples.
    #[error("the sample has {n_label} labels for {n_sample} examples")]
    TargetMismatch {
        /// The number of examples.
        n_sample: usize,
        /// The number of labels.
        n_label: usize,
    },

    /// The distribution length differs from the number of examples.
    #[error("the distribution has length {got}, expected {expected}")]
    DistributionLength {
        /// The number of examples.
        expected: usize,
        /// The length of the given distribution.
        got: usize,
    },

    /// The distribution has a negative or non-finite entry,
    /// or has no positive mass.
    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),

    /// A feature value is `NaN`.
    #[error("the feature `{0}` contains NaN")]
    NanFeature(String),
}


/// Checks the pair `(sample, dist)` given to a weak learner.
pub(crate) fn check_training_input(sample: &Sample, dist: &[f64])
    -> Result<(), TrainError>
{
    let (n_sample, n_feature) = sample.shape();

    if n_sample == 0 {
        return Err(TrainError::EmptySample);
    }

    if n_feature == 0 {
        return Err(TrainError::NoFeature);
    }

    let n_label = sample.target().len();
    if n_label != n_sample {
        return Err(TrainError::TargetMismatch { n_sample, n_label });
    }

    if dist.len() != n_sample {
        return Err(TrainError::DistributionLength {
            expected: n_sample,
            got: dist.len(),
        });
    }

    if let Some(d) = dist.iter().find(|d| !d.is_finite() || **d < 0f64) {
        return Err(TrainError::InvalidDistribution(
            format!("found an entry {d}")
        ));
    }

    if dist.iter().all(|&d| d == 0f64) {
        return Err(TrainError::InvalidDistribution(
            "no positive mass".into()
        ));
    }

    if let Some(feature) = sample.features()
        .iter()
        .find(|feat| feat.vals().iter().any(|v| v.is_nan()))
    {
        return Err(TrainError::NanFeature(feature.name().to_string()));
    }

    Ok(())
}
