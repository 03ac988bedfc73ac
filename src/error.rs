//! Error types of this crate.

use thiserror::Error;

use std::error::Error as StdError;
use std::io;


/// A `Result` alias whose error type is [`BoostError`].
pub type Result<T> = std::result::Result<T, BoostError>;


/// Errors returned by the boosting algorithms and the sample utilities.
#[derive(Error, Debug)]
pub enum BoostError {
    /// Shape or domain mismatch of the given sample.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid hyperparameter.
    #[error("invalid parameter: {0}")]
    Parameters(String),

    /// `predict` was called before a successful `fit`.
    #[error("the booster is not fitted. call `fit` before `predict`")]
    NotFitted,

    /// The weak learner failed to produce a hypothesis.
    /// The original error is kept as the source.
    #[error("weak learner failed: {0}")]
    WeakLearner(#[source] Box<dyn StdError + Send + Sync + 'static>),

    /// A cell of a CSV file is not a number.
    #[error("failed to parse `{value}` at line {line}")]
    Parse {
        /// 1-indexed line number.
        line: usize,
        /// The offending cell.
        value: String,
    },

    /// Failed to read a file.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Failed to convert a `polars::DataFrame`.
    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),

    /// Failed to (de)serialize a hypothesis.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}


impl BoostError {
    /// Wraps an error raised by a weak learner.
    pub fn weak_learner<E>(error: E) -> Self
        where E: StdError + Send + Sync + 'static,
    {
        Self::WeakLearner(Box::new(error))
    }


    pub(crate) fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}
