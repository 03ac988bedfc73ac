//! This directory provides some features for research
//! Measure the followings of boosting algorithm per iteration
//! - Running time
//! - Objective value
//! - Training loss
//! - Test loss

/// Defines `Logger` that runs a boosting algorithm with logging.
pub mod logger;

/// Defines a builder for `Logger`.
pub mod logger_builder;

/// Defines loss functions.
pub mod loss_functions;

/// Defines objective functions.
pub mod objective_functions;


pub use logger::{
    Logger,
    CurrentHypothesis,
};
pub use logger_builder::LoggerBuilder;
pub use loss_functions::zero_one_loss;
pub use objective_functions::{
    ObjectiveFunction,
    ExponentialLoss,
};
