//! Provides the boosting algorithms.

/// Booster trait
pub mod core;

/// Defines AdaBoost.
pub mod adaboost;


pub use self::core::Booster;
pub use self::adaboost::AdaBoost;
