//! Defines some common functions used in this library.

/// Defines some useful functions such as margin and alpha calculation.
pub mod helpers;

/// Defines some checker functions.
pub(crate) mod checkers;
