//! Numeric constants and default parameters.

/// Added to both sides of the ratio in the `alpha` computation
/// so that a zero (or full) weighted error stays finite.
pub const ALPHA_EPSILON:        f64 = 1e-10;
/// Tolerance for `sum(distribution) == 1`.
pub const SIMPLEX_TOLERANCE:    f64 = 1e-9;

/// Number of boosting rounds when none is specified.
pub const DEFAULT_N_ESTIMATORS: usize = 50;
/// Maximal depth of [`DecisionTree`](crate::DecisionTree) by default.
pub const DEFAULT_MAX_DEPTH:    usize = 2;

/// Initial capacity of a feature column.
pub const BUFFER_SIZE:          usize = 256;
