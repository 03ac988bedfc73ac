//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::{
    constants::SIMPLEX_TOLERANCE,
    BoostError,
    Result,
    Sample,
};


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn sample(sample: &Sample) -> Result<()> {
    sample.is_valid_binary_instance()?;

    // `data` must have a feature.
    if sample.shape().1 == 0 {
        return Err(BoostError::invalid_input("the sample has no feature"));
    }
    Ok(())
}


/// Check the number of boosting rounds.
#[inline(always)]
pub(crate) fn n_estimators(n_estimators: usize) -> Result<()> {
    if n_estimators == 0 {
        return Err(BoostError::Parameters(
            "the number of estimators must be positive. got 0".into()
        ));
    }
    Ok(())
}


/// Returns `true` if `dist` is a probability vector.
#[inline(always)]
pub(crate) fn is_on_simplex(dist: &[f64]) -> bool {
    let sum = dist.iter().sum::<f64>();
    (sum - 1f64).abs() < SIMPLEX_TOLERANCE && dist.iter().all(|&d| d >= 0f64)
}
