//! This file provides some common functions
//! such as margin and alpha calculation.
use rayon::prelude::*;

use crate::{
    constants::ALPHA_EPSILON,
    Classifier,
    Sample,
};


/// Returns the margin vector `y[i] * h(x[i])` of a single hypothesis,
/// where `h(x[i])` is the predicted label in `{-1, +1}`.
#[inline]
pub fn margins<H>(sample: &Sample, h: &H) -> Vec<f64>
    where H: Classifier + ?Sized,
{
    let target = sample.target();

    target.iter()
        .enumerate()
        .map(|(i, y)| y * h.predict(sample, i) as f64)
        .collect()
}


/// Returns the weighted error of a hypothesis whose margins are `margins`.
/// The weight mass is re-summed so that
/// the result does not rely on `dist` being exactly normalized.
#[inline]
pub fn weighted_error(margins: &[f64], dist: &[f64]) -> f64 {
    let (wrong, total) = margins.iter()
        .zip(dist)
        .fold((0f64, 0f64), |(wrong, total), (&yh, &d)| {
            let wrong = if yh < 0f64 { wrong + d } else { wrong };
            (wrong, total + d)
        });

    wrong / total
}


/// Returns the weight on a hypothesis with weighted error `err`:
/// ```text
/// alpha = 0.5 * ln( (1 - err + eps) / (err + eps) )
/// ```
/// `err == 0` gives a large positive value,
/// `err == 0.5` gives exactly zero, and
/// `err == 1` gives a large negative value.
#[inline]
pub fn alpha(err: f64) -> f64 {
    0.5 * ((1f64 - err + ALPHA_EPSILON) / (err + ALPHA_EPSILON)).ln()
}


/// Multiplies `dist[i]` by `exp(- alpha * margins[i])`
/// and normalizes `dist` to sum to one.
/// The update is computed in the log domain to prevent overflow.
#[inline]
pub fn update_distribution(dist: &mut [f64], margins: &[f64], alpha: f64) {
    dist.par_iter_mut()
        .zip(margins)
        .for_each(|(d, yh)| *d = d.ln() - alpha * yh);

    let normalizer = logsumexp(dist);

    dist.par_iter_mut()
        .for_each(|d| *d = (*d - normalizer).exp());
}


/// Computes `ln(sum(exp(v)))` stably.
#[inline]
pub fn logsumexp(items: &[f64]) -> f64 {
    let max = items.iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);

    if max.is_infinite() {
        return max;
    }

    let sum = items.par_iter()
        .map(|v| (v - max).exp())
        .sum::<f64>();
    max + sum.ln()
}


/// Compute the inner-product of the given two slices.
#[inline]
pub fn inner_product(v1: &[f64], v2: &[f64]) -> f64 {
    v1.par_iter()
        .zip(v2)
        .map(|(a, b)| a * b)
        .sum::<f64>()
}


#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_weighted_error() {
        let margins = [1.0, -1.0, 1.0, -1.0];
        let dist = [0.1, 0.2, 0.3, 0.4];
        assert_abs_diff_eq!(weighted_error(&margins, &dist), 0.6, epsilon = 1e-12);
    }


    #[test]
    fn test_weighted_error_unnormalized() {
        let margins = [1.0, -1.0];
        let dist = [2.0, 2.0];
        assert_eq!(weighted_error(&margins, &dist), 0.5);
    }


    #[test]
    fn test_alpha_at_chance_level() {
        assert_eq!(alpha(0.5), 0.0);
    }


    #[test]
    fn test_alpha_is_finite_at_the_boundaries() {
        let a0 = alpha(0.0);
        let a1 = alpha(1.0);
        assert!(a0.is_finite() && a0 > 10.0, "alpha(0) = {a0}");
        assert!(a1.is_finite() && a1 < -10.0, "alpha(1) = {a1}");
    }


    #[test]
    fn test_update_distribution() {
        let mut dist = vec![0.25; 4];
        let margins = [1.0, 1.0, 1.0, -1.0];
        let err = weighted_error(&margins, &dist);
        let a = alpha(err);

        update_distribution(&mut dist, &margins, a);

        // After the update, the misclassified example holds half the mass.
        assert_abs_diff_eq!(dist.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(dist[3], 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(dist[0], 1.0 / 6.0, epsilon = 1e-9);
    }


    #[test]
    fn test_logsumexp() {
        let v = [0f64.ln(), 1f64.ln(), 3f64.ln()];
        assert_abs_diff_eq!(logsumexp(&v), 4f64.ln(), epsilon = 1e-12);
        assert_abs_diff_eq!(logsumexp(&[1000.0, 1000.0]), 1000.0 + 2f64.ln(), epsilon = 1e-9);
    }


    #[test]
    fn test_inner_product() {
        assert_eq!(inner_product(&[1.0, 2.0], &[3.0, -4.0]), -5.0);
    }
}
