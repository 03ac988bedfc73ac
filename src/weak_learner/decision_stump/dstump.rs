//! Provides the decision stump algorithm.
use rayon::prelude::*;

use crate::{
    common::helpers,
    weak_learner::core::check_training_input,
    Feature,
    Sample,
    TrainError,
    WeakLearner,
};

use super::{DecisionStumpClassifier, PositiveSide};


/// The struct `DecisionStump` generates a [`DecisionStumpClassifier`]
/// for each call of [`WeakLearner::produce`].
///
/// The returned stump maximizes the edge
/// `sum(dist[i] * y[i] * h(x[i]))` (equivalently,
/// minimizes the weighted error)
/// over all features and all thresholds between
/// two consecutive distinct feature values.
/// Ties are resolved to the smallest feature index and
/// the smallest threshold.
///
/// # Example
/// ```no_run
/// use adaboost::prelude::*;
///
/// let x = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
/// let y = vec![-1.0, -1.0, 1.0, 1.0];
/// let sample = Sample::from_rows(&x, &y).unwrap();
///
/// let dist = vec![0.25; 4];
/// let h = DecisionStump::new()
///     .produce(&sample, &dist)
///     .unwrap();
/// assert_eq!(h.predict_all(&sample), vec![-1, -1, 1, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionStump;


/// The best stump found on a single feature.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    feature_index: usize,
    threshold: f64,
    edge: f64,
}


impl Candidate {
    /// Returns `true` if `self` is strictly better than `other`,
    /// or equally good with a smaller feature index.
    fn beats(&self, other: &Self) -> bool {
        let (a, b) = (self.edge.abs(), other.edge.abs());
        a > b || (a == b && self.feature_index < other.feature_index)
    }


    fn into_stump(self) -> DecisionStumpClassifier {
        let positive_side = if self.edge >= 0f64 {
            PositiveSide::RHS
        } else {
            PositiveSide::LHS
        };
        DecisionStumpClassifier::new(
            self.feature_index, self.threshold, positive_side
        )
    }
}


impl DecisionStump {
    /// Construct a new instance of `DecisionStump`.
    pub fn new() -> Self {
        Self
    }


    /// Sweep the thresholds over the `j`-th feature.
    /// `init_edge` is the edge of the stump that predicts `+1` everywhere.
    fn best_on_feature(
        j: usize,
        feature: &Feature,
        target: &[f64],
        dist: &[f64],
        indices: &[usize],
        init_edge: f64,
    ) -> Candidate
    {
        let sorted = feature.sorted_indices(indices);
        let n_sample = sorted.len();

        // Threshold below the minimum: every example is on the RHS.
        let mut best = Candidate {
            feature_index: j,
            threshold: feature[sorted[0]] - 1f64,
            edge: init_edge,
        };

        let mut edge = init_edge;
        let mut k = 0;
        while k < n_sample {
            let value = feature[sorted[k]];

            // Move the block of examples sharing `value` to the LHS.
            let mut mass = 0f64;
            while k < n_sample && feature[sorted[k]] == value {
                let i = sorted[k];
                mass += dist[i] * target[i];
                k += 1;
            }
            edge -= 2f64 * mass;

            let threshold = match sorted.get(k) {
                Some(&i) => midpoint(value, feature[i]),
                None => value + 1f64,
            };

            let candidate = Candidate { feature_index: j, threshold, edge };
            if candidate.edge.abs() > best.edge.abs() {
                best = candidate;
            }
        }

        best
    }
}


/// Returns a threshold `t` with `left < t <= right`.
#[inline]
pub(crate) fn midpoint(left: f64, right: f64) -> f64 {
    let mid = left + (right - left) / 2f64;
    if mid > left { mid } else { right }
}


impl WeakLearner for DecisionStump {
    type Hypothesis = DecisionStumpClassifier;
    type Error = TrainError;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn produce(&self, sample: &Sample, dist: &[f64])
        -> Result<Self::Hypothesis, Self::Error>
    {
        check_training_input(sample, dist)?;

        let target = sample.target();
        let indices = (0..sample.shape().0).collect::<Vec<usize>>();
        let init_edge = helpers::inner_product(dist, target);

        let best = sample.features()
            .par_iter()
            .enumerate()
            .map(|(j, feature)| {
                Self::best_on_feature(
                    j, feature, target, dist, &indices[..], init_edge
                )
            })
            .reduce_with(|a, b| if b.beats(&a) { b } else { a })
            .ok_or(TrainError::NoFeature)?;

        Ok(best.into_stump())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Classifier;

    #[test]
    fn test_separable_single_feature() {
        let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        let sample = Sample::from_rows(&rows, [-1.0, -1.0, 1.0, 1.0])
            .unwrap();
        let dist = vec![0.25; 4];

        let h = DecisionStump::new().produce(&sample, &dist).unwrap();

        assert_eq!(h.feature_index, 0);
        assert_eq!(h.threshold, 1.5);
        assert_eq!(h.positive_side, PositiveSide::RHS);
        assert_eq!(h.predict_all(&sample), vec![-1, -1, 1, 1]);
    }


    #[test]
    fn test_left_hand_side() {
        let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        let sample = Sample::from_rows(&rows, [1.0, 1.0, 1.0, -1.0])
            .unwrap();
        let dist = vec![0.25; 4];

        let h = DecisionStump::new().produce(&sample, &dist).unwrap();

        assert_eq!(h.threshold, 2.5);
        assert_eq!(h.positive_side, PositiveSide::LHS);
        assert_eq!(h.predict_all(&sample), vec![1, 1, 1, -1]);
    }


    #[test]
    fn test_picks_the_informative_feature() {
        let rows = vec![
            vec![5.0, 0.0],
            vec![1.0, 1.0],
            vec![4.0, 2.0],
            vec![2.0, 3.0],
        ];
        let sample = Sample::from_rows(&rows, [-1.0, -1.0, 1.0, 1.0])
            .unwrap();
        let dist = vec![0.25; 4];

        let h = DecisionStump::new().produce(&sample, &dist).unwrap();
        assert_eq!(h.feature_index, 1);
        assert_eq!(h.threshold, 1.5);
    }


    #[test]
    fn test_follows_the_distribution() {
        // Uniformly, the best stump errs on one of the two middle examples.
        // The heavy weight on example 1 decides which one.
        let rows = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
        let sample = Sample::from_rows(&rows, [-1.0, 1.0, -1.0, 1.0])
            .unwrap();
        let dist = vec![0.1, 0.7, 0.1, 0.1];

        let h = DecisionStump::new().produce(&sample, &dist).unwrap();
        assert_eq!(h.predict(&sample, 1), 1);
    }


    #[test]
    fn test_duplicated_values() {
        let rows = vec![vec![1.0], vec![1.0], vec![2.0], vec![2.0]];
        let sample = Sample::from_rows(&rows, [-1.0, -1.0, 1.0, 1.0])
            .unwrap();
        let dist = vec![0.25; 4];

        let h = DecisionStump::new().produce(&sample, &dist).unwrap();
        assert_eq!(h.threshold, 1.5);
        assert_eq!(h.predict_all(&sample), vec![-1, -1, 1, 1]);
    }


    #[test]
    fn test_invalid_distribution() {
        let rows = vec![vec![0.0], vec![1.0]];
        let sample = Sample::from_rows(&rows, [-1.0, 1.0]).unwrap();

        let err = DecisionStump::new().produce(&sample, &[1.0]).unwrap_err();
        assert_eq!(err, TrainError::DistributionLength { expected: 2, got: 1 });
    }


    #[test]
    fn test_midpoint() {
        assert_eq!(midpoint(1.0, 2.0), 1.5);
        let next = f64::from_bits(1f64.to_bits() + 1);
        assert_eq!(midpoint(1.0, next), next);
    }
}
