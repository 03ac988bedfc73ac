//! Defines the splitting criteria for growing a decision tree.
use rayon::prelude::*;

use std::fmt;

use crate::{Feature, Sample};
use crate::weak_learner::decision_stump::dstump::midpoint;
use super::node::Splitter;


/// Splitting criteria for growing decision tree.
/// * `SplitBy::Edge` maximizes the edge (weighted training accuracy)
///     for given distribution.
/// * `SplitBy::Entropy` minimizes entropic impurity for given distribution.
/// * `SplitBy::Gini` minimizes Gini impurity for given distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitBy {
    /// Weighted accuracy.
    Edge,
    /// Binary entropy function.
    #[default]
    Entropy,
    /// Gini index.
    Gini,
}


impl fmt::Display for SplitBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Edge => "Edge (Weighted accuracy)",
            Self::Entropy => "Entropy",
            Self::Gini => "Gini index",
        };

        write!(f, "{name}")
    }
}


/// Weighted label masses on one side of a split.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Mass {
    pub(super) pos: f64,
    pub(super) neg: f64,
}


impl Mass {
    /// Collects the masses of the examples in `indices`.
    pub(super) fn collect(target: &[f64], dist: &[f64], indices: &[usize])
        -> Self
    {
        let mut mass = Self::default();
        indices.iter()
            .for_each(|&i| mass.add(target[i], dist[i]));
        mass
    }


    #[inline]
    fn add(&mut self, y: f64, d: f64) {
        if y > 0f64 { self.pos += d; } else { self.neg += d; }
    }


    #[inline]
    fn sub(&self, other: &Self) -> Self {
        Self {
            pos: (self.pos - other.pos).max(0f64),
            neg: (self.neg - other.neg).max(0f64),
        }
    }


    #[inline]
    pub(super) fn total(&self) -> f64 {
        self.pos + self.neg
    }
}


/// A candidate split with its score. Lower scores are better.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    feature: usize,
    threshold: f64,
    score: f64,
}


impl SplitBy {
    /// Returns the best splitting rule over `indices`,
    /// or `None` if every feature is constant on `indices`.
    /// Ties are resolved to the smallest feature index and
    /// the smallest threshold.
    pub(super) fn best_split(
        &self,
        sample: &Sample,
        dist: &[f64],
        indices: &[usize],
    ) -> Option<Splitter>
    {
        let target = sample.target();
        sample.features()
            .par_iter()
            .enumerate()
            .filter_map(|(j, feature)| {
                self.best_on_feature(j, feature, target, dist, indices)
            })
            .reduce_with(|a, b| {
                let b_wins = b.score < a.score
                    || (b.score == a.score && b.feature < a.feature);
                if b_wins { b } else { a }
            })
            .map(|c| Splitter::new(c.feature, c.threshold))
    }


    fn best_on_feature(
        &self,
        j: usize,
        feature: &Feature,
        target: &[f64],
        dist: &[f64],
        indices: &[usize],
    ) -> Option<Candidate>
    {
        let sorted = feature.sorted_indices(indices);
        let n_sample = sorted.len();
        let total = Mass::collect(target, dist, indices);

        let mut left = Mass::default();
        let mut best: Option<Candidate> = None;

        let mut k = 0;
        while k < n_sample {
            let value = feature[sorted[k]];
            while k < n_sample && feature[sorted[k]] == value {
                let i = sorted[k];
                left.add(target[i], dist[i]);
                k += 1;
            }

            // The last block leaves the right child empty.
            let Some(&next) = sorted.get(k) else { break; };

            let right = total.sub(&left);
            let score = self.score(&left, &right);
            let threshold = midpoint(value, feature[next]);

            if best.map_or(true, |b| score < b.score) {
                best = Some(Candidate { feature: j, threshold, score });
            }
        }

        best
    }


    /// Returns the score of the split `(left, right)`.
    fn score(&self, left: &Mass, right: &Mass) -> f64 {
        match self {
            Self::Edge => {
                -((left.pos - left.neg).abs() + (right.pos - right.neg).abs())
            },
            Self::Entropy => {
                weighted_impurity(left, right, entropic_impurity)
            },
            Self::Gini => {
                weighted_impurity(left, right, gini_impurity)
            },
        }
    }
}


fn weighted_impurity<F>(left: &Mass, right: &Mass, impurity: F) -> f64
    where F: Fn(&Mass) -> f64
{
    let (lw, rw) = (left.total(), right.total());
    let total = lw + rw;
    if total <= 0f64 { return 0f64; }

    (lw * impurity(left) + rw * impurity(right)) / total
}


/// Returns the entropic-impurity of the given masses.
#[inline(always)]
fn entropic_impurity(mass: &Mass) -> f64 {
    let total = mass.total();
    if total <= 0f64 { return 0f64; }

    [mass.pos, mass.neg].into_iter()
        .map(|p| {
            let r = p / total;
            if r <= 0f64 { 0f64 } else { -r * r.ln() }
        })
        .sum::<f64>()
}


/// Returns the gini-impurity of the given masses.
#[inline(always)]
fn gini_impurity(mass: &Mass) -> f64 {
    let total = mass.total();
    if total <= 0f64 { return 0f64; }

    let correct = (mass.pos / total).powi(2) + (mass.neg / total).powi(2);

    (1f64 - correct).max(0f64)
}
