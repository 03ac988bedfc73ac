//! A weighted majority vote of classifiers.
use serde::{Serialize, Deserialize};
use serde::de::DeserializeOwned;

use crate::{
    Classifier,
    Result,
    Sample,
};


/// The combined classifier built by a boosting algorithm.
/// The `k`-th hypothesis votes its predicted label
/// with weight `weights[k]`.
/// Weights are kept as given (they may be negative or zero)
/// and the insertion order is preserved.
///
/// You can read/write this struct by `Serde` trait.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WeightedMajority<H> {
    /// Weights on each hypothesis in `self.hypotheses`.
    pub weights: Vec<f64>,
    /// Set of hypotheses.
    pub hypotheses: Vec<H>,
}


impl<H> WeightedMajority<H> {
    /// Construct an empty combined hypothesis.
    pub fn new() -> Self {
        Self { weights: Vec::new(), hypotheses: Vec::new(), }
    }


    /// Construct an empty combined hypothesis
    /// that can hold `capacity` pairs without reallocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            weights: Vec::with_capacity(capacity),
            hypotheses: Vec::with_capacity(capacity),
        }
    }


    /// Append a pair `(weight, H)` to the current combined hypothesis.
    #[inline]
    pub fn push(&mut self, weight: f64, hypothesis: H) {
        self.weights.push(weight);
        self.hypotheses.push(hypothesis);
    }


    /// The number of hypotheses.
    #[inline]
    pub fn len(&self) -> usize {
        self.hypotheses.len()
    }


    /// Returns `true` if no hypothesis is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hypotheses.is_empty()
    }


    /// Remove all pairs.
    #[inline]
    pub fn clear(&mut self) {
        self.weights.clear();
        self.hypotheses.clear();
    }


    /// Iterate over `(weight, hypothesis)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &H)> + '_ {
        self.weights.iter()
            .copied()
            .zip(&self.hypotheses[..])
    }


    /// Decompose the combined hypothesis
    /// into the two vectors `Vec<f64>` and `Vec<H>`
    #[inline]
    pub fn decompose(self) -> (Vec<f64>, Vec<H>) {
        (self.weights, self.hypotheses)
    }
}


impl<H> Default for WeightedMajority<H> {
    fn default() -> Self {
        Self::new()
    }
}


impl<H: Serialize> WeightedMajority<H> {
    /// Serialize `self` into a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}


impl<H: DeserializeOwned> WeightedMajority<H> {
    /// Deserialize a combined hypothesis from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}


impl<H> Classifier for WeightedMajority<H>
    where H: Classifier,
{
    /// Returns `sum(weights[k] * h_k(x))`
    /// where `h_k(x)` is the label predicted by the `k`-th hypothesis.
    fn confidence(&self, sample: &Sample, row: usize) -> f64 {
        self.iter()
            .map(|(w, h)| w * h.predict(sample, row) as f64)
            .sum::<f64>()
    }
}
