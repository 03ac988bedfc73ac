use crate::{Classifier, Sample};


/// An objective function logged by [`Logger`](super::Logger).
pub trait ObjectiveFunction {
    /// Returns the name of the objective.
    fn name(&self) -> &str;


    /// Evaluates the objective of `f` on `sample`.
    fn objective_value<H>(&self, sample: &Sample, f: &H) -> f64
        where H: Classifier;
}


/// The exponential loss `mean(exp(- y[i] * f(x[i])))`,
/// where `f(x)` is the confidence of the combined hypothesis.
/// This is the objective that `AdaBoost` decreases greedily.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExponentialLoss;


impl ExponentialLoss {
    /// Construct a new instance of `ExponentialLoss`.
    pub fn new() -> Self {
        Self
    }
}


impl ObjectiveFunction for ExponentialLoss {
    fn name(&self) -> &str {
        "Exponential Loss"
    }


    fn objective_value<H>(&self, sample: &Sample, f: &H) -> f64
        where H: Classifier
    {
        let n_sample = sample.shape().0;
        if n_sample == 0 { return 0f64; }

        sample.target()
            .iter()
            .zip(f.confidence_all(sample))
            .map(|(y, fx)| (- y * fx).exp())
            .sum::<f64>()
            / n_sample as f64
    }
}
