//! Provides [`AdaBoost`] by Freund & Schapire, 1995.
use crate::{
    Booster,
    BoostError,
    Classifier,
    Result,
    Sample,
    WeakLearner,
    WeightedMajority,

    common::{checkers, helpers},
    constants::DEFAULT_N_ESTIMATORS,
    research::CurrentHypothesis,
};

use std::ops::ControlFlow;


/// Defines the discrete `AdaBoost`.
/// This struct is based on the book:
/// [Boosting: Foundations and Algorithms](https://direct.mit.edu/books/oa-monograph/5342/BoostingFoundations-and-Algorithms)
/// by Robert E. Schapire and Yoav Freund.
///
/// In each of the `n_estimators` rounds, `AdaBoost`
/// 1. asks the weak learner for a hypothesis `h`
///    trained on the current distribution `d`,
/// 2. computes the weighted error `err` of `h`,
/// 3. weights `h` by `alpha = 0.5 * ln((1 - err + eps) / (err + eps))`,
/// 4. updates `d[i] <- d[i] * exp(- alpha * y[i] * h(x[i]))`
///    and normalizes it.
///
/// There is no early stopping.
/// A hypothesis worse than random guessing gets a negative weight.
///
/// # Example
/// The following code shows a small example
/// for running [`AdaBoost`].
/// See also:
/// - [`DecisionStump`]
/// - [`WeightedMajority<H>`]
/// - [`Sample`]
///
/// [`DecisionStump`]: crate::weak_learner::DecisionStump
/// [`WeightedMajority<H>`]: crate::hypothesis::WeightedMajority
///
///
/// ```no_run
/// use adaboost::prelude::*;
///
/// // Read the training sample from the CSV file.
/// // We use the column named `class` as the label.
/// let has_header = true;
/// let sample = Sample::from_csv("path/to/file.csv", has_header)
///     .unwrap()
///     .set_target("class")
///     .unwrap();
///
/// // Run 100 rounds with decision stumps.
/// let mut booster = AdaBoost::init(DecisionStump::new())
///     .n_estimators(100);
/// booster.fit(&sample).unwrap();
///
/// // Get the predictions on the training set.
/// let predictions: Vec<i64> = booster.predict(&sample).unwrap();
///
/// // Calculate the training loss.
/// let n_sample = sample.shape().0 as f64;
/// let training_loss = sample.target()
///     .iter()
///     .zip(predictions)
///     .map(|(&y, fx)| if y as i64 == fx { 0.0 } else { 1.0 })
///     .sum::<f64>()
///     / n_sample;
///
/// println!("Training Loss is: {training_loss}");
/// ```
pub struct AdaBoost<W: WeakLearner> {
    weak_learner: W,

    // Number of boosting rounds.
    n_estimators: usize,

    // Distribution on sample.
    dist: Vec<f64>,

    // Weighted hypotheses obtained so far.
    ensemble: WeightedMajority<W::Hypothesis>,

    // Weighted error of each hypothesis in `ensemble`.
    errors: Vec<f64>,

    // `true` after a successful `fit`.
    fitted: bool,

    // Number of features seen in `fit`.
    n_feature: usize,
}


impl<W: WeakLearner> AdaBoost<W> {
    /// Initialize the `AdaBoost` with the given weak learner.
    /// The number of rounds defaults to
    /// [`DEFAULT_N_ESTIMATORS`](crate::constants::DEFAULT_N_ESTIMATORS).
    pub fn init(weak_learner: W) -> Self {
        Self {
            weak_learner,
            n_estimators: DEFAULT_N_ESTIMATORS,

            dist: Vec::new(),
            ensemble: WeightedMajority::new(),
            errors: Vec::new(),

            fitted: false,
            n_feature: 0,
        }
    }


    /// Set the number of boosting rounds.
    /// `fit` returns `BoostError::Parameters` if this is zero.
    pub fn n_estimators(mut self, n_estimators: usize) -> Self {
        self.n_estimators = n_estimators;
        self
    }


    /// Returns the weak learner.
    pub fn weak_learner(&self) -> &W {
        &self.weak_learner
    }


    /// Returns `true` if `self` holds a fitted ensemble.
    pub fn is_fitted(&self) -> bool {
        self.fitted
    }


    /// Returns the current distribution over the training examples.
    /// After `fit`, this is the distribution
    /// that the next round would use.
    pub fn distribution(&self) -> &[f64] {
        &self.dist[..]
    }


    /// Returns the weighted error of each hypothesis,
    /// in the order of training.
    pub fn weighted_errors(&self) -> &[f64] {
        &self.errors[..]
    }


    /// Returns the fitted weighted majority vote.
    pub fn hypothesis(&self) -> Result<&WeightedMajority<W::Hypothesis>> {
        if !self.fitted {
            return Err(BoostError::NotFitted);
        }
        Ok(&self.ensemble)
    }


    /// Consumes `self` and returns the fitted weighted majority vote.
    pub fn into_hypothesis(self) -> Result<WeightedMajority<W::Hypothesis>> {
        if !self.fitted {
            return Err(BoostError::NotFitted);
        }
        Ok(self.ensemble)
    }


    /// Returns the raw vote `sum(alpha[t] * h[t](x))` of each row.
    /// Useful for ranking metrics.
    pub fn confidence_all(&self, sample: &Sample) -> Result<Vec<f64>> {
        let f = self.checked_hypothesis(sample)?;
        Ok(f.confidence_all(sample))
    }


    /// Predicts the label of each row of `sample`.
    /// A zero vote is predicted as `+1`.
    pub fn predict(&self, sample: &Sample) -> Result<Vec<i64>> {
        let f = self.checked_hypothesis(sample)?;
        Ok(f.predict_all(sample))
    }


    fn checked_hypothesis(&self, sample: &Sample)
        -> Result<&WeightedMajority<W::Hypothesis>>
    {
        let f = self.hypothesis()?;

        let (n_sample, n_feature) = sample.shape();
        if n_sample > 0 && n_feature != self.n_feature {
            return Err(BoostError::invalid_input(format!(
                "expected {} features, got {n_feature}", self.n_feature
            )));
        }
        Ok(f)
    }


    fn reset(&mut self) {
        self.dist.clear();
        self.ensemble.clear();
        self.errors.clear();
        self.fitted = false;
        self.n_feature = 0;
    }
}


impl<W: WeakLearner> Booster for AdaBoost<W> {
    fn name(&self) -> &str {
        "AdaBoost"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("# of estimators", format!("{}", self.n_estimators)),
            ("Weak learner", self.weak_learner.name().to_string()),
        ]);
        Some(info)
    }


    fn preprocess(&mut self, sample: &Sample) -> Result<()> {
        self.reset();

        checkers::n_estimators(self.n_estimators)?;
        checkers::sample(sample)?;

        let (n_sample, n_feature) = sample.shape();
        let uni = 1f64 / n_sample as f64;
        self.dist = vec![uni; n_sample];
        self.ensemble = WeightedMajority::with_capacity(self.n_estimators);
        self.errors = Vec::with_capacity(self.n_estimators);
        self.n_feature = n_feature;

        Ok(())
    }


    fn boost(&mut self, sample: &Sample, iteration: usize)
        -> ControlFlow<Result<usize>>
    {
        // Get a new hypothesis
        let h = match self.weak_learner.produce(sample, &self.dist) {
            Ok(h) => h,
            Err(e) => {
                self.reset();
                return ControlFlow::Break(Err(BoostError::weak_learner(e)));
            },
        };


        // Each element in `margins` is the product of
        // the predicted label and the correct label.
        let margins = helpers::margins(sample, &h);

        let err = helpers::weighted_error(&margins, &self.dist);
        let alpha = helpers::alpha(err);


        helpers::update_distribution(&mut self.dist, &margins, alpha);
        debug_assert!(
            checkers::is_on_simplex(&self.dist),
            "the distribution is not normalized at round {iteration}"
        );

        self.ensemble.push(alpha, h);
        self.errors.push(err);

        if iteration >= self.n_estimators {
            return ControlFlow::Break(Ok(iteration));
        }
        ControlFlow::Continue(())
    }


    fn postprocess(&mut self) -> Result<()> {
        self.fitted = true;
        Ok(())
    }
}


impl<W> CurrentHypothesis for AdaBoost<W>
    where W: WeakLearner,
          W::Hypothesis: Clone,
{
    type Output = WeightedMajority<W::Hypothesis>;


    fn current_hypothesis(&self) -> Self::Output {
        self.ensemble.clone()
    }
}
