use adaboost::prelude::*;
use adaboost::research::zero_one_loss;

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use std::cell::Cell;
use std::ops::ControlFlow;


/// The four-point sample `x = 0, 1, 2, 3` with labels `-1, -1, +1, +1`.
fn line() -> Sample {
    let x = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0]];
    let y = vec![-1.0, -1.0, 1.0, 1.0];
    Sample::from_rows(&x, &y).unwrap()
}


/// Two Gaussian blobs centered at `(-1.5, -1.5)` and `(1.5, 1.5)`.
fn blobs(n_sample: usize, seed: u64) -> Sample {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 1.0).unwrap();

    let mut x = Vec::with_capacity(n_sample);
    let mut y = Vec::with_capacity(n_sample);
    for i in 0..n_sample {
        let label = if i % 2 == 0 { 1.0 } else { -1.0 };
        let center = 1.5 * label;
        let row = vec![
            center + noise.sample(&mut rng),
            center + noise.sample(&mut rng),
        ];
        x.push(row);
        y.push(label);
    }
    Sample::from_rows(&x, &y).unwrap()
}


/// A hypothesis that predicts fixed labels, indexed by row.
#[derive(Debug, Clone)]
struct Fixed(Vec<i64>);


impl Classifier for Fixed {
    fn confidence(&self, _sample: &Sample, row: usize) -> f64 {
        self.0[row] as f64
    }
}


/// A weak learner that always returns the same `Fixed` hypothesis.
struct FixedLearner(Vec<i64>);


impl WeakLearner for FixedLearner {
    type Hypothesis = Fixed;
    type Error = TrainError;

    fn name(&self) -> &str {
        "Fixed"
    }

    fn produce(&self, _sample: &Sample, _dist: &[f64])
        -> Result<Self::Hypothesis, Self::Error>
    {
        Ok(Fixed(self.0.clone()))
    }
}


/// A weak learner that fails at the `fail_at`-th call.
struct FailingLearner {
    calls: Cell<usize>,
    fail_at: usize,
}


impl FailingLearner {
    fn new(fail_at: usize) -> Self {
        Self { calls: Cell::new(0), fail_at }
    }
}


impl WeakLearner for FailingLearner {
    type Hypothesis = DecisionStumpClassifier;
    type Error = TrainError;

    fn name(&self) -> &str {
        "Failing"
    }

    fn produce(&self, sample: &Sample, dist: &[f64])
        -> Result<Self::Hypothesis, Self::Error>
    {
        let calls = self.calls.get() + 1;
        self.calls.set(calls);
        if calls == self.fail_at {
            return Err(TrainError::InvalidDistribution("injected".into()));
        }
        DecisionStump::new().produce(sample, dist)
    }
}


#[test]
fn one_stump_separates_the_line() {
    let sample = line();
    let mut booster = AdaBoost::init(DecisionStump::new())
        .n_estimators(1);
    booster.fit(&sample).unwrap();

    let f = booster.hypothesis().unwrap();
    assert_eq!(f.len(), 1);

    let (alpha, stump) = f.iter().next().unwrap();
    assert_eq!(stump.feature_index, 0);
    assert_eq!(stump.threshold, 1.5);
    assert!(alpha > 0.0);
    assert_eq!(booster.weighted_errors(), &[0.0]);

    assert_eq!(booster.predict(&sample).unwrap(), vec![-1, -1, 1, 1]);
}


#[test]
fn zero_error_gives_a_dominant_alpha() {
    let sample = line();
    let mut booster = AdaBoost::init(DecisionStump::new())
        .n_estimators(1);
    booster.fit(&sample).unwrap();

    let alpha = booster.hypothesis().unwrap().weights[0];
    assert!(alpha.is_finite());
    assert!((-alpha).exp() < 1e-4, "alpha = {alpha}");
}


#[test]
fn ensemble_length_equals_n_estimators() {
    let sample = blobs(60, 7);
    for n_estimators in [1, 3, 10] {
        let mut booster = AdaBoost::init(DecisionStump::new())
            .n_estimators(n_estimators);
        booster.fit(&sample).unwrap();

        assert_eq!(booster.hypothesis().unwrap().len(), n_estimators);
        assert_eq!(booster.weighted_errors().len(), n_estimators);
    }
}


#[test]
fn distribution_stays_on_the_simplex() {
    let sample = blobs(50, 11);
    let mut booster = AdaBoost::init(DecisionStump::new())
        .n_estimators(20);

    booster.preprocess(&sample).unwrap();
    for iter in 1..=20 {
        let flow = booster.boost(&sample, iter);

        let dist = booster.distribution();
        let total = dist.iter().sum::<f64>();
        assert!((total - 1.0).abs() < 1e-9, "round {iter}: sum = {total}");
        assert!(dist.iter().all(|&d| d >= 0.0));

        if iter < 20 {
            assert!(matches!(flow, ControlFlow::Continue(())));
        } else {
            assert!(matches!(flow, ControlFlow::Break(Ok(20))));
        }
    }
    booster.postprocess().unwrap();
    assert!(booster.is_fitted());
}


#[test]
fn predict_is_idempotent() {
    let sample = blobs(40, 3);
    let mut booster = AdaBoost::init(DecisionStump::new())
        .n_estimators(5);
    booster.fit(&sample).unwrap();

    let first = booster.predict(&sample).unwrap();
    let second = booster.predict(&sample).unwrap();
    assert_eq!(first, second);

    let c1 = booster.confidence_all(&sample).unwrap();
    let c2 = booster.confidence_all(&sample).unwrap();
    assert_eq!(
        c1.iter().map(|c| c.to_bits()).collect::<Vec<_>>(),
        c2.iter().map(|c| c.to_bits()).collect::<Vec<_>>(),
    );
}


#[test]
fn confidence_agrees_with_predict() {
    let sample = blobs(40, 5);
    let mut booster = AdaBoost::init(DecisionStump::new())
        .n_estimators(8);
    booster.fit(&sample).unwrap();

    let confidences = booster.confidence_all(&sample).unwrap();
    let predictions = booster.predict(&sample).unwrap();
    for (c, p) in confidences.into_iter().zip(predictions) {
        let expected = if c >= 0.0 { 1 } else { -1 };
        assert_eq!(p, expected);
    }
}


#[test]
fn refit_replaces_the_ensemble() {
    let sample = blobs(40, 13);
    let mut booster = AdaBoost::init(DecisionStump::new())
        .n_estimators(4);

    booster.fit(&sample).unwrap();
    let first = booster.hypothesis().unwrap().clone();

    booster.fit(&sample).unwrap();
    assert_eq!(booster.hypothesis().unwrap().len(), 4);
    assert_eq!(booster.hypothesis().unwrap(), &first);

    let other = line();
    booster.fit(&other).unwrap();
    assert_eq!(booster.hypothesis().unwrap().len(), 4);
    assert_eq!(booster.distribution().len(), 4);
    assert_eq!(booster.predict(&other).unwrap(), vec![-1, -1, 1, 1]);
}


#[test]
fn predict_before_fit_fails() {
    let sample = line();
    let booster = AdaBoost::init(DecisionStump::new());

    assert!(matches!(booster.predict(&sample), Err(BoostError::NotFitted)));
    assert!(matches!(
        booster.confidence_all(&sample), Err(BoostError::NotFitted)
    ));
    assert!(matches!(booster.hypothesis(), Err(BoostError::NotFitted)));
}


#[test]
fn invalid_samples_are_rejected() {
    let mut booster = AdaBoost::init(DecisionStump::new());

    // Labels outside {-1, +1}.
    let x = vec![vec![0.0], vec![1.0]];
    let sample = Sample::from_rows(&x, [0.0, 1.0]).unwrap();
    assert!(matches!(booster.fit(&sample), Err(BoostError::InvalidInput(_))));

    // No target.
    let sample = Sample::from_rows(&x, Vec::<f64>::new()).unwrap();
    assert!(matches!(booster.fit(&sample), Err(BoostError::InvalidInput(_))));

    // No example.
    let sample = Sample::from_rows(Vec::<Vec<f64>>::new(), Vec::<f64>::new())
        .unwrap();
    assert!(matches!(booster.fit(&sample), Err(BoostError::InvalidInput(_))));

    assert!(!booster.is_fitted());
}


#[test]
fn zero_estimators_is_a_parameter_error() {
    let sample = line();
    let mut booster = AdaBoost::init(DecisionStump::new())
        .n_estimators(0);

    assert!(matches!(booster.fit(&sample), Err(BoostError::Parameters(_))));
}


#[test]
fn feature_count_must_match() {
    let sample = line();
    let mut booster = AdaBoost::init(DecisionStump::new())
        .n_estimators(2);
    booster.fit(&sample).unwrap();

    let wide = Sample::from_rows(
        vec![vec![0.0, 1.0], vec![2.0, 3.0]],
        Vec::<f64>::new(),
    ).unwrap();
    assert!(matches!(booster.predict(&wide), Err(BoostError::InvalidInput(_))));
}


#[test]
fn empty_batch_gives_empty_output() {
    let sample = line();
    let mut booster = AdaBoost::init(DecisionStump::new())
        .n_estimators(2);
    booster.fit(&sample).unwrap();

    // No rows means no columns either.
    let empty = Sample::from_rows(Vec::<Vec<f64>>::new(), Vec::<f64>::new())
        .unwrap();
    assert_eq!(empty.shape(), (0, 0));
    assert_eq!(booster.predict(&empty).unwrap(), Vec::<i64>::new());
    assert!(booster.confidence_all(&empty).unwrap().is_empty());

    let header_only = Sample::from_reader(
        std::io::BufReader::new(&b"x\n"[..]),
        true,
    ).unwrap();
    assert_eq!(header_only.shape(), (0, 1));
    assert_eq!(booster.predict(&header_only).unwrap(), Vec::<i64>::new());
}


#[test]
fn chance_level_hypothesis_gets_zero_weight() {
    let sample = line();
    let mut booster = AdaBoost::init(FixedLearner(vec![-1, 1, -1, 1]))
        .n_estimators(1);
    booster.fit(&sample).unwrap();

    assert_eq!(booster.weighted_errors(), &[0.5]);
    assert_eq!(booster.hypothesis().unwrap().weights, vec![0.0]);

    // The distribution is left unchanged.
    for d in booster.distribution() {
        assert!((d - 0.25).abs() < 1e-12);
    }
}


#[test]
fn always_wrong_hypothesis_is_inverted() {
    let sample = line();
    let mut booster = AdaBoost::init(FixedLearner(vec![1, 1, -1, -1]))
        .n_estimators(1);
    booster.fit(&sample).unwrap();

    assert_eq!(booster.weighted_errors(), &[1.0]);

    let alpha = booster.hypothesis().unwrap().weights[0];
    assert!(alpha.is_finite() && alpha < 0.0, "alpha = {alpha}");

    assert_eq!(booster.predict(&sample).unwrap(), vec![-1, -1, 1, 1]);
}


#[test]
fn weak_learner_failure_is_propagated() {
    let sample = blobs(20, 17);
    let mut booster = AdaBoost::init(FailingLearner::new(3))
        .n_estimators(5);

    let err = booster.fit(&sample).unwrap_err();
    match err {
        BoostError::WeakLearner(source) => {
            let source = source.downcast_ref::<TrainError>();
            assert_eq!(
                source,
                Some(&TrainError::InvalidDistribution("injected".into()))
            );
        },
        other => panic!("unexpected error: {other}"),
    }

    assert!(!booster.is_fitted());
    assert!(matches!(booster.predict(&sample), Err(BoostError::NotFitted)));
}


#[test]
fn failed_refit_discards_the_previous_ensemble() {
    let sample = blobs(20, 19);
    let mut booster = AdaBoost::init(FailingLearner::new(4))
        .n_estimators(3);

    // The first fit uses calls 1, 2, 3.
    booster.fit(&sample).unwrap();
    assert!(booster.is_fitted());

    // The second fit fails at call 4.
    assert!(booster.fit(&sample).is_err());
    assert!(matches!(booster.predict(&sample), Err(BoostError::NotFitted)));
}


#[test]
fn stumps_classify_gaussian_blobs() {
    let sample = blobs(300, 42);
    let (train, test) = sample.train_test_split(0.3, 0).unwrap();

    let mut booster = AdaBoost::init(DecisionStump::new())
        .n_estimators(30);
    booster.fit(&train).unwrap();

    let f = booster.hypothesis().unwrap();
    let train_loss = zero_one_loss(&train, f);
    let test_loss = zero_one_loss(&test, f);

    assert!(train_loss < 0.1, "train loss = {train_loss}");
    assert!(test_loss < 0.15, "test loss = {test_loss}");
}


#[test]
fn trees_classify_gaussian_blobs() {
    let sample = blobs(200, 23);
    let tree = DecisionTreeBuilder::new()
        .max_depth(2)
        .split_by(SplitBy::Gini)
        .build()
        .unwrap();

    let mut booster = AdaBoost::init(tree)
        .n_estimators(10);
    booster.fit(&sample).unwrap();

    let loss = zero_one_loss(&sample, booster.hypothesis().unwrap());
    assert!(loss < 0.1, "train loss = {loss}");
}


#[test]
fn fitted_ensemble_survives_json() {
    let sample = blobs(40, 29);
    let mut booster = AdaBoost::init(DecisionStump::new())
        .n_estimators(6);
    booster.fit(&sample).unwrap();

    let predictions = booster.predict(&sample).unwrap();
    let json = booster.into_hypothesis().unwrap().to_json().unwrap();

    let f = WeightedMajority::<DecisionStumpClassifier>::from_json(&json)
        .unwrap();
    assert_eq!(f.len(), 6);
    assert_eq!(f.predict_all(&sample), predictions);
}
