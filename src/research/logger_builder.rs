use crate::{BoostError, Result, Sample};
use super::Logger;
use super::logger::DEFAULT_ROUND;


/// `LoggerBuilder` is a struct to construct `Logger.`
/// You need to specify the followings:
///
/// - Booster (Boosting algorithm, holding its weak learner),
/// - Objective function,
/// - Loss function,
/// - Training examples,
/// - Test examples, and
/// - Round (The log text is shown for every **round** you specified).
///
/// # Example
/// ```no_run
/// use adaboost::prelude::*;
/// use adaboost::research::{
///     LoggerBuilder,
///     ExponentialLoss,
///     zero_one_loss,
/// };
///
/// let has_header = true;
/// let train = Sample::from_csv("path/to/train.csv", has_header)
///     .expect("Failed to read the training sample")
///     .set_target("class")
///     .unwrap();
/// let test = Sample::from_csv("path/to/test.csv", has_header)
///     .expect("Failed to read the test sample")
///     .set_target("class")
///     .unwrap();
///
/// let tree = DecisionTreeBuilder::new()
///     .max_depth(2)
///     .split_by(SplitBy::Entropy)
///     .build()
///     .unwrap();
/// let adaboost = AdaBoost::init(tree)
///     .n_estimators(100);
///
/// type F = WeightedMajority<DecisionTreeClassifier>;
///
/// let mut logger = LoggerBuilder::new()
///     .booster(adaboost)
///     .train_sample(&train)
///     .test_sample(&test)
///     .objective_function(ExponentialLoss::new())
///     .loss_function(zero_one_loss::<F>)
///     .print_every(10)
///     .build()
///     .unwrap();
///
/// logger.run("output.csv")
///     .expect("Failed to run the boosting algorithm");
/// ```
pub struct LoggerBuilder<'a, B, F, G> {
    booster: Option<B>,
    objective_func: Option<F>,
    loss_func: Option<G>,
    train: Option<&'a Sample>,
    test: Option<&'a Sample>,
    round: usize,
}


impl<'a, B, F, G> LoggerBuilder<'a, B, F, G> {
    /// Construct a new instance of `LoggerBuilder.`
    pub fn new() -> Self {
        Self {
            booster: None,
            objective_func: None,
            loss_func: None,
            train: None,
            test: None,
            round: DEFAULT_ROUND,
        }
    }


    /// Set the boosting algorithm.
    pub fn booster(mut self, booster: B) -> Self {
        self.booster = Some(booster);
        self
    }


    /// Set the objective function for the boosting algorithm.
    pub fn objective_function(mut self, objective_func: F) -> Self {
        self.objective_func = Some(objective_func);
        self
    }


    /// Set the loss function.
    pub fn loss_function(mut self, loss_func: G) -> Self {
        self.loss_func = Some(loss_func);
        self
    }


    /// Set the training sample.
    pub fn train_sample(mut self, train: &'a Sample) -> Self {
        self.train = Some(train);
        self
    }


    /// Set the test sample.
    pub fn test_sample(mut self, test: &'a Sample) -> Self {
        self.test = Some(test);
        self
    }


    /// Set the interval to print the current status.
    /// By default, the method `run` prints its status every `100` rounds.
    /// If you don't want to print the log,
    /// set `usize::MAX`.
    #[inline(always)]
    pub fn print_every(mut self, round: usize) -> Self {
        self.round = round;
        self
    }


    /// Build [`Logger`] from the given components.
    /// Returns `BoostError::Parameters` if a component is missing.
    pub fn build(self) -> Result<Logger<'a, B, F, G>> {
        let booster = self.booster
            .ok_or_else(|| missing("boosting algorithm"))?;
        let objective_func = self.objective_func
            .ok_or_else(|| missing("objective function"))?;
        let loss_func = self.loss_func
            .ok_or_else(|| missing("loss function"))?;
        let train = self.train
            .ok_or_else(|| missing("training sample"))?;
        let test = self.test
            .ok_or_else(|| missing("test sample"))?;
        let round = self.round;

        Ok(Logger {
            booster,
            objective_func,
            loss_func,
            train,
            test,
            round,
        })
    }
}


impl<B, F, G> Default for LoggerBuilder<'_, B, F, G> {
    fn default() -> Self {
        Self::new()
    }
}


fn missing(component: &str) -> BoostError {
    BoostError::Parameters(format!("{component} is not specified"))
}
