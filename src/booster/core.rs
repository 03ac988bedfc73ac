//! Provides `Booster` trait.
use crate::{Result, Sample};

use std::ops::ControlFlow;


/// The trait [`Booster`] defines the standard framework of Boosting.
///
/// You need to implement [`Booster::preprocess`],
/// [`Booster::boost`],
/// and [`Booster::postprocess`]
/// to write a new boosting algorithm.
pub trait Booster {
    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str;


    /// Returns the hyperparameters of the boosting algorithm
    /// as `(name, value)` pairs.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// A main function that runs boosting algorithm.
    /// Any previous training state is discarded.
    /// On failure, `self` is left unfitted.
    fn fit(&mut self, sample: &Sample) -> Result<()> {
        self.preprocess(sample)?;

        let flow = (1..).try_for_each(|iter| self.boost(sample, iter));

        if let ControlFlow::Break(Err(e)) = flow {
            return Err(e);
        }

        self.postprocess()
    }


    /// Pre-processing for `self`.
    /// As you can see in [`Booster::fit`],
    /// this method is called before the boosting process.
    /// It validates `sample` and resets the training state.
    fn preprocess(&mut self, sample: &Sample) -> Result<()>;


    /// Boosting step per iteration.
    /// `iteration` starts from `1`.
    /// This method returns
    /// `ControlFlow::Continue(())` if the boosting process continues,
    /// `ControlFlow::Break(Ok(terminated_iter))` if it has finished, and
    /// `ControlFlow::Break(Err(_))` if it has failed.
    fn boost(&mut self, sample: &Sample, iteration: usize)
        -> ControlFlow<Result<usize>>;


    /// Post-processing.
    /// Marks the training state as complete.
    fn postprocess(&mut self) -> Result<()>;
}
