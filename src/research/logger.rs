use colored::Colorize;

use crate::{
    Booster,
    Classifier,
    Result,
    Sample,
};
use super::ObjectiveFunction;

use std::fs::File;
use std::io::{BufWriter, prelude::*};
use std::path::Path;
use std::time::Instant;
use std::ops::ControlFlow;

pub(super) const DEFAULT_ROUND: usize = 100;
const WIDTH: usize = 8;
const PREC_WIDTH: usize = 5;
const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const HEADER: &str = "ObjectiveValue,TrainLoss,TestLoss,Time\n";


/// Implementing this trait allows you to use `Logger` to
/// log algorithm's behavor.
pub trait CurrentHypothesis {
    /// The combined hypothesis type.
    type Output;

    /// Returns the combined hypothesis at current state.
    fn current_hypothesis(&self) -> Self::Output;
}


/// Struct `Logger` provides a generic function that
/// logs objective value, train/test loss value, and running time
/// for each step of boosting.
/// Construct it with [`LoggerBuilder`](super::LoggerBuilder).
pub struct Logger<'a, B, F, G> {
    pub(super) booster: B,
    pub(super) objective_func: F,
    pub(super) loss_func: G,
    pub(super) train: &'a Sample,
    pub(super) test: &'a Sample,
    pub(super) round: usize,
}


impl<B, F, G> Logger<'_, B, F, G> {
    /// Returns the booster.
    pub fn booster(&self) -> &B {
        &self.booster
    }


    /// Consumes `self` and returns the booster.
    pub fn into_booster(self) -> B {
        self.booster
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


    #[inline(always)]
    fn is_verbose(&self) -> bool {
        self.round != usize::MAX && self.round != 0
    }
}


impl<B, F, G, S> Logger<'_, B, F, G>
    where B: Booster + CurrentHypothesis<Output = S>,
          S: Classifier,
          F: ObjectiveFunction,
          G: Fn(&Sample, &S) -> f64,
{
    #[inline(always)]
    fn print_log_header(&self) {
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}",
            "".bold().red(),
            "OBJ.".bold().blue(),
            "TRAIN".bold().green(),
            "TEST".bold().yellow(),
            "ACC.".bold().cyan(),
        );
        println!(
            "      {:>WIDTH$}\t\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\t{:>WIDTH$}\n",
            "ROUND".bold().red(),
            "VALUE".bold().blue(),
            "ERROR".bold().green(),
            "ERROR".bold().yellow(),
            "TIME".bold().cyan(),
        );
    }


    /// print current settings.
    #[inline(always)]
    fn print_stats(&self) {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        println!(
            "\n{header}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Booster".bold(),
            self.booster.name().bold().green(),
        );

        if let Some(info) = self.booster.info() {
            let line = info.into_iter()
                .map(|(key, val)| {
                    format!(
                        "    + {:<STAT_WIDTH$}\t{:>width$}",
                        key,
                        val.bold().yellow(),
                        width = STAT_WIDTH - 8
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            println!("{line}");
        }

        let (n_train, n_feature) = self.train.shape();
        let n_test = self.test.shape().0;
        println!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}\n\
            ",
            "Objective".bold(),
            self.objective_func.name().bold().green(),
            "Train size".bold(),
            format!("{n_train} x {n_feature}").bold().green(),
            "Test size".bold(),
            format!("{n_test}").bold().green(),
            "".bold(),
        );
    }


    /// Run the given boosting algorithm with logging.
    /// Note that this method is almost the same as `Booster::fit`.
    /// This method measures running time per iteration
    /// and writes a line of the form
    /// `ObjectiveValue,TrainLoss,TestLoss,Time` to `filename`
    /// after every round.
    pub fn run<P: AsRef<Path>>(&mut self, filename: P) -> Result<()> {
        // Open file
        let mut file = BufWriter::new(File::create(filename)?);

        // Write header to the file
        file.write_all(HEADER.as_bytes())?;

        // ---------------------------------------------------------------------
        // Pre-processing
        self.booster.preprocess(self.train)?;

        let verbose = self.is_verbose();
        if verbose {
            self.print_stats();
            self.print_log_header();
        }

        // Cumulative time
        let mut time_acc = 0;

        // ---------------------------------------------------------------------
        // Boosting step
        let flow = (1..).try_for_each(|iter| {
            // Start measuring time
            let now = Instant::now();

            let flow = self.booster.boost(self.train, iter);

            // Stop measuring and convert `Duration` to Milliseconds.
            let time = now.elapsed().as_millis();

            if let ControlFlow::Break(Err(_)) = flow {
                return flow;
            }

            // Update the cumulative time
            time_acc += time;

            let f = self.booster.current_hypothesis();
            let obj = self.objective_func.objective_value(self.train, &f);

            let train = (self.loss_func)(self.train, &f);
            let test = (self.loss_func)(self.test, &f);

            // Write the results to `file`.
            let line = format!("{obj},{train},{test},{time_acc}\n");
            if let Err(e) = file.write_all(line.as_bytes()) {
                return ControlFlow::Break(Err(e.into()));
            }

            if verbose && iter % self.round == 0 {
                println!(
                    "{} {}\t\t{}\t{}\t{}\t{}",
                    "[LOG]".bold().magenta(),
                    format!("{:>WIDTH$}", iter).red(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", obj).blue(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", train).green(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", test).yellow(),
                    time_format(time_acc).bold().cyan(),
                );
            }

            if flow.is_break() && verbose {
                println!(
                    "{} {}\t\t{}\t{}\t{}\t{}\n",
                    "[FIN]".bold().bright_green(),
                    format!("{:>WIDTH$}", iter).red(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", obj).bold().blue(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", train).bold().green(),
                    format!("{:>WIDTH$.PREC_WIDTH$}", test).bold().yellow(),
                    time_format(time_acc).bold().cyan(),
                );
            }
            flow
        });

        if let ControlFlow::Break(Err(e)) = flow {
            return Err(e);
        }

        file.flush()?;
        self.booster.postprocess()
    }
}


/// Formats milliseconds for the progress lines.
fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    if min < 60 {
        return format!(" {:0>2}m {:0>2}s", min, sec);
    }
    let hours = min / 60;
    let min = min % 60;
    format!(" {:0>2}h {:0>2}m", hours, min)
}
