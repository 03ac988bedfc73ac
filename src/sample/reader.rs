use std::path::Path;

use super::sample_struct::Sample;
use crate::{BoostError, Result};


/// A struct that returns [`Sample`].
/// Using this struct, one can read a CSV format file to [`Sample`].
///
/// # Example
/// ```no_run
/// use adaboost::SampleReader;
/// let filename = "/path/to/csv/file.csv";
/// let sample = SampleReader::default()
///     .file(filename)
///     .has_header(true)
///     .target_feature("class")
///     .read()
///     .unwrap();
/// ```
#[derive(Default)]
pub struct SampleReader<P, S> {
    file: Option<P>,
    has_header: bool,
    target: Option<S>,
}


impl<P, S> SampleReader<P, S> {
    /// Set the flag whether the file has the header row or not.
    /// Default is `false.`
    pub fn has_header(mut self, flag: bool) -> Self {
        self.has_header = flag;
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>
{
    /// Set the file name.
    pub fn file(mut self, file: P) -> Self {
        self.file = Some(file);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where S: AsRef<str>
{
    /// Set the column name that is used for target label.
    /// The each item of the column takes value in `{-1, +1}.`
    pub fn target_feature(mut self, column: S) -> Self {
        self.target = Some(column);
        self
    }
}


impl<P, S> SampleReader<P, S>
    where P: AsRef<Path>,
          S: AsRef<str>
{
    /// Reads the file based on the arguments.
    /// This method consumes `self.`
    pub fn read(self) -> Result<Sample> {
        let file = self.file
            .ok_or_else(|| {
                BoostError::Parameters("the file name is not set".into())
            })?;
        let target = self.target
            .ok_or_else(|| {
                BoostError::Parameters(
                    "target (class) column is not specified. \
                     Use `SampleReader::target_feature`.".into()
                )
            })?;

        Sample::from_csv(file, self.has_header)?
            .set_target(target.as_ref())
    }
}
