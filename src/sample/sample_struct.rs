use std::path::Path;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::collections::HashMap;
use std::ops::Index;

use polars::prelude::*;
use rand::prelude::*;
use rand::rngs::StdRng;
use rayon::prelude::*;

use super::feature::*;
use crate::{BoostError, Result};


/// Struct `Sample` holds a batch sample with dense format.
/// Features are stored column-wise.
/// The target labels are expected to take values in `{-1, +1}`
/// when the sample is used for training.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name_to_index: HashMap<String, usize>,
    pub(super) features: Vec<Feature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a new [`Sample`] from row-major features and labels.
    /// Feature names are `Feat. [1]`, `Feat. [2]`, ...
    ///
    /// Pass an empty `target` to construct an unlabeled sample
    /// (e.g., a sample used only for prediction).
    /// An empty `rows` yields a sample with no feature.
    ///
    /// Returns [`BoostError::InvalidInput`]
    /// if the rows have different lengths or
    /// `target` is non-empty and its length differs from `rows`.
    pub fn from_rows<R, T>(rows: R, target: T) -> Result<Self>
        where R: AsRef<[Vec<f64>]>,
              T: AsRef<[f64]>,
    {
        let rows = rows.as_ref();
        let target = target.as_ref();
        let n_sample = rows.len();
        let n_feature = rows.first().map(|row| row.len()).unwrap_or(0);

        if let Some((i, row)) = rows.iter()
            .enumerate()
            .find(|(_, row)| row.len() != n_feature)
        {
            return Err(BoostError::invalid_input(format!(
                "row {i} has {} features, expected {n_feature}",
                row.len(),
            )));
        }

        if !target.is_empty() && target.len() != n_sample {
            return Err(BoostError::invalid_input(format!(
                "the number of labels ({}) differs from \
                 the number of examples ({n_sample})",
                target.len(),
            )));
        }

        let features = (0..n_feature).into_par_iter()
            .map(|j| {
                let vals = rows.iter().map(|row| row[j]).collect();
                Feature::from_vals(format!("Feat. [{}]", j + 1), vals)
            })
            .collect::<Vec<_>>();

        let name_to_index = index_by_name(&features);

        let sample = Self {
            name_to_index,
            features,
            target: target.to_vec(),
            n_sample,
            n_feature,
        };
        Ok(sample)
    }


    /// Read a CSV format file to [`Sample`] type.
    /// This method returns `Err` if the file does not exist.
    ///
    /// **Do not forget** to call [`Sample::set_target`] to
    /// assign the class label.
    pub fn from_csv<P>(file: P, has_header: bool) -> Result<Self>
        where P: AsRef<Path>,
    {
        // Open the given `file`.
        let file = File::open(file)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader, has_header)
    }


    /// Read comma-separated values from [`BufReader`].
    ///
    /// If the input does not have a header row,
    /// this method assigns a default name for each column:
    /// `Feat. [1]`, `Feat. [2]`, ..., `Feat. [n]`.
    /// Empty lines are skipped.
    pub fn from_reader<R>(reader: BufReader<R>, has_header: bool)
        -> Result<Self>
        where R: Read,
    {
        let mut features: Option<Vec<Feature>> = None;
        let mut n_sample = 0_usize;

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = i + 1;
            if line.trim().is_empty() { continue; }

            if has_header && features.is_none() {
                let header = line.split(',')
                    .map(|name| Feature::new(name.trim()))
                    .collect::<Vec<_>>();
                features = Some(header);
                continue;
            }

            let xs = line.split(',')
                .map(|x| {
                    x.trim().parse::<f64>()
                        .map_err(|_| BoostError::Parse {
                            line: line_no,
                            value: x.trim().to_string(),
                        })
                })
                .collect::<Result<Vec<_>>>()?;

            // if the header does not exist,
            // construct a dummy header.
            let features = features.get_or_insert_with(|| {
                (1..=xs.len()).map(|k| Feature::new(format!("Feat. [{k}]")))
                    .collect()
            });

            if xs.len() != features.len() {
                return Err(BoostError::invalid_input(format!(
                    "line {line_no} has {} columns, expected {}",
                    xs.len(),
                    features.len(),
                )));
            }

            features.iter_mut()
                .zip(xs)
                .for_each(|(feat, x)| { feat.append(x); });
            n_sample += 1;
        }

        let features = features.unwrap_or_default();
        let n_feature = features.len();
        let name_to_index = index_by_name(&features);

        let sample = Self {
            name_to_index,
            features,
            target: Vec::with_capacity(0),
            n_sample,
            n_feature,
        };
        Ok(sample)
    }


    /// Convert `polars::DataFrame` into [`Sample`].
    /// The column named `target` is used as the label.
    /// Every column is cast to `f64`;
    /// null values are rejected.
    pub fn from_dataframe(data: &DataFrame, target: &str) -> Result<Self> {
        let n_sample = data.height();

        let to_vals = |series: &Series| -> Result<Vec<f64>> {
            let name = series.name().to_string();
            series.cast(&DataType::Float64)?
                .f64()?
                .into_iter()
                .collect::<Option<Vec<f64>>>()
                .ok_or_else(|| {
                    BoostError::invalid_input(format!(
                        "the column `{name}` contains null values"
                    ))
                })
        };

        let target_vals = to_vals(data.column(target)?)?;

        let features = data.get_columns()
            .iter()
            .filter(|series| series.name() != target)
            .map(|series| {
                let vals = to_vals(series)?;
                Ok(Feature::from_vals(series.name(), vals))
            })
            .collect::<Result<Vec<_>>>()?;

        let n_feature = features.len();
        let name_to_index = index_by_name(&features);

        let sample = Self {
            name_to_index,
            features,
            target: target_vals,
            n_sample,
            n_feature,
        };
        Ok(sample)
    }


    /// Returns the slice of target values.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns the unique target values in ascending order.
    pub fn unique_target(&self) -> Vec<f64> {
        let mut target = self.target().to_vec();
        target.sort_by(|a, b| a.total_cmp(b));

        target.dedup();
        target
    }


    /// Returns a slice of the features.
    pub fn features(&self) -> &[Feature] {
        &self.features[..]
    }


    /// Returns the `j`-th feature.
    pub fn feature(&self, j: usize) -> &Feature {
        &self.features[j]
    }


    /// Set the feature of name `target` to `self.target`.
    /// The old value assigned to `self.target` will be dropped.
    pub fn set_target<S: AsRef<str>>(mut self, target: S) -> Result<Self> {
        let target = target.as_ref();
        let pos = self.features.iter()
            .position(|feat| feat.name() == target)
            .ok_or_else(|| {
                BoostError::invalid_input(format!(
                    "the target column \"{target}\" does not exist"
                ))
            })?;

        self.target = self.features.remove(pos).into_vals();
        self.n_feature -= 1;
        self.name_to_index = index_by_name(&self.features);

        Ok(self)
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the `idx`-th instance `(x, y)`.
    /// `y` is `NaN` if the target is not set.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target.get(idx).copied().unwrap_or(f64::NAN);

        (x, y)
    }


    /// Check whether `self` is
    /// a training set for binary classification or not.
    /// The sample must be non-empty,
    /// the number of labels must equal the number of examples,
    /// and every label must be `-1` or `+1`.
    pub fn is_valid_binary_instance(&self) -> Result<()> {
        if self.n_sample == 0 {
            return Err(BoostError::invalid_input("the sample is empty"));
        }

        if self.n_sample != self.target.len() {
            return Err(BoostError::invalid_input(format!(
                "the sample has {} examples but {} labels. \
                 Use `Sample::set_target(\"Column Name\")`.",
                self.n_sample,
                self.target.len(),
            )));
        }

        let invalid = self.target.iter()
            .filter(|&&y| y != 1.0 && y != -1.0)
            .take(5)
            .map(|y| y.to_string())
            .collect::<Vec<_>>();
        if !invalid.is_empty() {
            let line = invalid.join(", ");
            return Err(BoostError::invalid_input(format!(
                "labels must be -1 or +1. got [{line}, ...]"
            )));
        }

        Ok(())
    }


    /// Split `self` into two samples.
    /// The examples `ix[start..end]` go to the second sample,
    /// the rest go to the first one.
    pub fn split<T>(&self, ix: T, start: usize, end: usize)
        -> Result<(Sample, Sample)>
        where T: AsRef<[usize]>
    {
        let ix = ix.as_ref();
        if start > end || end > ix.len() {
            return Err(BoostError::invalid_input(format!(
                "invalid range {start}..{end} for {} indices",
                ix.len(),
            )));
        }
        if let Some(&i) = ix.iter().find(|&&i| i >= self.n_sample) {
            return Err(BoostError::invalid_input(format!(
                "index {i} is out of range for {} examples",
                self.n_sample,
            )));
        }

        let train_ix = ix[..start].iter()
            .chain(&ix[end..])
            .copied()
            .collect::<Vec<_>>();
        let test_ix = &ix[start..end];

        Ok((self.subsample(&train_ix), self.subsample(test_ix)))
    }


    /// Shuffle the examples with the given seed and
    /// split them into a training and a test sample.
    /// The test sample has `floor(test_ratio * n_sample)` examples.
    pub fn train_test_split(&self, test_ratio: f64, seed: u64)
        -> Result<(Sample, Sample)>
    {
        if !(0.0..=1.0).contains(&test_ratio) {
            return Err(BoostError::Parameters(format!(
                "test ratio must be in [0, 1]. got {test_ratio}"
            )));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut ix = (0..self.n_sample).collect::<Vec<usize>>();
        ix.shuffle(&mut rng);

        let n_test = (test_ratio * self.n_sample as f64).floor() as usize;
        self.split(ix, 0, n_test)
    }


    fn subsample(&self, ix: &[usize]) -> Sample {
        let features = self.features.par_iter()
            .map(|feat| {
                let vals = ix.iter().map(|&i| feat[i]).collect();
                Feature::from_vals(feat.name(), vals)
            })
            .collect::<Vec<_>>();

        let target = if self.target.is_empty() {
            Vec::with_capacity(0)
        } else {
            ix.iter().map(|&i| self.target[i]).collect()
        };

        Self {
            name_to_index: self.name_to_index.clone(),
            features,
            target,
            n_sample: ix.len(),
            n_feature: self.n_feature,
        }
    }
}


fn index_by_name(features: &[Feature]) -> HashMap<String, usize> {
    features.iter()
        .enumerate()
        .map(|(i, f)| (f.name().to_string(), i))
        .collect()
}


impl<S> Index<S> for Sample
    where S: AsRef<str>
{
    type Output = Feature;

    fn index(&self, name: S) -> &Self::Output {
        let name: &str = name.as_ref();
        let k = *self.name_to_index.get(name)
            .unwrap_or_else(|| panic!("no feature named `{name}`"));
        &self.features[k]
    }
}
