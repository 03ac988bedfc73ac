use std::ops::Index;

use crate::constants::BUFFER_SIZE;


/// A dense feature column.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    name: String,
    vals: Vec<f64>,
}


impl Feature {
    /// Construct an empty column named `name`.
    pub fn new<T: ToString>(name: T) -> Self {
        Self {
            name: name.to_string(),
            vals: Vec::with_capacity(BUFFER_SIZE),
        }
    }


    /// Construct a column from the given values.
    pub fn from_vals<T: ToString>(name: T, vals: Vec<f64>) -> Self {
        Self { name: name.to_string(), vals, }
    }


    /// Returns the column name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the values as a slice.
    pub fn vals(&self) -> &[f64] {
        &self.vals[..]
    }


    /// Consumes `self` and returns the values.
    pub fn into_vals(self) -> Vec<f64> {
        self.vals
    }


    /// Append a value at the end of the column.
    pub fn append(&mut self, val: f64) {
        self.vals.push(val);
    }


    /// The number of values in this column.
    pub fn len(&self) -> usize {
        self.vals.len()
    }


    /// Returns `true` if the column has no value.
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }


    /// Returns the row indices sorted by ascending value.
    /// `NaN`s are placed at the end.
    pub fn sorted_indices(&self, indices: &[usize]) -> Vec<usize> {
        let mut ix = indices.to_vec();
        ix.sort_by(|&i, &j| self.vals[i].total_cmp(&self.vals[j]));
        ix
    }
}


impl Index<usize> for Feature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.vals[idx]
    }
}
