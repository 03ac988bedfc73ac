//! Struct `Sample` represents a batch sample.

/// Provides `Feature`, a named dense column.
pub mod feature;
/// Provides `Sample` and its constructors.
pub mod sample_struct;
/// Provides `SampleReader`, a builder that reads a CSV file.
pub mod reader;


pub use reader::SampleReader;
pub use sample_struct::Sample;
pub use feature::Feature;
