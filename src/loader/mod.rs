//! Training data loaders.
//!
//! A loader turns labeled records into a [`SampleSet`](crate::classifier::SampleSet),
//! the only input bulk training accepts. Any read or parse failure is
//! returned as an error; callers must not train on a partial set.

pub mod csv;

pub use self::csv::CsvSampleLoader;
