//! Counts word frequencies of a text with a small map/shuffle/reduce pipeline
//! bounded to one machine, and renders the most frequent words as a bar chart.
//!
//! The mapping phase runs on a fixed-size thread pool; shuffling and reducing
//! happen on the calling thread once every mapper has finished.

pub mod chunker;
pub mod closure_mr;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod formats;
pub mod map;
pub mod mapreducer;
pub mod parameters;
pub mod record_types;
pub mod reduce;
pub mod shuffle;
pub mod sort;
pub mod tokenize;
pub mod wordcount;

pub use controller::MRController;
pub use error::{MrError, Result};
pub use parameters::MRParameters;
pub use record_types::WordCounts;
pub use wordcount::WordCount;
