//! Parameters for a word-count run.
//!

use crate::error::{MrError, Result};

/// Default document: Pride and Prejudice on Project Gutenberg.
pub const DEFAULT_SOURCE: &str = "https://www.gutenberg.org/files/1342/1342-0.txt";

#[derive(Clone, Debug)]
pub struct MRParameters {
    pub mappers: usize,

    pub top_n: usize,

    pub chart_width: usize,
    pub chart_title: String,
    pub color: bool,

    pub fetch_timeout_secs: u64,
}

impl Default for MRParameters {
    fn default() -> MRParameters {
        MRParameters::new()
    }
}

impl MRParameters {
    pub fn new() -> MRParameters {
        MRParameters {
            mappers: 4,
            top_n: 10,
            chart_width: 50,
            chart_title: String::from("Top 10 Most Frequent Words"),
            color: true,
            fetch_timeout_secs: 60,
        }
    }

    /// Determines how many mapper threads run in parallel. This is also the number of base
    /// chunks the token stream is cut into (plus one chunk for any remainder).
    ///
    /// Default 4
    pub fn set_concurrency(mut self, mappers: usize) -> MRParameters {
        self.mappers = mappers;
        self
    }

    /// How many of the most frequent words end up in the chart. Also updates the chart title.
    ///
    /// Default 10
    pub fn set_top_n(mut self, n: usize) -> MRParameters {
        self.top_n = n;
        self.chart_title = format!("Top {} Most Frequent Words", n);
        self
    }

    /// Length of the longest bar in the text chart, in columns.
    ///
    /// Default 50
    pub fn set_chart_width(mut self, width: usize) -> MRParameters {
        self.chart_width = width;
        self
    }

    pub fn set_color(mut self, color: bool) -> MRParameters {
        self.color = color;
        self
    }

    /// Timeout for the whole HTTP request, in seconds.
    ///
    /// Default 60
    pub fn set_fetch_timeout(mut self, secs: u64) -> MRParameters {
        self.fetch_timeout_secs = secs;
        self
    }

    /// Number of mapper threads as the pool takes it. Fails if it is zero or does not fit
    /// a `u32`.
    pub fn pool_size(&self) -> Result<u32> {
        if self.mappers == 0 {
            return Err(MrError::InvalidParameter(String::from("number of threads must be positive")));
        }
        u32::try_from(self.mappers).map_err(|_| {
            MrError::InvalidParameter(format!("number of threads must be at most {}", u32::MAX))
        })
    }

    /// Checks that all counts are positive and the thread count fits the pool.
    pub fn validate(&self) -> Result<()> {
        self.pool_size()?;
        if self.top_n == 0 {
            return Err(MrError::InvalidParameter(String::from("top_n must be positive")));
        }
        if self.chart_width == 0 {
            return Err(MrError::InvalidParameter(String::from("chart width must be positive")));
        }
        Ok(())
    }
}
