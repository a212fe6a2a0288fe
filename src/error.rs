//! Error type shared by every phase of a run.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MrError>;

#[derive(Error, Debug)]
pub enum MrError {
    #[error("failed to fetch {location}: {reason}")]
    Fetch { location: String, reason: String },

    #[error("HTTP {status} while fetching {url}")]
    Status { url: String, status: u16 },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("mapper failed on chunk {chunk}: {reason}")]
    Worker { chunk: usize, reason: String },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("failed to render chart: {0}")]
    Render(#[from] io::Error),
}
