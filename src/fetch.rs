//! Retrieves the document to be counted, either over HTTP(S) or from a local file.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{MrError, Result};

/// Where the document comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    /// Anything starting with `http://` or `https://` is a URL; everything else is a path.
    pub fn parse(location: &str) -> Source {
        if location.starts_with("http://") || location.starts_with("https://") {
            Source::Url(String::from(location))
        } else {
            Source::File(PathBuf::from(location))
        }
    }
}

/// Reads the whole document into memory. Any failure, including a non-success HTTP status,
/// is returned before any text is handed out.
pub fn fetch_text(source: &Source, timeout: Duration) -> Result<String> {
    match source {
        Source::Url(url) => fetch_url(url, timeout),
        Source::File(path) => {
            log::info!("reading {}", path.display());
            fs::read_to_string(path).map_err(|e| MrError::Io { path: path.clone(), source: e })
        }
    }
}

fn fetch_url(url: &str, timeout: Duration) -> Result<String> {
    let fetch_err = |e: reqwest::Error| MrError::Fetch { location: String::from(url), reason: e.to_string() };

    log::info!("fetching {}", url);
    let client = Client::builder().timeout(timeout).build().map_err(fetch_err)?;
    let response = client.get(url).send().map_err(fetch_err)?;

    if !response.status().is_success() {
        return Err(MrError::Status { url: String::from(url), status: response.status().as_u16() });
    }

    let text = response.text().map_err(fetch_err)?;
    log::debug!("fetched {} bytes from {}", text.len(), url);
    Ok(text)
}
