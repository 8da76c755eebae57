//! Error types for the export pipeline.

use std::path::PathBuf;

use mesh_io::IoError;
use thiserror::Error;

/// Failure retrieving the source text.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be built, sent, or its body read.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Requested URL.
        url: String,
        /// Underlying client error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// A local source file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Source path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid UTF-8.
    #[error("{origin} is not valid UTF-8: {source}")]
    Decode {
        /// URL or path the bytes came from.
        origin: String,
        /// Decoding error.
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Failure in one stage of the export pipeline.
///
/// Every variant is fatal; the pipeline never retries or recovers.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The source could not be retrieved. Nothing was written.
    #[error("fetch failed")]
    Fetch(#[from] FetchError),

    /// The source text is malformed. Nothing was written.
    #[error("parse failed")]
    Parse(#[source] IoError),

    /// The output file could not be written.
    #[error("write failed")]
    Write(#[source] IoError),
}
