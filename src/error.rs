//! Error types for loading portfolio data and driving the terminal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A document was fetched but is not valid JSON of the expected shape.
    #[error("Failed to parse {document}: {source}")]
    Parse {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to fetch {document}: {source}")]
    Http {
        document: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Fetching {document} returned status {status}")]
    Status { document: String, status: u16 },
}

pub type Result<T> = std::result::Result<T, FolioError>;
