use thiserror::Error;

use crate::domain::entities::record::RowRecord;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset is not a JSON array of rows: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0} cannot be loaded on this platform")]
    Unsupported(String),
}

/// Produces the full dataset once, at page mount.
#[allow(async_fn_in_trait)]
pub trait DatasetSource {
    fn describe(&self) -> String;

    async fn fetch_rows(&self) -> Result<Vec<RowRecord>, SourceError>;
}
