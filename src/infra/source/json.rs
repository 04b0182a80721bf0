use std::path::PathBuf;

use tracing::info;

use crate::domain::entities::record::RowRecord;
use crate::usecase::ports::source::{DatasetSource, SourceError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    Url(String),
    File(PathBuf),
}

impl DatasetLocation {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DatasetLocation::Url(trimmed.to_string())
        } else {
            DatasetLocation::File(PathBuf::from(trimmed))
        }
    }

    /// Like `parse`, but a relative location becomes a URL under `origin`.
    /// The browser has no file system, so paths there name served files.
    pub fn parse_on_origin(raw: &str, origin: &str) -> Self {
        match Self::parse(raw) {
            DatasetLocation::File(path) => {
                let path = path.to_string_lossy();
                let path = path.trim_start_matches("./").trim_start_matches('/');
                DatasetLocation::Url(format!("{}/{path}", origin.trim_end_matches('/')))
            }
            url => url,
        }
    }
}

impl std::fmt::Display for DatasetLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetLocation::Url(url) => write!(f, "{url}"),
            DatasetLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Reads the dataset as one JSON array of rows, over HTTP or from disk.
pub struct JsonDatasetSource {
    location: DatasetLocation,
    client: reqwest::Client,
}

impl JsonDatasetSource {
    pub fn new(location: DatasetLocation) -> Self {
        Self {
            location,
            client: reqwest::Client::new(),
        }
    }

    pub fn location(&self) -> &DatasetLocation {
        &self.location
    }

    async fn fetch_url(&self, url: &str) -> Result<String, SourceError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| SourceError::Http {
                url: url.to_string(),
                message: err.to_string(),
            })?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        response.text().await.map_err(|err| SourceError::Http {
            url: url.to_string(),
            message: err.to_string(),
        })
    }
}

impl DatasetSource for JsonDatasetSource {
    fn describe(&self) -> String {
        self.location.to_string()
    }

    async fn fetch_rows(&self) -> Result<Vec<RowRecord>, SourceError> {
        let body = match &self.location {
            DatasetLocation::Url(url) => self.fetch_url(url).await?,
            DatasetLocation::File(path) => read_file(path)?,
        };
        let rows = parse_rows(&body)?;
        info!(source = %self.location, rows = rows.len(), "dataset loaded");
        Ok(rows)
    }
}

pub fn parse_rows(body: &str) -> Result<Vec<RowRecord>, SourceError> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_file(path: &std::path::Path) -> Result<String, SourceError> {
    std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(target_arch = "wasm32")]
fn read_file(path: &std::path::Path) -> Result<String, SourceError> {
    Err(SourceError::Unsupported(path.display().to_string()))
}
