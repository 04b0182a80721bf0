use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::usecase::services::row_model::DEFAULT_PAGE_SIZE;

pub const MAX_PAGE_SIZE: usize = 100;
const SETTINGS_FILE: &str = "settings.json";

#[cfg(not(target_arch = "wasm32"))]
fn default_data_source() -> String {
    "assets/sample-data.json".to_string()
}

/// The bundled sample as served by the web build, an origin-relative path.
#[cfg(target_arch = "wasm32")]
fn default_data_source() -> String {
    dioxus::prelude::asset!("/assets/sample-data.json").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    pub data_source: String,
    pub page_size: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            data_source: default_data_source(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl GridSettings {
    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        if self.data_source.trim().is_empty() {
            self.data_source = default_data_source();
        }
        self
    }
}

pub fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "productgrid", "product-grid")
        .ok_or_else(|| anyhow!("unable to resolve project directories"))
}

pub fn default_settings_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join(SETTINGS_FILE))
}

/// `Ok(None)` when the file does not exist.
pub fn load_from(path: &Path) -> Result<Option<GridSettings>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings: {}", path.display()))?;
    let settings: GridSettings = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse settings: {}", path.display()))?;
    Ok(Some(settings.normalized()))
}

/// Never fails: a missing or broken settings file falls back to defaults.
pub fn load_or_default() -> GridSettings {
    let loaded = default_settings_path().and_then(|path| {
        let settings = load_from(&path)?;
        Ok((path, settings))
    });
    match loaded {
        Ok((path, Some(settings))) => {
            info!(path = %path.display(), "loaded settings");
            settings
        }
        Ok((_, None)) => GridSettings::default(),
        Err(err) => {
            warn!(error = %format!("{err:#}"), "using default settings");
            GridSettings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_test_dir(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after epoch")
            .as_nanos();
        std::env::temp_dir().join(format!("product-grid-{prefix}-{nanos}"))
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let temp_dir = unique_test_dir("settings-missing");
        let loaded = load_from(&temp_dir.join(SETTINGS_FILE)).expect("missing file is fine");
        assert_eq!(loaded, None);
    }

    #[test]
    fn partial_file_fills_in_defaults_and_clamps_page_size() {
        let temp_dir = unique_test_dir("settings-partial");
        fs::create_dir_all(&temp_dir).expect("should create temp dir");
        let path = temp_dir.join(SETTINGS_FILE);
        fs::write(&path, r#"{"page_size": 500}"#).expect("should write settings");

        let loaded = load_from(&path)
            .expect("settings should parse")
            .expect("settings file exists");

        assert_eq!(loaded.page_size, MAX_PAGE_SIZE);
        assert_eq!(loaded.data_source, GridSettings::default().data_source);
        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }

    #[test]
    fn zero_page_size_and_blank_source_are_normalized() {
        let temp_dir = unique_test_dir("settings-zero");
        fs::create_dir_all(&temp_dir).expect("should create temp dir");
        let path = temp_dir.join(SETTINGS_FILE);
        fs::write(&path, r#"{"data_source": "  ", "page_size": 0}"#)
            .expect("should write settings");

        let loaded = load_from(&path)
            .expect("settings should parse")
            .expect("settings file exists");

        assert_eq!(loaded.page_size, 1);
        assert_eq!(loaded.data_source, default_data_source());
        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }

    #[test]
    fn malformed_file_reports_path_in_error() {
        let temp_dir = unique_test_dir("settings-broken");
        fs::create_dir_all(&temp_dir).expect("should create temp dir");
        let path = temp_dir.join(SETTINGS_FILE);
        fs::write(&path, "{not json").expect("should write settings");

        let err = load_from(&path).expect_err("malformed settings should fail");

        assert!(err.to_string().contains("failed to parse settings"));
        fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    }
}
