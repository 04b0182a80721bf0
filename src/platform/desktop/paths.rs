use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::infra::settings::project_dirs;

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    ensure_webview_data_dir(dirs.data_local_dir())
}
