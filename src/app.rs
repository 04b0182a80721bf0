use dioxus::prelude::*;
use tracing::error;
#[cfg(target_arch = "wasm32")]
use tracing::warn;

use crate::infra::settings;
use crate::infra::source::json::{DatasetLocation, JsonDatasetSource};
use crate::ui::components::data_grid::DataGrid;
use crate::ui::components::pagination::PaginationBar;
use crate::ui::components::side_drawer::SideDrawer;
use crate::ui::components::toolbar::Toolbar;
use crate::ui::state::app_state::AppState;
use crate::ui::styles::root_container_style;
use crate::usecase::ports::source::DatasetSource;

#[component]
pub fn App() -> Element {
    let settings = use_hook(settings::load_or_default);
    let state = AppState::new(settings.page_size);
    let AppState {
        mut grid,
        mut panel,
        mut loading,
        mut status,
        ..
    } = state;

    let data_source = settings.data_source.clone();
    use_future(move || {
        let data_source = data_source.clone();
        async move {
            let source = JsonDatasetSource::new(dataset_location(&data_source).await);
            match source.fetch_rows().await {
                Ok(rows) => {
                    let count = rows.len();
                    grid.write().load_rows(rows);
                    panel.write().refresh(&grid.read());
                    *status.write() = format!("Loaded {count} rows from {}", source.describe());
                }
                Err(err) => {
                    error!(source = %source.describe(), error = %err, "dataset load failed");
                    *status.write() = format!("Failed to load dataset: {err}");
                }
            }
            loading.set(false);
        }
    });

    rsx! {
        div {
            style: root_container_style(),
            Toolbar { state }
            DataGrid { grid, loading: loading() }
            PaginationBar { grid }
            SideDrawer { state }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn dataset_location(raw: &str) -> DatasetLocation {
    DatasetLocation::parse(raw)
}

/// Relative sources are served next to the page, so they resolve against
/// its origin.
#[cfg(target_arch = "wasm32")]
async fn dataset_location(raw: &str) -> DatasetLocation {
    match document::eval("return window.location.origin;")
        .join::<String>()
        .await
    {
        Ok(origin) => DatasetLocation::parse_on_origin(raw, &origin),
        Err(err) => {
            warn!(error = ?err, "page origin unavailable");
            DatasetLocation::parse(raw)
        }
    }
}
