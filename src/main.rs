mod app;

mod domain {
    pub mod entities {
        pub mod column;
        pub mod filter;
        pub mod record;
        pub mod sort;
    }
}

mod usecase {
    pub mod ports {
        pub mod source;
    }
    pub mod stores {
        pub mod filter_store;
        pub mod group_selector;
        pub mod sort_store;
        pub mod visibility_store;
    }
    pub mod services {
        pub mod grid_adapter;
        pub mod grid_state;
        pub mod panel_controller;
        pub mod row_model;
    }
}

mod infra {
    pub mod settings;
    pub mod source {
        pub mod json;
    }
}

#[cfg(feature = "desktop")]
mod platform {
    pub mod desktop {
        pub mod paths;
    }
}

mod ui {
    pub mod components {
        pub mod data_grid;
        pub mod filter_panel;
        pub mod group_panel;
        pub mod pagination;
        pub mod side_drawer;
        pub mod sort_panel;
        pub mod toolbar;
        pub mod visibility_panel;
    }
    pub mod state {
        pub mod app_state;
    }
    pub mod styles;
}

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

use app::App;

fn main() {
    if let Err(err) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("failed to initialise logging: {err}");
    }
    launch();
}

#[cfg(feature = "desktop")]
fn launch() {
    let mut config = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title("Product Grid"));
    match platform::desktop::paths::default_webview_data_dir() {
        Ok(webview_data_dir) => config = config.with_data_directory(webview_data_dir),
        Err(err) => tracing::warn!(error = %format!("{err:#}"), "using default webview data dir"),
    }
    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(App);
}

#[cfg(not(feature = "desktop"))]
fn launch() {
    dioxus::launch(App);
}
