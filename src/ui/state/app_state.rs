use dioxus::prelude::{use_signal, Signal};

use crate::usecase::services::grid_state::GridState;
use crate::usecase::services::panel_controller::PanelController;

/// Page-scoped signals. Created once at mount and dropped with the page.
#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    pub grid: Signal<GridState>,
    pub panel: Signal<PanelController>,
    pub search_text: Signal<String>,
    pub loading: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new(page_size: usize) -> Self {
        Self {
            grid: use_signal(move || GridState::new(page_size)),
            panel: use_signal(PanelController::new),
            search_text: use_signal(String::new),
            loading: use_signal(|| true),
            status: use_signal(|| "Loading dataset...".to_string()),
        }
    }
}
