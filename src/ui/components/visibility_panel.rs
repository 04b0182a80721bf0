use dioxus::prelude::*;

use crate::domain::entities::column::ColumnId;
use crate::usecase::services::panel_controller::{Panel, PanelController};

#[component]
pub fn VisibilityPanel(mut panel: Signal<PanelController>) -> Element {
    let checks: Vec<(ColumnId, bool)> = match panel.read().panel() {
        Panel::ShowingVisibility(draft) => ColumnId::ALL
            .into_iter()
            .map(|column| (column, draft.is_visible(column)))
            .collect(),
        _ => Vec::new(),
    };

    rsx! {
        {checks.into_iter().map(|(column, visible)| rsx!(
            label {
                key: "{column}",
                style: "display: flex; align-items: center; gap: 8px; cursor: pointer;",
                input {
                    r#type: "checkbox",
                    checked: visible,
                    onchange: move |_| {
                        if let Some(draft) = panel.write().visibility_draft() {
                            draft.toggle(column);
                        }
                    },
                }
                "{column.label()}"
            }
        ))}
    }
}
