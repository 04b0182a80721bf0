use dioxus::prelude::*;

use crate::domain::entities::column::{ColumnId, COLUMNS};
use crate::ui::styles::secondary_button_style;
use crate::usecase::services::panel_controller::{Panel, PanelController};

#[derive(Clone, PartialEq)]
struct SortRow {
    column: ColumnId,
    state: String,
    sorted: bool,
}

#[component]
pub fn SortPanel(mut panel: Signal<PanelController>) -> Element {
    let rows: Vec<SortRow> = match panel.read().panel() {
        Panel::ShowingSort(draft) => COLUMNS
            .iter()
            .filter(|descriptor| descriptor.sortable)
            .map(|descriptor| {
                let entry = draft.sorting.get(descriptor.id);
                let state = match (entry, draft.sorting.priority(descriptor.id)) {
                    (Some(entry), Some(priority)) => format!("{} {priority}", entry.arrow()),
                    _ => "Not sorted".to_string(),
                };
                SortRow {
                    column: descriptor.id,
                    state,
                    sorted: entry.is_some(),
                }
            })
            .collect(),
        _ => Vec::new(),
    };

    rsx! {
        {rows.into_iter().map(|row| {
            let column = row.column;
            rsx!(
                div {
                    key: "{column}",
                    style: "display: flex; align-items: center; justify-content: space-between; gap: 8px;",
                    span { "{column.label()}" }
                    div {
                        style: "display: flex; gap: 6px;",
                        button {
                            style: secondary_button_style(),
                            onclick: move |_| {
                                if let Some(draft) = panel.write().sort_draft() {
                                    draft.toggle(column);
                                }
                            },
                            "{row.state}"
                        }
                        if row.sorted {
                            button {
                                style: secondary_button_style(),
                                title: "Remove sort",
                                onclick: move |_| {
                                    if let Some(draft) = panel.write().sort_draft() {
                                        draft.remove(column);
                                    }
                                },
                                "✕"
                            }
                        }
                    }
                }
            )
        })}
    }
}
