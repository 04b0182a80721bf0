use dioxus::prelude::*;

use crate::domain::entities::column::{groupable_columns, ColumnId};
use crate::ui::styles::error_text_style;
use crate::usecase::services::panel_controller::{Panel, PanelController};

const NONE_OPTION_VALUE: &str = "";

#[component]
pub fn GroupPanel(mut panel: Signal<PanelController>) -> Element {
    let (choice, error) = match panel.read().panel() {
        Panel::ShowingGroup(draft) => (draft.choice, draft.error.as_ref().map(ToString::to_string)),
        _ => (None, None),
    };
    let selected = choice.map(ColumnId::as_str).unwrap_or(NONE_OPTION_VALUE);

    rsx! {
        label { style: "font-size: 13px; color: #555;", "Group rows by" }
        select {
            style: "padding: 6px 8px; border: 1px solid #bbb; border-radius: 6px;",
            value: "{selected}",
            onchange: move |event| {
                let column = ColumnId::parse(&event.value());
                if let Some(draft) = panel.write().group_draft() {
                    draft.choose(column);
                }
            },
            option { value: NONE_OPTION_VALUE, selected: choice.is_none(), "Select a column" }
            {groupable_columns().map(|descriptor| rsx!(
                option {
                    key: "{descriptor.id}",
                    value: descriptor.id.as_str(),
                    selected: choice == Some(descriptor.id),
                    "{descriptor.label}"
                }
            ))}
        }
        if let Some(message) = error {
            span { style: error_text_style(), "{message}" }
        }
    }
}
