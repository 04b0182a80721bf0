use dioxus::prelude::*;

use crate::ui::state::app_state::AppState;
use crate::ui::styles::{search_input_style, status_style, toolbar_button_style, toolbar_style};
use crate::usecase::services::panel_controller::PanelKind;

#[component]
pub fn Toolbar(state: AppState) -> Element {
    let AppState {
        mut grid,
        mut panel,
        mut search_text,
        loading,
        status,
    } = state;
    let open_kind = panel.read().kind();
    let active_filters = grid.read().filters().active_entries().count();

    rsx! {
        div {
            style: toolbar_style(),
            input {
                style: search_input_style(),
                r#type: "search",
                placeholder: "Search all columns",
                value: "{search_text}",
                disabled: loading(),
                oninput: move |event| {
                    let text = event.value();
                    grid.write().set_global_filter(&text);
                    search_text.set(text);
                },
            }
            {PanelKind::ALL.into_iter().map(|kind| {
                let active = open_kind == Some(kind);
                let label = match kind {
                    PanelKind::Filter if active_filters > 0 => {
                        format!("{} ({active_filters})", kind.button_label())
                    }
                    _ => kind.button_label().to_string(),
                };
                rsx!(
                    button {
                        key: "{kind.button_label()}",
                        style: toolbar_button_style(active),
                        onclick: move |_| {
                            if panel.read().kind() == Some(kind) {
                                panel.write().close();
                                return;
                            }
                            let committed = grid.read();
                            panel.write().open(kind, &committed);
                        },
                        "{label}"
                    }
                )
            })}
            span { style: status_style(), "{status}" }
        }
    }
}
