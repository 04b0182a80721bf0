use dioxus::prelude::*;
use tracing::warn;

use crate::ui::components::filter_panel::FilterPanel;
use crate::ui::components::group_panel::GroupPanel;
use crate::ui::components::sort_panel::SortPanel;
use crate::ui::components::visibility_panel::VisibilityPanel;
use crate::ui::state::app_state::AppState;
use crate::ui::styles::{
    drawer_body_style, drawer_footer_style, drawer_overlay_style, drawer_panel_style,
    primary_button_style, secondary_button_style,
};
use crate::usecase::services::panel_controller::PanelKind;

/// Footer labels: the left-hand reset action and the commit button.
pub fn footer_labels(kind: PanelKind) -> (&'static str, &'static str) {
    match kind {
        PanelKind::Visibility => ("Show all columns", "Apply"),
        PanelKind::Sort => ("Clear Sort", "Apply"),
        PanelKind::Filter => ("Clear Filters", "Apply"),
        PanelKind::Group => ("Clear grouping", "Apply grouping"),
    }
}

#[component]
pub fn SideDrawer(state: AppState) -> Element {
    let AppState {
        mut grid,
        mut panel,
        mut status,
        ..
    } = state;
    let Some(kind) = panel.read().kind() else {
        return rsx! {};
    };
    let (clear_label, apply_label) = footer_labels(kind);
    let body = match kind {
        PanelKind::Visibility => rsx! { VisibilityPanel { panel } },
        PanelKind::Sort => rsx! { SortPanel { panel } },
        PanelKind::Filter => rsx! { FilterPanel { panel, grid } },
        PanelKind::Group => rsx! { GroupPanel { panel } },
    };

    rsx! {
        div {
            style: drawer_overlay_style(),
            onclick: move |_| panel.write().close(),
        }
        div {
            style: drawer_panel_style(),
            div {
                style: "display: flex; align-items: center; justify-content: space-between; padding: 12px 16px; border-bottom: 1px solid #eee;",
                h3 { style: "margin: 0; font-size: 16px;", "{kind.title()}" }
                button {
                    style: "border: none; background: transparent; font-size: 18px; cursor: pointer;",
                    title: "Close",
                    onclick: move |_| panel.write().close(),
                    "✕"
                }
            }
            div {
                style: drawer_body_style(),
                {body}
            }
            div {
                style: drawer_footer_style(),
                button {
                    style: secondary_button_style(),
                    onclick: move |_| {
                        let result = {
                            let mut committed = grid.write();
                            panel.write().clear(&mut committed)
                        };
                        if let Err(err) = result {
                            warn!(error = %err, "panel clear failed");
                        } else if kind != PanelKind::Visibility {
                            *status.write() = format!("{clear_label} done");
                        }
                    },
                    "{clear_label}"
                }
                button {
                    style: primary_button_style(),
                    onclick: move |_| {
                        let result = {
                            let mut committed = grid.write();
                            panel.write().apply(&mut committed)
                        };
                        match result {
                            Ok(()) => {
                                *status.write() = format!("{} applied", kind.title());
                            }
                            Err(err) => {
                                warn!(panel = ?kind, error = %err, "panel apply rejected");
                                *status.write() = err.to_string();
                            }
                        }
                    },
                    "{apply_label}"
                }
            }
        }
    }
}
