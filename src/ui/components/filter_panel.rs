use std::collections::BTreeSet;

use chrono::NaiveDate;
use dioxus::prelude::*;
use tracing::debug;

use crate::domain::entities::column::{filterable_columns, ColumnId, FilterKind};
use crate::domain::entities::filter::{DateRange, FilterValue, NumericRange};
use crate::domain::entities::record::format_number;
use crate::usecase::services::grid_state::GridState;
use crate::usecase::services::panel_controller::{Panel, PanelController};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeEdge {
    Min,
    Max,
}

/// Moves one end of a range the way a two-thumb slider does: the edited end
/// stays inside the bounds and never crosses the other end.
pub fn edit_range(
    current: NumericRange,
    bounds: NumericRange,
    edge: RangeEdge,
    value: f64,
) -> NumericRange {
    match edge {
        RangeEdge::Min => {
            let upper = current.max.max(bounds.min);
            NumericRange::new(value.clamp(bounds.min, upper), current.max)
        }
        RangeEdge::Max => {
            let lower = current.min.min(bounds.max);
            NumericRange::new(current.min, value.clamp(lower, bounds.max))
        }
    }
}

pub fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).ok()
}

pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|date| date.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default()
}

#[derive(Clone, PartialEq)]
enum FilterControl {
    Text(String),
    Selection {
        options: Vec<String>,
        chosen: BTreeSet<String>,
    },
    Numeric {
        value: NumericRange,
        bounds: NumericRange,
    },
    Dates {
        value: DateRange,
        bounds: DateRange,
    },
}

fn controls(draft_panel: &Panel, grid: &GridState) -> Vec<(ColumnId, FilterControl)> {
    let Panel::ShowingFilter(draft) = draft_panel else {
        return Vec::new();
    };
    filterable_columns()
        .filter_map(|descriptor| {
            let column = descriptor.id;
            let control = match (descriptor.filter?, draft.value(column)?) {
                (FilterKind::FreeText, FilterValue::Text(text)) => {
                    FilterControl::Text(text.clone())
                }
                (FilterKind::MultiSelect, FilterValue::Selection(chosen)) => {
                    FilterControl::Selection {
                        options: grid.adapter().faceted_values(column).to_vec(),
                        chosen: chosen.clone(),
                    }
                }
                (FilterKind::NumericRange, FilterValue::Numeric(value)) => {
                    let filters = grid.filters();
                    FilterControl::Numeric {
                        value: *value,
                        bounds: filters.numeric_bounds(column).unwrap_or(NumericRange::EMPTY),
                    }
                }
                (FilterKind::DateRange, FilterValue::Dates(value)) => FilterControl::Dates {
                    value: *value,
                    bounds: grid.filters().date_bounds(column).unwrap_or(DateRange::OPEN),
                },
                _ => return None,
            };
            Some((column, control))
        })
        .collect()
}

fn write_draft(mut panel: Signal<PanelController>, column: ColumnId, value: FilterValue) {
    if let Some(draft) = panel.write().filter_draft() {
        if let Err(err) = draft.set(column, value) {
            debug!(%column, error = %err, "ignored filter edit");
        }
    }
}

#[component]
pub fn FilterPanel(mut panel: Signal<PanelController>, grid: Signal<GridState>) -> Element {
    let rows = controls(panel.read().panel(), &grid.read());

    rsx! {
        {rows.into_iter().map(|(column, control)| rsx!(
            div {
                key: "{column}",
                style: "display: flex; flex-direction: column; gap: 4px; padding-bottom: 8px; border-bottom: 1px solid #f0f0f0;",
                div {
                    style: "display: flex; align-items: center; justify-content: space-between;",
                    strong { "{column.label()}" }
                    button {
                        style: "border: none; background: transparent; cursor: pointer; font-size: 15px;",
                        title: "Reset filter",
                        onclick: move |_| {
                            if let Some(draft) = panel.write().filter_draft() {
                                draft.reset_one(column);
                            }
                        },
                        "↺"
                    }
                }
                FilterInput { panel, column, control }
            }
        ))}
    }
}

#[component]
fn FilterInput(
    panel: Signal<PanelController>,
    column: ColumnId,
    control: FilterControl,
) -> Element {
    match control {
        FilterControl::Text(text) => rsx! {
            input {
                style: "padding: 6px 8px; border: 1px solid #bbb; border-radius: 6px;",
                r#type: "text",
                placeholder: "Filter by {column.label()}",
                value: "{text}",
                oninput: move |event| write_draft(panel, column, FilterValue::Text(event.value())),
            }
        },
        FilterControl::Selection { options, chosen } => rsx! {
            {options.into_iter().map(|option| {
                let checked = chosen.contains(&option);
                let mut next = chosen.clone();
                if checked {
                    next.remove(&option);
                } else {
                    next.insert(option.clone());
                }
                rsx!(
                    label {
                        key: "{option}",
                        style: "display: flex; align-items: center; gap: 8px; cursor: pointer;",
                        input {
                            r#type: "checkbox",
                            checked: checked,
                            onchange: move |_| write_draft(panel, column, FilterValue::Selection(next.clone())),
                        }
                        "{option}"
                    }
                )
            })}
        },
        FilterControl::Numeric { value, bounds } => {
            let min_text = format_number(value.min);
            let max_text = format_number(value.max);
            let bounds_text = format!("{} to {}", format_number(bounds.min), format_number(bounds.max));
            rsx! {
                div {
                    style: "display: flex; gap: 6px; align-items: center;",
                    input {
                        style: "width: 100px; padding: 4px 6px;",
                        r#type: "number",
                        min: "{bounds.min}",
                        max: "{bounds.max}",
                        value: "{min_text}",
                        onchange: move |event| {
                            if let Ok(parsed) = event.value().trim().parse::<f64>() {
                                let next = edit_range(value, bounds, RangeEdge::Min, parsed);
                                write_draft(panel, column, FilterValue::Numeric(next));
                            }
                        },
                    }
                    span { "to" }
                    input {
                        style: "width: 100px; padding: 4px 6px;",
                        r#type: "number",
                        min: "{bounds.min}",
                        max: "{bounds.max}",
                        value: "{max_text}",
                        onchange: move |event| {
                            if let Ok(parsed) = event.value().trim().parse::<f64>() {
                                let next = edit_range(value, bounds, RangeEdge::Max, parsed);
                                write_draft(panel, column, FilterValue::Numeric(next));
                            }
                        },
                    }
                }
                span { style: "font-size: 12px; color: #777;", "Range {bounds_text}" }
            }
        }
        FilterControl::Dates { value, bounds } => {
            let start_text = date_input_value(value.start);
            let end_text = date_input_value(value.end);
            let lower = date_input_value(bounds.start);
            let upper = date_input_value(bounds.end);
            rsx! {
                div {
                    style: "display: flex; gap: 6px; align-items: center;",
                    input {
                        r#type: "date",
                        min: "{lower}",
                        max: "{upper}",
                        value: "{start_text}",
                        onchange: move |event| {
                            let next = DateRange { start: parse_date_input(&event.value()), end: value.end };
                            write_draft(panel, column, FilterValue::Dates(next));
                        },
                    }
                    span { "to" }
                    input {
                        r#type: "date",
                        min: "{lower}",
                        max: "{upper}",
                        value: "{end_text}",
                        onchange: move |event| {
                            let next = DateRange { start: value.start, end: parse_date_input(&event.value()) };
                            write_draft(panel, column, FilterValue::Dates(next));
                        },
                    }
                }
            }
        }
    }
}
