use dioxus::prelude::*;

use crate::domain::entities::column::ColumnId;
use crate::ui::styles::{
    group_row_style, table_cell_style, table_container_style, table_header_cell_style,
};
use crate::usecase::services::grid_state::GridState;
use crate::usecase::services::row_model::DisplayRow;
use crate::usecase::stores::sort_store::SortStore;

/// Arrow for a sorted column, with its priority once more than one column sorts.
pub fn sort_indicator(sorting: &SortStore, column: ColumnId) -> String {
    let Some(entry) = sorting.get(column) else {
        return String::new();
    };
    match sorting.priority(column) {
        Some(priority) if sorting.entries().len() > 1 => format!("{} {priority}", entry.arrow()),
        _ => entry.arrow().to_string(),
    }
}

#[derive(Clone, PartialEq)]
enum RenderedRow {
    Group {
        key: String,
        count: usize,
        expanded: bool,
    },
    Leaf {
        index: usize,
        nested: bool,
        cells: Vec<(ColumnId, String)>,
    },
}

fn rendered_rows(state: &GridState, columns: &[ColumnId]) -> Vec<RenderedRow> {
    state
        .adapter()
        .page_rows()
        .iter()
        .filter_map(|row| match row {
            DisplayRow::Group {
                key,
                count,
                expanded,
            } => Some(RenderedRow::Group {
                key: key.clone(),
                count: *count,
                expanded: *expanded,
            }),
            DisplayRow::Leaf { index, nested } => {
                let record = state.row(*index)?;
                Some(RenderedRow::Leaf {
                    index: *index,
                    nested: *nested,
                    cells: columns
                        .iter()
                        .map(|column| (*column, record.value(*column).display()))
                        .collect(),
                })
            }
        })
        .collect()
}

#[component]
pub fn DataGrid(mut grid: Signal<GridState>, loading: bool) -> Element {
    let (columns, headers, rows) = {
        let state = grid.read();
        let columns = state.adapter().column_order().to_vec();
        let headers: Vec<(ColumnId, String)> = columns
            .iter()
            .map(|column| (*column, sort_indicator(state.sorting(), *column)))
            .collect();
        let rows = rendered_rows(&state, &columns);
        (columns, headers, rows)
    };
    let column_count = columns.len().max(1);
    let empty_label = if loading {
        "Loading..."
    } else {
        "No records to display"
    };

    rsx! {
        div {
            style: table_container_style(),
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        {headers.into_iter().map(|(column, indicator)| {
                            let sortable = column.descriptor().sortable;
                            rsx!(
                                th {
                                    key: "{column}",
                                    style: table_header_cell_style(sortable),
                                    onclick: move |_| {
                                        if sortable {
                                            grid.write().toggle_sort(column);
                                        }
                                    },
                                    "{column.label()} "
                                    span { style: "color: #4a7bd8;", "{indicator}" }
                                }
                            )
                        })}
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: "{column_count}",
                                style: "padding: 24px; text-align: center; color: #777;",
                                "{empty_label}"
                            }
                        }
                    }
                    {rows.into_iter().map(|row| match row {
                        RenderedRow::Group { key, count, expanded } => {
                            let marker = if expanded { "▾" } else { "▸" };
                            let toggle_key = key.clone();
                            rsx!(
                                tr {
                                    key: "group-{key}",
                                    onclick: move |_| grid.write().toggle_group_expanded(&toggle_key),
                                    td {
                                        colspan: "{column_count}",
                                        style: group_row_style(),
                                        "{marker} {key} ({count})"
                                    }
                                }
                            )
                        }
                        RenderedRow::Leaf { index, nested, cells } => rsx!(
                            tr {
                                key: "row-{index}",
                                {cells.into_iter().enumerate().map(|(position, (column, text))| rsx!(
                                    td {
                                        key: "{column}",
                                        style: table_cell_style(column, nested && position == 0),
                                        "{text}"
                                    }
                                ))}
                            }
                        ),
                    })}
                }
            }
        }
    }
}
