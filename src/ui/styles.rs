use crate::domain::entities::column::{ColumnId, DataKind};

pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; gap: 12px; padding: 16px; box-sizing: border-box; font-family: sans-serif; color: #222;"
}

pub fn toolbar_style() -> &'static str {
    "display: flex; align-items: center; gap: 8px; flex-wrap: wrap;"
}

pub fn search_input_style() -> &'static str {
    "flex: 1; min-width: 220px; padding: 6px 10px; border: 1px solid #bbb; border-radius: 6px;"
}

pub fn toolbar_button_style(active: bool) -> String {
    let background = if active { "#eef4ff" } else { "#fff" };
    let border = if active { "#4a7bd8" } else { "#bbb" };
    format!(
        "border: 1px solid {border}; background: {background}; padding: 6px 12px; border-radius: 6px; cursor: pointer;"
    )
}

pub fn status_style() -> &'static str {
    "color: #555; font-size: 13px;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd; border-radius: 8px;"
}

pub fn table_header_cell_style(sortable: bool) -> String {
    let cursor = if sortable { "pointer" } else { "default" };
    format!(
        "position: sticky; top: 0; background: #f5f5f5; text-align: left; padding: 8px 10px; border-bottom: 1px solid #ddd; white-space: nowrap; user-select: none; cursor: {cursor};"
    )
}

pub fn column_alignment(column: ColumnId) -> &'static str {
    match column.descriptor().kind {
        DataKind::Numeric | DataKind::Identifier => "right",
        DataKind::Text | DataKind::Category | DataKind::Date => "left",
    }
}

pub fn table_cell_style(column: ColumnId, indent: bool) -> String {
    let align = column_alignment(column);
    let padding_left = if indent { 28 } else { 10 };
    format!(
        "padding: 6px 10px 6px {padding_left}px; border-bottom: 1px solid #eee; text-align: {align}; white-space: nowrap;"
    )
}

pub fn group_row_style() -> &'static str {
    "background: #fafafa; font-weight: 600; cursor: pointer; padding: 6px 10px; border-bottom: 1px solid #eee;"
}

pub fn drawer_overlay_style() -> &'static str {
    "position: fixed; inset: 0; background: rgba(0,0,0,0.35); z-index: 1000;"
}

pub fn drawer_panel_style() -> &'static str {
    "position: fixed; top: 0; right: 0; bottom: 0; width: 360px; max-width: 90vw; background: #fff; box-shadow: -8px 0 24px rgba(0,0,0,0.15); display: flex; flex-direction: column; z-index: 1001;"
}

pub fn drawer_body_style() -> &'static str {
    "flex: 1; min-height: 0; overflow-y: auto; padding: 12px 16px; display: flex; flex-direction: column; gap: 10px;"
}

pub fn drawer_footer_style() -> &'static str {
    "display: flex; justify-content: space-between; gap: 8px; padding: 12px 16px; border-top: 1px solid #eee;"
}

pub fn primary_button_style() -> &'static str {
    "border: 1px solid #2f5fb8; background: #2f5fb8; color: #fff; padding: 6px 14px; border-radius: 6px; cursor: pointer;"
}

pub fn secondary_button_style() -> &'static str {
    "border: 1px solid #bbb; background: #fff; padding: 6px 14px; border-radius: 6px; cursor: pointer;"
}

pub fn pagination_button_style(current: bool, disabled: bool) -> String {
    let background = if current { "#2f5fb8" } else { "#fff" };
    let color = if current { "#fff" } else { "#222" };
    let cursor = if disabled { "not-allowed" } else { "pointer" };
    let opacity = if disabled { "0.5" } else { "1" };
    format!(
        "min-width: 32px; border: 1px solid #bbb; background: {background}; color: {color}; padding: 4px 8px; border-radius: 6px; cursor: {cursor}; opacity: {opacity};"
    )
}

pub fn error_text_style() -> &'static str {
    "color: #b3261e; font-size: 13px;"
}
