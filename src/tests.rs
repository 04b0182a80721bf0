use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::entities::column::{ColumnId, FilterKind, COLUMNS};
use crate::domain::entities::filter::{DateRange, FilterValue, NumericRange};
use crate::domain::entities::sort::SortEntry;
use crate::infra::source::json::parse_rows;
use crate::test_support::{catalog_rows, day, row};
use crate::ui::styles::{
    column_alignment, drawer_overlay_style, root_container_style, table_container_style,
    table_header_cell_style,
};
use crate::usecase::services::grid_state::GridState;
use crate::usecase::services::panel_controller::{PanelController, PanelKind};
use crate::usecase::services::row_model::DisplayRow;
use crate::usecase::stores::filter_store::empty_value;

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("product-grid-{prefix}-{nanos}"))
}

fn loaded_grid() -> GridState {
    let mut grid = GridState::new(10);
    grid.load_rows(catalog_rows());
    grid
}

#[test]
fn multi_select_on_category_keeps_only_matching_rows() {
    let mut grid = GridState::new(10);
    grid.load_rows(vec![
        row(1, "Alpha", "A", "One", 10.0),
        row(2, "Beta", "A", "Two", 20.0),
        row(3, "Gamma", "B", "One", 30.0),
    ]);

    grid.set_filter(ColumnId::Category, FilterValue::selection(["A"]))
        .expect("selection filter should be accepted");

    assert_eq!(grid.adapter().filtered_row_count(), 2);
    assert_eq!(grid.adapter().visible_row_count(), 2);
}

#[test]
fn price_bounds_come_from_data_and_narrowing_excludes_cheapest_row() {
    let mut grid = GridState::new(10);
    grid.load_rows(vec![
        row(1, "Ten", "A", "One", 10.0),
        row(2, "Twenty", "A", "One", 20.0),
        row(3, "Thirty", "B", "One", 30.0),
    ]);

    assert_eq!(
        grid.filters().numeric_bounds(ColumnId::Price),
        Some(NumericRange::new(10.0, 30.0))
    );

    grid.set_filter(
        ColumnId::Price,
        FilterValue::Numeric(NumericRange::new(15.0, 30.0)),
    )
    .expect("range filter should be accepted");

    let names: Vec<&str> = grid
        .adapter()
        .page_rows()
        .iter()
        .filter_map(|display| match display {
            DisplayRow::Leaf { index, .. } => {
                grid.row(*index).map(|record| record.name.as_str())
            }
            _ => None,
        })
        .collect();
    assert_eq!(names, vec!["Twenty", "Thirty"]);
}

#[test]
fn clear_sort_after_two_toggles_leaves_no_sort() {
    let mut grid = loaded_grid();
    grid.toggle_sort(ColumnId::Price);
    grid.toggle_sort(ColumnId::Name);
    assert_eq!(grid.sorting().entries().len(), 2);

    assert!(grid.clear_sort());

    assert!(grid.sorting().is_empty());
    assert!(grid.adapter().config().sorting.is_empty());
}

#[test]
fn switching_from_sort_panel_to_filter_panel_keeps_only_applied_sort() {
    let mut grid = loaded_grid();
    let mut panels = PanelController::new();

    panels.open(PanelKind::Sort, &grid);
    if let Some(draft) = panels.sort_draft() {
        draft.toggle(ColumnId::Name);
    }
    panels.apply(&mut grid).expect("sort apply should succeed");
    assert_eq!(grid.sorting().entries(), &[SortEntry::ascending(ColumnId::Name)]);

    panels.open(PanelKind::Sort, &grid);
    if let Some(draft) = panels.sort_draft() {
        draft.toggle(ColumnId::Name);
        draft.toggle(ColumnId::Price);
    }
    panels.open(PanelKind::Filter, &grid);

    assert_eq!(panels.kind(), Some(PanelKind::Filter));
    assert_eq!(grid.sorting().entries(), &[SortEntry::ascending(ColumnId::Name)]);
}

#[test]
fn show_all_makes_every_column_visible() {
    let mut grid = loaded_grid();
    grid.toggle_visibility(ColumnId::Price);
    grid.toggle_visibility(ColumnId::CreatedAt);

    assert!(grid.show_all_columns());

    for column in ColumnId::ALL {
        assert!(grid.visibility().get(column), "{column} should be visible");
    }
    assert_eq!(grid.adapter().column_order(), &ColumnId::ALL);
}

#[test]
fn reset_one_restores_type_correct_default_for_every_kind() {
    let mut grid = loaded_grid();
    let edits = [
        (ColumnId::Name, FilterValue::Text("lamp".to_string())),
        (ColumnId::Category, FilterValue::selection(["Home"])),
        (
            ColumnId::CreatedAt,
            FilterValue::Dates(DateRange::between(day(1), day(3))),
        ),
        (
            ColumnId::Price,
            FilterValue::Numeric(NumericRange::new(20.0, 100.0)),
        ),
    ];
    for (column, value) in edits {
        grid.set_filter(column, value)
            .expect("filter value should be accepted");
    }

    for column in [
        ColumnId::Name,
        ColumnId::Category,
        ColumnId::CreatedAt,
        ColumnId::Price,
    ] {
        assert!(grid.reset_filter(column), "{column} should change on reset");
    }

    for descriptor in COLUMNS.iter() {
        let Some(kind) = descriptor.filter else {
            continue;
        };
        let entry = grid
            .filters()
            .get(descriptor.id)
            .expect("filterable column should have an entry");
        let expected = match kind {
            FilterKind::NumericRange => FilterValue::Numeric(
                grid.filters()
                    .numeric_bounds(descriptor.id)
                    .expect("numeric column should have bounds"),
            ),
            other => empty_value(other),
        };
        assert_eq!(entry.value, expected, "{} default", descriptor.id);
        assert!(!entry.is_active());
    }
    assert_eq!(grid.adapter().filtered_row_count(), 7);
}

#[test]
fn name_filter_matches_case_insensitively() {
    let mut grid = loaded_grid();

    for text in ["lamp", "LAMP"] {
        grid.set_filter(ColumnId::Name, FilterValue::Text(text.to_string()))
            .expect("text filter should be accepted");

        let mut names: Vec<&str> = grid
            .adapter()
            .page_rows()
            .iter()
            .filter_map(|display| match display {
                DisplayRow::Leaf { index, .. } => {
                    grid.row(*index).map(|record| record.name.as_str())
                }
                _ => None,
            })
            .collect();
        names.sort_unstable();
        assert_eq!(names, vec!["Desk Lamp", "Floor Lamp"], "filter {text:?}");
    }
}

#[test]
fn filter_panel_opened_before_load_keeps_every_row() {
    let mut grid = GridState::new(10);
    let mut panels = PanelController::new();
    panels.open(PanelKind::Filter, &grid);

    grid.load_rows(catalog_rows());
    panels.refresh(&grid);
    panels.apply(&mut grid).expect("filter apply should succeed");

    assert_eq!(grid.adapter().filtered_row_count(), 7);
    assert_eq!(grid.filters().active_entries().count(), 0);
}

#[test]
fn applying_the_same_filter_twice_is_a_no_op() {
    let mut grid = loaded_grid();
    let value = FilterValue::selection(["Furniture"]);

    assert!(grid
        .set_filter(ColumnId::Category, value.clone())
        .expect("first set should be accepted"));
    grid.set_page(0);
    let before = grid.clone();

    assert!(!grid
        .set_filter(ColumnId::Category, value)
        .expect("second set should be accepted"));
    assert_eq!(grid, before);
}

#[test]
fn search_box_matches_any_column_fuzzily() {
    let mut grid = loaded_grid();

    grid.set_global_filter("textil");
    assert_eq!(grid.adapter().filtered_row_count(), 2);

    grid.set_global_filter("STOOL");
    assert_eq!(grid.adapter().filtered_row_count(), 1);

    grid.set_global_filter("  ");
    assert_eq!(grid.adapter().filtered_row_count(), 7);
}

#[test]
fn grouping_through_panel_moves_group_column_first_and_counts_groups() {
    let mut grid = loaded_grid();
    let mut panels = PanelController::new();

    panels.open(PanelKind::Group, &grid);
    if let Some(draft) = panels.group_draft() {
        draft.choose(Some(ColumnId::Subcategory));
    }
    panels.apply(&mut grid).expect("group apply should succeed");

    assert_eq!(grid.adapter().column_order()[0], ColumnId::Subcategory);
    assert_eq!(grid.adapter().visible_row_count(), 4);
    assert_eq!(grid.adapter().filtered_row_count(), 7);

    panels.open(PanelKind::Group, &grid);
    panels.clear(&mut grid).expect("group clear should succeed");
    assert_eq!(grid.grouping().selected(), None);
    assert_eq!(grid.adapter().visible_row_count(), 7);
}

#[test]
fn visibility_panel_apply_hides_column_from_grid() {
    let mut grid = loaded_grid();
    let mut panels = PanelController::new();

    panels.open(PanelKind::Visibility, &grid);
    if let Some(draft) = panels.visibility_draft() {
        draft.toggle(ColumnId::SalePrice);
        draft.toggle(ColumnId::UpdatedAt);
    }
    panels.apply(&mut grid).expect("visibility apply should succeed");

    let shown: BTreeSet<ColumnId> = grid.adapter().column_order().iter().copied().collect();
    assert!(!shown.contains(&ColumnId::SalePrice));
    assert!(!shown.contains(&ColumnId::UpdatedAt));
    assert_eq!(shown.len(), 6);
}

#[test]
fn sample_dataset_parses_and_loads() {
    let raw = include_str!("../assets/sample-data.json");
    let rows = parse_rows(raw).expect("sample dataset should parse");
    assert!(rows.len() > 10);

    let mut grid = GridState::new(10);
    grid.load_rows(rows);

    assert_eq!(grid.adapter().page_rows().len(), 10);
    assert!(grid.adapter().page_count() >= 2);
    assert!(!grid.adapter().faceted_values(ColumnId::Category).is_empty());
}

#[test]
fn sticky_header_styles_include_positioning() {
    let style = table_header_cell_style(true);
    assert!(style.contains("position: sticky"));
    assert!(style.contains("cursor: pointer"));
    assert!(table_header_cell_style(false).contains("cursor: default"));
}

#[test]
fn table_container_style_allows_scroll() {
    let style = table_container_style();
    assert!(style.contains("overflow: auto"));
    assert!(style.contains("flex: 1"));
    assert!(root_container_style().contains("height: 100vh"));
}

#[test]
fn drawer_overlay_covers_the_viewport() {
    let style = drawer_overlay_style();
    assert!(style.contains("position: fixed"));
    assert!(style.contains("inset: 0"));
}

#[test]
fn numeric_columns_align_right() {
    assert_eq!(column_alignment(ColumnId::Price), "right");
    assert_eq!(column_alignment(ColumnId::Name), "left");
    assert_eq!(column_alignment(ColumnId::CreatedAt), "left");
}

#[cfg(feature = "desktop")]
#[test]
fn ensure_webview_data_dir_creates_webview2_subdir() {
    use crate::platform::desktop::paths::ensure_webview_data_dir;

    let temp_dir = unique_test_dir("webview-data-dir");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");

    let webview_dir =
        ensure_webview_data_dir(&temp_dir).expect("webview data dir should be created");

    assert_eq!(webview_dir, temp_dir.join("webview2"));
    assert!(webview_dir.is_dir(), "webview2 directory should exist");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}
