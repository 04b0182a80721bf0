use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::domain::entities::column::ColumnId;
use crate::domain::entities::filter::{validate_filter_value, FilterError, FilterValue};
use crate::domain::entities::record::RowRecord;
use crate::domain::entities::sort::SortEntry;
use crate::usecase::services::grid_adapter::{GridAdapter, StoreView};
use crate::usecase::services::row_model::{Pagination, DEFAULT_PAGE_SIZE};
use crate::usecase::stores::filter_store::FilterStore;
use crate::usecase::stores::group_selector::{GroupError, GroupSelector};
use crate::usecase::stores::sort_store::SortStore;
use crate::usecase::stores::visibility_store::{VisibilityMap, VisibilityStore};

/// Page-level state: the loaded rows, every store, and the adapter output.
/// Each mutating call finishes with exactly one adapter rebuild, so readers
/// never see a store ahead of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridState {
    rows: Vec<RowRecord>,
    filters: FilterStore,
    visibility: VisibilityStore,
    sorting: SortStore,
    grouping: GroupSelector,
    global_filter: String,
    pagination: Pagination,
    expanded: BTreeSet<String>,
    adapter: GridAdapter,
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl GridState {
    pub fn new(page_size: usize) -> Self {
        let mut state = Self {
            rows: Vec::new(),
            filters: FilterStore::new(),
            visibility: VisibilityStore::new(),
            sorting: SortStore::new(),
            grouping: GroupSelector::new(),
            global_filter: String::new(),
            pagination: Pagination {
                page_index: 0,
                page_size: page_size.max(1),
            },
            expanded: BTreeSet::new(),
            adapter: GridAdapter::new(),
        };
        state.rebuild();
        state
    }

    /// Replaces the dataset wholesale and derives bounds and option lists.
    pub fn load_rows(&mut self, rows: Vec<RowRecord>) {
        self.rows = rows;
        self.filters.load_bounds(&self.rows);
        self.adapter.refresh_facets(&self.rows);
        self.expanded.clear();
        self.pagination.page_index = 0;
        self.rebuild();
    }

    pub fn rows(&self) -> &[RowRecord] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&RowRecord> {
        self.rows.get(index)
    }

    pub fn filters(&self) -> &FilterStore {
        &self.filters
    }

    pub fn visibility(&self) -> &VisibilityStore {
        &self.visibility
    }

    pub fn sorting(&self) -> &SortStore {
        &self.sorting
    }

    pub fn grouping(&self) -> &GroupSelector {
        &self.grouping
    }

    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    pub fn adapter(&self) -> &GridAdapter {
        &self.adapter
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.contains(key)
    }

    pub fn set_filter(
        &mut self,
        column: ColumnId,
        value: FilterValue,
    ) -> Result<bool, FilterError> {
        let changed = self.filters.set(column, value).inspect_err(|err| {
            warn!(%column, error = %err, "rejected filter value");
        })?;
        if changed {
            self.refilter();
        }
        Ok(changed)
    }

    /// Writes several filter values at once. Every value is checked before
    /// any is written, so a rejected value leaves the whole store untouched.
    pub fn commit_filters(
        &mut self,
        values: &[(ColumnId, FilterValue)],
    ) -> Result<bool, FilterError> {
        for (column, value) in values {
            let expected = self.filters.get(*column).map(|entry| entry.kind);
            validate_filter_value(*column, expected, value).inspect_err(|err| {
                warn!(column = %column, error = %err, "rejected filter commit");
            })?;
        }
        let mut changed = false;
        for (column, value) in values {
            changed |= self.filters.set(*column, value.clone())?;
        }
        if changed {
            self.refilter();
        }
        Ok(changed)
    }

    pub fn reset_filter(&mut self, column: ColumnId) -> bool {
        let changed = self.filters.reset_one(column);
        if changed {
            self.refilter();
        }
        changed
    }

    pub fn reset_filters(&mut self) -> bool {
        let changed = self.filters.reset_all();
        if changed {
            self.refilter();
        }
        changed
    }

    pub fn set_global_filter(&mut self, text: &str) -> bool {
        if self.global_filter == text {
            return false;
        }
        self.global_filter = text.to_string();
        self.refilter();
        true
    }

    pub fn toggle_visibility(&mut self, column: ColumnId) {
        self.visibility.toggle(column);
        self.rebuild();
    }

    pub fn show_all_columns(&mut self) -> bool {
        let changed = self.visibility.show_all();
        if changed {
            self.rebuild();
        }
        changed
    }

    pub fn apply_visibility(&mut self, pending: &VisibilityMap) -> bool {
        let changed = self.visibility.apply(pending);
        if changed {
            self.rebuild();
        }
        changed
    }

    /// Header-arrow click on the grid.
    pub fn toggle_sort(&mut self, column: ColumnId) {
        if !column.descriptor().sortable {
            return;
        }
        self.sorting.toggle(column);
        self.refilter();
    }

    pub fn clear_sort(&mut self) -> bool {
        let changed = self.sorting.clear();
        if changed {
            self.refilter();
        }
        changed
    }

    pub fn replace_sort(&mut self, entries: &[SortEntry]) -> bool {
        let changed = self.sorting.replace(entries);
        if changed {
            self.refilter();
        }
        changed
    }

    pub fn select_group(&mut self, column: ColumnId) -> Result<bool, GroupError> {
        let changed = self.grouping.select(column)?;
        if changed {
            self.expanded.clear();
            self.refilter();
        }
        Ok(changed)
    }

    pub fn clear_group(&mut self) -> bool {
        let changed = self.grouping.clear();
        if changed {
            self.expanded.clear();
            self.refilter();
        }
        changed
    }

    pub fn toggle_group_expanded(&mut self, key: &str) {
        if !self.expanded.remove(key) {
            self.expanded.insert(key.to_string());
        }
        self.rebuild();
    }

    pub fn set_page(&mut self, page_index: usize) {
        self.pagination.page_index = page_index;
        self.rebuild();
    }

    /// Any change to which rows match, or their order, starts again at page 1.
    fn refilter(&mut self) {
        self.pagination.page_index = 0;
        self.rebuild();
    }

    fn rebuild(&mut self) {
        let view = StoreView {
            filters: &self.filters,
            visibility: &self.visibility,
            sorting: &self.sorting,
            grouping: &self.grouping,
            global_filter: &self.global_filter,
            pagination: self.pagination,
            expanded: &self.expanded,
        };
        self.adapter.rebuild(view, &self.rows);
        self.pagination.page_index = self.adapter.page_index();
        debug!(
            matching = self.adapter.filtered_row_count(),
            page = self.pagination.page_index,
            pages = self.adapter.page_count(),
            "grid rebuilt"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::filter::NumericRange;
    use crate::test_support::{catalog_rows, row};
    use crate::usecase::services::row_model::DisplayRow;

    fn loaded(page_size: usize) -> GridState {
        let mut state = GridState::new(page_size);
        state.load_rows(catalog_rows());
        state
    }

    #[test]
    fn filter_change_resets_page_index() {
        let mut state = loaded(2);
        state.set_page(3);
        assert_eq!(state.adapter().page_index(), 3);

        state
            .set_filter(ColumnId::Category, FilterValue::selection(["Home"]))
            .expect("selection filter");

        assert_eq!(state.adapter().page_index(), 0);
        assert_eq!(state.adapter().filtered_row_count(), 4);
        assert_eq!(state.adapter().page_count(), 2);
    }

    #[test]
    fn set_page_clamps_to_the_last_page() {
        let mut state = loaded(3);
        state.set_page(40);
        assert_eq!(state.adapter().page_index(), 2);
    }

    #[test]
    fn commit_filters_is_all_or_nothing() {
        let mut state = loaded(10);
        let before = state.clone();

        let result = state.commit_filters(&[
            (ColumnId::Category, FilterValue::selection(["Home"])),
            (ColumnId::Price, FilterValue::Text("cheap".to_string())),
        ]);

        assert!(result.is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn second_header_click_sorts_descending() {
        let mut state = loaded(10);
        state.toggle_sort(ColumnId::Price);
        state.toggle_sort(ColumnId::Price);

        let first = state
            .adapter()
            .page_rows()
            .first()
            .cloned()
            .expect("a row on the first page");
        match first {
            DisplayRow::Leaf { index, .. } => {
                assert_eq!(state.rows()[index].name, "Standing Desk");
            }
            other => panic!("expected a leaf row, got {other:?}"),
        }
    }

    #[test]
    fn reloading_rows_recomputes_bounds() {
        let mut state = loaded(10);
        state
            .set_filter(
                ColumnId::Price,
                FilterValue::Numeric(NumericRange::new(100.0, 200.0)),
            )
            .expect("range filter");

        state.load_rows(vec![row(1, "Mug", "Kitchen", "Cups", 8.5)]);

        assert_eq!(
            state.filters().numeric_bounds(ColumnId::Price),
            Some(NumericRange::new(8.0, 9.0))
        );
        assert_eq!(state.adapter().filtered_row_count(), 1);
    }

    #[test]
    fn group_expansion_survives_paging_but_not_regrouping() {
        let mut state = loaded(10);
        state
            .select_group(ColumnId::Category)
            .expect("category is groupable");
        state.toggle_group_expanded("Home");
        assert!(state.is_expanded("Home"));
        assert_eq!(state.adapter().visible_row_count(), 2);

        state
            .select_group(ColumnId::Subcategory)
            .expect("subcategory is groupable");
        assert!(!state.is_expanded("Home"));
        assert_eq!(state.adapter().visible_row_count(), 4);
    }
}
