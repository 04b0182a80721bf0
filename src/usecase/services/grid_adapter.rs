use std::collections::{BTreeMap, BTreeSet};

use crate::domain::entities::column::{ColumnId, FilterKind, COLUMNS};
use crate::domain::entities::filter::{FilterEntry, FilterValue};
use crate::domain::entities::record::RowRecord;
use crate::usecase::services::row_model::{
    ColumnFilter, DisplayRow, FilterPredicate, Pagination, RowModel, TableConfig,
};
use crate::usecase::stores::filter_store::FilterStore;
use crate::usecase::stores::group_selector::GroupSelector;
use crate::usecase::stores::sort_store::SortStore;
use crate::usecase::stores::visibility_store::VisibilityStore;

/// Read-only view of the stores an adapter rebuild reads from.
pub struct StoreView<'a> {
    pub filters: &'a FilterStore,
    pub visibility: &'a VisibilityStore,
    pub sorting: &'a SortStore,
    pub grouping: &'a GroupSelector,
    pub global_filter: &'a str,
    pub pagination: Pagination,
    pub expanded: &'a BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GridAdapter {
    config: TableConfig,
    model: RowModel,
    facets: BTreeMap<ColumnId, Vec<String>>,
}

impl GridAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rebuild(&mut self, view: StoreView<'_>, rows: &[RowRecord]) {
        self.config = build_table_config(&view);
        self.model = RowModel::build(rows, &self.config);
        self.config.pagination.page_index = self.model.page_index();
    }

    /// Distinct values for every multi-select column, from the whole dataset.
    pub fn refresh_facets(&mut self, rows: &[RowRecord]) {
        self.facets = COLUMNS
            .iter()
            .filter(|column| column.filter == Some(FilterKind::MultiSelect))
            .map(|column| {
                let values: BTreeSet<String> = rows
                    .iter()
                    .map(|row| row.value(column.id).display())
                    .filter(|value| !value.is_empty())
                    .collect();
                (column.id, values.into_iter().collect())
            })
            .collect();
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn faceted_values(&self, column: ColumnId) -> &[String] {
        self.facets.get(&column).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Top-level rows before pagination: leaf rows, or groups when grouped.
    pub fn visible_row_count(&self) -> usize {
        self.model.top_level().len()
    }

    pub fn filtered_row_count(&self) -> usize {
        self.model.filtered().len()
    }

    pub fn page_index(&self) -> usize {
        self.model.page_index()
    }

    pub fn page_count(&self) -> usize {
        self.model.page_count()
    }

    pub fn page_size(&self) -> usize {
        self.config.pagination.page_size
    }

    pub fn page_rows(&self) -> &[DisplayRow] {
        self.model.page_rows()
    }

    pub fn column_order(&self) -> &[ColumnId] {
        &self.config.column_order
    }
}

pub fn build_table_config(view: &StoreView<'_>) -> TableConfig {
    let grouping = view.grouping.selected();
    let mut column_order = view.visibility.visible_columns();
    if let Some(group) = grouping {
        if let Some(pos) = column_order.iter().position(|column| *column == group) {
            let column = column_order.remove(pos);
            column_order.insert(0, column);
        }
    }

    TableConfig {
        column_order,
        sorting: view.sorting.entries().to_vec(),
        grouping,
        column_filters: view.filters.entries().filter_map(column_filter).collect(),
        global_filter: view.global_filter.trim().to_string(),
        pagination: view.pagination,
        expanded: view.expanded.clone(),
    }
}

fn column_filter(entry: &FilterEntry) -> Option<ColumnFilter> {
    if !entry.is_active() {
        return None;
    }
    let predicate = match &entry.value {
        FilterValue::Text(text) => FilterPredicate::Fuzzy(text.trim().to_string()),
        FilterValue::Selection(values) => FilterPredicate::OneOf(values.clone()),
        FilterValue::Numeric(range) => FilterPredicate::Between(*range),
        FilterValue::Dates(range) => {
            let (start, end) = range.complete()?;
            FilterPredicate::DateBetween(start, end)
        }
    };
    Some(ColumnFilter {
        column: entry.column,
        predicate,
    })
}
